use anyhow::Result;
use clap::Args;
use fluenttc_api::{ConnectedTc, HttpClient};

use crate::output::{print_builds, OutputFormat};

#[derive(Args)]
pub struct BuildArgs {
    /// Numeric build id
    pub id: i64,
}

pub async fn run(args: &BuildArgs, tc: &ConnectedTc<HttpClient>, format: &OutputFormat) -> Result<()> {
    let build = tc.get_build(args.id).await?;
    print_builds(&[build], format)
}

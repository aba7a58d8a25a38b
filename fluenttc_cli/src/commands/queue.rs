use anyhow::Result;
use clap::Args;
use fluenttc_api::{ConnectedTc, HttpClient, QueueHaving};

use crate::output::{print_builds, OutputFormat};

#[derive(Args, Default)]
pub struct QueueArgs {
    /// Only queued builds of this project
    #[arg(long)]
    pub project: Option<String>,

    /// Only queued builds of this build configuration
    #[arg(long)]
    pub build_type: Option<String>,
}

/// `None` when no filter was given, so the whole queue is listed.
pub fn build_query(args: &QueueArgs) -> Option<QueueHaving> {
    if args.project.is_none() && args.build_type.is_none() {
        return None;
    }
    let mut having = QueueHaving::default();
    if let Some(project) = &args.project {
        having = having.with_project(project);
    }
    if let Some(build_type) = &args.build_type {
        having = having.with_build_type(build_type);
    }
    Some(having)
}

pub async fn run(args: &QueueArgs, tc: &ConnectedTc<HttpClient>, format: &OutputFormat) -> Result<()> {
    let having = build_query(args);
    let queued = tc.get_builds_queue(having.as_ref()).await?;

    eprintln!("{} queued builds", queued.len());
    print_builds(&queued, format)
}

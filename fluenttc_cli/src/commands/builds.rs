use anyhow::{anyhow, Result};
use clap::Args;
use fluenttc_api::types::BuildStatus;
use fluenttc_api::{BuildHaving, BuildInclude, ConnectedTc, CountBuilder, HttpClient};

use crate::output::{print_builds, OutputFormat};

#[derive(Args, Default)]
pub struct BuildsArgs {
    /// Filter by status: success, failure, error
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by project id
    #[arg(long)]
    pub project: Option<String>,

    /// Filter by build configuration id
    #[arg(long)]
    pub build_type: Option<String>,

    /// Filter by branch name
    #[arg(long)]
    pub branch: Option<String>,

    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only running builds
    #[arg(long)]
    pub running: bool,

    /// Only pinned builds
    #[arg(long)]
    pub pinned: bool,

    /// Maximum number of builds (server default when omitted)
    #[arg(long)]
    pub count: Option<i64>,

    /// Offset of the first build
    #[arg(long)]
    pub start: Option<i64>,

    /// Comma-separated fields to fetch (default: standard fields plus dates and branch)
    #[arg(long)]
    pub columns: Option<String>,
}

pub fn build_query(args: &BuildsArgs) -> Result<(BuildHaving, CountBuilder, BuildInclude)> {
    let mut having = BuildHaving::default();

    if let Some(status) = &args.status {
        let parsed = status.parse::<BuildStatus>().map_err(|_| {
            anyhow!(
                "Unknown build status '{}': expected success, failure or error",
                status
            )
        })?;
        having = having.with_status(parsed);
    }
    if let Some(project) = &args.project {
        having = having.with_project(project);
    }
    if let Some(build_type) = &args.build_type {
        having = having.with_build_type(build_type);
    }
    if let Some(branch) = &args.branch {
        having = having.with_branch(branch);
    }
    if let Some(tag) = &args.tag {
        having = having.with_tag(tag);
    }
    if args.running {
        having = having.running();
    }
    if args.pinned {
        having = having.pinned();
    }

    let mut count = CountBuilder::default();
    if let Some(n) = args.count {
        count = count.with_count(n);
    }
    if let Some(start) = args.start {
        count = count.with_start(start);
    }

    let include = match &args.columns {
        Some(columns) => columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .fold(BuildInclude::default(), |include, column| {
                include.with_column(column)
            }),
        None => BuildInclude::default()
            .include_defaults()
            .include_branch_name()
            .include_start_date()
            .include_finish_date(),
    };

    Ok((having, count, include))
}

pub async fn run(
    args: &BuildsArgs,
    tc: &ConnectedTc<HttpClient>,
    format: &OutputFormat,
) -> Result<()> {
    let (having, count, include) = build_query(args)?;
    let builds = tc.get_builds(&having, &count, &include).await?;

    eprintln!("{} builds", builds.len());
    print_builds(&builds, format)
}

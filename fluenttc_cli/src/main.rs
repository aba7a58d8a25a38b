mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fluenttc_api::{ConnectionConfig, RemoteTc};

use crate::config::ConnectionArgs;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fluenttc")]
#[command(about = "Query builds and manage project parameters on a TeamCity server")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List builds matching filters
    Builds(Box<commands::builds::BuildsArgs>),
    /// List the build queue
    Queue(commands::queue::QueueArgs),
    /// Show a single build by id
    Build(commands::build::BuildArgs),
    /// Set one or more project parameters
    SetParam(commands::params::SetParamArgs),
    /// Delete a project parameter
    DeleteParam(commands::params::DeleteParamArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG from it reaches the filter.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fluenttc=info".parse()?),
        )
        .with_target(false)
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    let format = OutputFormat::from_name(cli.output.as_str());

    let config = config::resolve(ConnectionConfig::from_env(), &cli.connection);
    let tc = RemoteTc::connect(&config)?;

    match &cli.command {
        Commands::Builds(args) => commands::builds::run(args.as_ref(), &tc, &format).await?,
        Commands::Queue(args) => commands::queue::run(args, &tc, &format).await?,
        Commands::Build(args) => commands::build::run(args, &tc, &format).await?,
        Commands::SetParam(args) => commands::params::run_set(args, &tc).await?,
        Commands::DeleteParam(args) => commands::params::run_delete(args, &tc).await?,
    }

    Ok(())
}

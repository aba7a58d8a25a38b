//! CLI subcommand implementations.

pub mod build;
pub mod builds;
pub mod params;
pub mod queue;

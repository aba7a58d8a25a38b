use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use fluenttc_api::types::Build;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct BuildRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Build Type")]
    #[serde(rename = "Build Type")]
    build_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "Branch")]
    #[serde(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Started")]
    #[serde(rename = "Started")]
    started: String,
    #[tabled(rename = "Finished")]
    #[serde(rename = "Finished")]
    finished: String,
}

fn build_rows(builds: &[Build]) -> Vec<BuildRow> {
    builds
        .iter()
        .map(|b| BuildRow {
            id: b.id,
            number: b.number.clone().unwrap_or_default(),
            build_type: b.build_type_id.clone().unwrap_or_default(),
            status: b.status.map(|s| s.to_string()).unwrap_or_default(),
            state: b.state.map(|s| s.to_string()).unwrap_or_default(),
            branch: b.branch_name.clone().unwrap_or_default(),
            started: format_date(b.started_at().or_else(|| b.queued_at())),
            finished: format_date(b.finished_at()),
        })
        .collect()
}

pub fn print_builds(builds: &[Build], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_builds_table(builds),
        OutputFormat::Json => print_json(&builds),
        OutputFormat::Csv => print_builds_csv(builds)?,
        OutputFormat::Markdown => print_builds_markdown(builds),
    }
    Ok(())
}

pub fn print_builds_table(builds: &[Build]) {
    println!("{}", Table::new(build_rows(builds)));
}

pub fn print_builds_markdown(builds: &[Build]) {
    let mut table = Table::new(build_rows(builds));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_builds_csv(builds: &[Build]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_rows(builds) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_date(date: Option<DateTime<FixedOffset>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

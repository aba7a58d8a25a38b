//! Build entities returned by the `/builds` and `/buildQueue` endpoints.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Timestamp layout TeamCity uses on the wire, e.g. `20151022T101010+0300`.
pub const TEAMCITY_DATE_FORMAT: &str = "%Y%m%dT%H%M%S%z";

/// Outcome of a finished (or running) build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildStatus {
    Success,
    Failure,
    Error,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BuildStatus::Success => "SUCCESS",
                BuildStatus::Failure => "FAILURE",
                BuildStatus::Error => "ERROR",
                BuildStatus::Unknown => "UNKNOWN",
            }
        )
    }
}

impl FromStr for BuildStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUCCESS" => Ok(BuildStatus::Success),
            "FAILURE" => Ok(BuildStatus::Failure),
            "ERROR" => Ok(BuildStatus::Error),
            _ => Err(()),
        }
    }
}

/// Lifecycle stage of a build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    Queued,
    Running,
    Finished,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for BuildState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BuildState::Queued => "queued",
                BuildState::Running => "running",
                BuildState::Finished => "finished",
                BuildState::Unknown => "unknown",
            }
        )
    }
}

/// A single build. Only `id` is always present; every other field is filled
/// in when it was requested through the `fields` projection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Server-wide numeric build id.
    pub id: i64,

    /// Id of the build configuration this build belongs to.
    pub build_type_id: Option<String>,

    /// Build number as displayed in the UI (not necessarily numeric).
    pub number: Option<String>,

    pub status: Option<BuildStatus>,

    pub state: Option<BuildState>,

    pub branch_name: Option<String>,

    pub href: Option<String>,

    pub web_url: Option<String>,

    pub status_text: Option<String>,

    /// Start time in [`TEAMCITY_DATE_FORMAT`].
    pub start_date: Option<String>,

    /// Finish time in [`TEAMCITY_DATE_FORMAT`].
    pub finish_date: Option<String>,

    /// Time the build entered the queue, in [`TEAMCITY_DATE_FORMAT`].
    pub queued_date: Option<String>,
}

impl Build {
    /// Parsed start time, if present and well-formed.
    pub fn started_at(&self) -> Option<DateTime<FixedOffset>> {
        self.start_date.as_deref().and_then(parse_date)
    }

    /// Parsed finish time, if present and well-formed.
    pub fn finished_at(&self) -> Option<DateTime<FixedOffset>> {
        self.finish_date.as_deref().and_then(parse_date)
    }

    /// Parsed queue time, if present and well-formed.
    pub fn queued_at(&self) -> Option<DateTime<FixedOffset>> {
        self.queued_date.as_deref().and_then(parse_date)
    }
}

fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, TEAMCITY_DATE_FORMAT).ok()
}

use serde::{Deserialize, Deserializer, Serialize};

use super::Build;

/// Envelope returned by list endpoints: a server-reported count plus the
/// projected builds.
///
/// `count` stays textual because the server is the authority on it; callers
/// parse it when they need the number. The JSON API sends a number, the XML
/// API an attribute string, and both are accepted here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildWrapper {
    #[serde(deserialize_with = "count_as_text")]
    pub count: String,

    /// Omitted by the server when there is nothing to list.
    #[serde(default)]
    pub build: Vec<Build>,
}

fn count_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(i64),
        Text(String),
    }

    Ok(match Count::deserialize(deserializer)? {
        Count::Number(n) => n.to_string(),
        Count::Text(text) => text,
    })
}

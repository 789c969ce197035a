use serde::{Deserialize, Serialize};
use std::fmt;

/// A user or point identifier as the statistics API sends it: either a JSON
/// string or a JSON number. Serializes back in its original form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl Identifier {
    /// Empty strings and zero are treated as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Identifier::Text(text) => !text.is_empty(),
            Identifier::Number(number) => number.as_f64().map_or(false, |n| n != 0.0),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(text) => f.write_str(text),
            Identifier::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

/// Body the frontend posts to `/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, rename = "pointId")]
    pub point_id: Option<Identifier>,
}

/// Body forwarded to the statistics API.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamRequest<'a> {
    pub from: &'a str,
    #[serde(rename = "pointId")]
    pub point_id: &'a Identifier,
    pub to: &'a str,
}

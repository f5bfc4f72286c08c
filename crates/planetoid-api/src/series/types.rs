use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One hit of a show search, as the search service wraps it.
///
/// Fields without a typed counterpart are kept in `extra`, so a hit
/// serializes back to what the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub show: Show,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub image: Option<ShowImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowImage {
    pub medium: String,
    pub original: String,
}

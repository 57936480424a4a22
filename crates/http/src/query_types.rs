//! Request/query types (Deserialize)

use serde::Deserialize;

/// Query of `POST /sensor/{id}`. `value` stays a string so a malformed number
/// is reported as a validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct InsertQuery {
    pub value: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardPageQuery {
    #[serde(default = "default_selector")]
    pub sensor: String,
}

fn default_selector() -> String {
    "all".to_owned()
}

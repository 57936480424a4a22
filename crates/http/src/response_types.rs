//! Response types (Serialize)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertResponse {
    pub message: String,
    pub sensor_id: i32,
    pub value: f64,
}

impl InsertResponse {
    #[must_use]
    pub fn inserted(sensor_id: i32, value: f64) -> Self {
        Self { message: "Value inserted".to_owned(), sensor_id, value }
    }
}

//! Chart series for the dashboard.
//!
//! The store hands back readings newest-first; everything here reorders them
//! oldest-first and groups them per sensor so a chart can draw one line each.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{default_device_name, Reading};

/// Which readings a dashboard request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSelector {
    All,
    Sensor(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dashboard selector must be \"all\" or a sensor id, got {0:?}")]
pub struct InvalidSelector(pub String);

impl FromStr for DashboardSelector {
    type Err = InvalidSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse::<i32>().map(Self::Sensor).map_err(|_| InvalidSelector(s.to_owned()))
    }
}

impl fmt::Display for DashboardSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Sensor(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub sensor_id: i32,
    pub value: f64,
    pub unit: String,
    pub timestamp: String,
}

impl From<&Reading> for DashboardRow {
    fn from(reading: &Reading) -> Self {
        Self {
            sensor_id: reading.sensor_id,
            value: reading.value,
            unit: reading.unit_or_empty().to_owned(),
            timestamp: reading.formatted_timestamp(),
        }
    }
}

/// One chart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sensor_id: i32,
    pub label: String,
    pub data: Vec<f64>,
    pub timestamps: Vec<String>,
}

impl Dataset {
    fn from_chronological(sensor_id: i32, readings: &[Reading]) -> Self {
        Self {
            sensor_id,
            label: default_device_name(sensor_id),
            data: readings.iter().map(|r| r.value).collect(),
            timestamps: readings.iter().map(Reading::formatted_timestamp).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSeries {
    /// Every reading covered, oldest first.
    pub rows: Vec<DashboardRow>,
    /// Distinct chart labels, oldest first.
    pub timestamps: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl DashboardSeries {
    /// Groups a mixed newest-first batch into one series per sensor, ordered by sensor id.
    #[must_use]
    pub fn for_all_sensors(newest_first: Vec<Reading>) -> Self {
        // Reversed first so the stable sort leaves equal timestamps oldest-first.
        let mut rows = crate::chronological(newest_first);
        rows.sort_by_key(|r| r.created_at);

        let mut groups: BTreeMap<i32, Vec<Reading>> = BTreeMap::new();
        for reading in &rows {
            groups.entry(reading.sensor_id).or_default().push(reading.clone());
        }
        let datasets = groups
            .iter()
            .map(|(sensor_id, readings)| Dataset::from_chronological(*sensor_id, readings))
            .collect();

        Self::assemble(&rows, datasets)
    }

    /// Single-sensor series; the input is that sensor's readings, newest first.
    #[must_use]
    pub fn for_sensor(sensor_id: i32, newest_first: Vec<Reading>) -> Self {
        let rows = crate::chronological(newest_first);
        let datasets = if rows.is_empty() {
            Vec::new()
        } else {
            vec![Dataset::from_chronological(sensor_id, &rows)]
        };
        Self::assemble(&rows, datasets)
    }

    fn assemble(chronological_rows: &[Reading], datasets: Vec<Dataset>) -> Self {
        let mut timestamps: Vec<String> =
            chronological_rows.iter().map(Reading::formatted_timestamp).collect();
        timestamps.dedup();
        Self {
            rows: chronological_rows.iter().map(DashboardRow::from).collect(),
            timestamps,
            datasets,
        }
    }
}

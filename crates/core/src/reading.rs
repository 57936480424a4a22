//! Sensor readings and the shapes they are served in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TIMESTAMP_FORMAT;

/// One timestamped sensor measurement, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub sensor_id: i32,
    pub value: f64,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reading {
    #[must_use]
    pub fn new(
        sensor_id: i32,
        value: f64,
        unit: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { sensor_id, value, unit, created_at }
    }

    /// Unit for display; readings stored without one render as `""`.
    #[must_use]
    pub fn unit_or_empty(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// A reading submitted by a device client, before the store stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReading {
    pub sensor_id: i32,
    pub value: f64,
    pub unit: Option<String>,
}

/// Static reference data for a sensor endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: i32,
    pub name: String,
}

impl Device {
    /// Uses the stored name when present, otherwise `Sensor <id>`.
    #[must_use]
    pub fn resolve(id: i32, stored_name: Option<String>) -> Self {
        let name = stored_name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| default_device_name(id));
        Self { id, name }
    }
}

#[must_use]
pub fn default_device_name(id: i32) -> String {
    format!("Sensor {id}")
}

#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Latest reading of one device, as listed by `/api/devices/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReading {
    pub id: i32,
    pub value: f64,
    pub unit: String,
    pub timestamp: String,
}

impl From<&Reading> for DeviceReading {
    fn from(reading: &Reading) -> Self {
        Self {
            id: reading.sensor_id,
            value: reading.value,
            unit: reading.unit_or_empty().to_owned(),
            timestamp: reading.formatted_timestamp(),
        }
    }
}

/// Latest reading of one device together with its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub id: i32,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub timestamp: String,
}

impl DeviceSnapshot {
    #[must_use]
    pub fn new(device: Device, reading: &Reading) -> Self {
        Self {
            id: device.id,
            name: device.name,
            value: reading.value,
            unit: reading.unit_or_empty().to_owned(),
            timestamp: reading.formatted_timestamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub value: f64,
    pub timestamp: String,
}

impl From<&Reading> for HistoryPoint {
    fn from(reading: &Reading) -> Self {
        Self { value: reading.value, timestamp: reading.formatted_timestamp() }
    }
}

/// Turns a newest-first result set into oldest-first order.
#[must_use]
pub fn chronological(mut newest_first: Vec<Reading>) -> Vec<Reading> {
    newest_first.reverse();
    newest_first
}

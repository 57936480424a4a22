//! Storage trait abstraction.

use async_trait::async_trait;
use sensor_gateway_core::{Device, NewReading, Reading};

use crate::StorageError;

/// Every query the gateway issues against the readings table.
///
/// Methods returning several readings of one sensor return them newest first,
/// the order the table is indexed in; callers reorder for display.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Persist one reading and return it as stored (with `created_at`).
    async fn insert_reading(&self, reading: &NewReading) -> Result<Reading, StorageError>;

    /// Distinct sensor ids present in the readings table, ascending.
    async fn list_sensor_ids(&self) -> Result<Vec<i32>, StorageError>;

    /// Most recent reading of every sensor, ordered by sensor id.
    async fn latest_per_sensor(&self) -> Result<Vec<(Device, Reading)>, StorageError>;

    /// Most recent reading of one sensor together with its device entry.
    async fn latest_reading(&self, sensor_id: i32)
    -> Result<Option<(Device, Reading)>, StorageError>;

    /// Up to `limit` most recent readings of one sensor, newest first.
    async fn recent_readings(&self, sensor_id: i32, limit: u32)
    -> Result<Vec<Reading>, StorageError>;

    /// Up to `limit` most recent readings across all sensors, newest first.
    async fn recent_readings_all(&self, limit: u32) -> Result<Vec<Reading>, StorageError>;
}

//! In-process `ReadingStore` for tests and local demos.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sensor_gateway_core::{Device, NewReading, Reading};
use tokio::sync::RwLock;

use crate::traits::ReadingStore;
use crate::StorageError;

#[derive(Debug, Default)]
pub struct MemoryReadingStore {
    readings: RwLock<Vec<Reading>>,
    device_names: RwLock<HashMap<i32, String>>,
    failure: Option<String>,
}

impl MemoryReadingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    /// Seed a reading with an explicit timestamp.
    pub async fn push(&self, reading: Reading) {
        self.readings.write().await.push(reading);
    }

    pub async fn name_device(&self, id: i32, name: impl Into<String>) {
        self.device_names.write().await.insert(id, name.into());
    }

    pub async fn len(&self) -> usize {
        self.readings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.readings.read().await.is_empty()
    }

    fn check(&self) -> Result<(), StorageError> {
        match &self.failure {
            Some(message) => Err(StorageError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    async fn device(&self, id: i32) -> Device {
        Device::resolve(id, self.device_names.read().await.get(&id).cloned())
    }

    /// Newest first; ties keep the later insert first, like an append-only table.
    async fn newest_first<P>(&self, keep: P) -> Vec<Reading>
    where
        P: Fn(&Reading) -> bool,
    {
        let readings = self.readings.read().await;
        let mut selected: Vec<Reading> =
            readings.iter().rev().filter(|r| keep(r)).cloned().collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }
}

fn take(readings: Vec<Reading>, limit: u32) -> Vec<Reading> {
    readings.into_iter().take(usize::try_from(limit).unwrap_or(usize::MAX)).collect()
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn insert_reading(&self, reading: &NewReading) -> Result<Reading, StorageError> {
        self.check()?;
        let created_at: DateTime<Utc> = Utc::now();
        let stored =
            Reading::new(reading.sensor_id, reading.value, reading.unit.clone(), created_at);
        self.readings.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_sensor_ids(&self) -> Result<Vec<i32>, StorageError> {
        self.check()?;
        let mut ids: Vec<i32> = self.readings.read().await.iter().map(|r| r.sensor_id).collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    async fn latest_per_sensor(&self) -> Result<Vec<(Device, Reading)>, StorageError> {
        self.check()?;
        let mut latest: BTreeMap<i32, Reading> = BTreeMap::new();
        for reading in self.newest_first(|_| true).await {
            latest.entry(reading.sensor_id).or_insert(reading);
        }
        let mut out = Vec::with_capacity(latest.len());
        for (id, reading) in latest {
            out.push((self.device(id).await, reading));
        }
        Ok(out)
    }

    async fn latest_reading(
        &self,
        sensor_id: i32,
    ) -> Result<Option<(Device, Reading)>, StorageError> {
        self.check()?;
        let newest = self.newest_first(|r| r.sensor_id == sensor_id).await.into_iter().next();
        match newest {
            Some(reading) => Ok(Some((self.device(sensor_id).await, reading))),
            None => Ok(None),
        }
    }

    async fn recent_readings(
        &self,
        sensor_id: i32,
        limit: u32,
    ) -> Result<Vec<Reading>, StorageError> {
        self.check()?;
        Ok(take(self.newest_first(|r| r.sensor_id == sensor_id).await, limit))
    }

    async fn recent_readings_all(&self, limit: u32) -> Result<Vec<Reading>, StorageError> {
        self.check()?;
        Ok(take(self.newest_first(|_| true).await, limit))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_recent_readings_newest_first_and_limited() {
        let store = MemoryReadingStore::new();
        for i in 0..5 {
            store.push(Reading::new(1, f64::from(i), None, at(i64::from(i)))).await;
        }
        store.push(Reading::new(2, 99.0, None, at(100))).await;

        let recent = store.recent_readings(1, 3).await.unwrap();
        let values: Vec<f64> = recent.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![4.0, 3.0, 2.0]);
    }

    #[tokio::test]
    async fn test_latest_per_sensor_ordered_by_id() {
        let store = MemoryReadingStore::new();
        store.push(Reading::new(3, 1.0, None, at(1))).await;
        store.push(Reading::new(1, 2.0, None, at(2))).await;
        store.push(Reading::new(3, 3.0, None, at(3))).await;
        store.name_device(3, "Greenhouse").await;

        let latest = store.latest_per_sensor().await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].0.name, "Sensor 1");
        assert_eq!(latest[1].0.name, "Greenhouse");
        assert_eq!(latest[1].1.value, 3.0);
    }

    #[tokio::test]
    async fn test_failing_store_writes_nothing() {
        let store = MemoryReadingStore::failing("connection refused");
        let err = store
            .insert_reading(&NewReading { sensor_id: 1, value: 1.0, unit: None })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert!(store.is_empty().await);
    }
}

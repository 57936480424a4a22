//! Integration tests for PgReadingStore.
//! Run with: COIN_STRING=... cargo test -p sensor-gateway-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use sensor_gateway_core::{GatewayConfig, NewReading};
use sensor_gateway_storage::{PgReadingStore, ReadingStore};

async fn create_pg_store() -> PgReadingStore {
    let url = std::env::var("COIN_STRING")
        .expect("COIN_STRING must be set for PgReadingStore integration tests");
    let store = PgReadingStore::new(GatewayConfig::new(url));
    store.migrate().await.expect("Failed to migrate PostgreSQL schema");
    store
}

/// Sensor ids far above anything a real deployment uses, distinct per test run.
fn unique_sensor_id() -> i32 {
    static NEXT: AtomicI32 = AtomicI32::new(0);
    let base = i32::try_from(std::process::id() % 10_000).unwrap() * 1_000;
    1_000_000_000 + base + NEXT.fetch_add(1, Ordering::Relaxed)
}

fn new_reading(sensor_id: i32, value: f64) -> NewReading {
    NewReading { sensor_id, value, unit: Some("C".to_owned()) }
}

#[tokio::test]
#[ignore]
async fn pg_insert_then_latest() {
    let store = create_pg_store().await;
    let sensor_id = unique_sensor_id();
    let before = Utc::now() - chrono::Duration::seconds(1);

    let stored = store.insert_reading(&new_reading(sensor_id, 21.5)).await.unwrap();
    assert_eq!(stored.sensor_id, sensor_id);
    assert_eq!(stored.value, 21.5);

    let (device, latest) = store.latest_reading(sensor_id).await.unwrap().unwrap();
    assert_eq!(device.id, sensor_id);
    assert_eq!(device.name, format!("Sensor {sensor_id}"));
    assert_eq!(latest.value, 21.5);
    assert_eq!(latest.unit.as_deref(), Some("C"));
    assert!(latest.created_at >= before);
}

#[tokio::test]
#[ignore]
async fn pg_latest_for_unknown_sensor_is_none() {
    let store = create_pg_store().await;
    let sensor_id = unique_sensor_id();
    assert!(store.latest_reading(sensor_id).await.unwrap().is_none());
    assert!(store.recent_readings(sensor_id, 50).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn pg_recent_readings_respects_limit() {
    let store = create_pg_store().await;
    let sensor_id = unique_sensor_id();
    for i in 0..12 {
        store.insert_reading(&new_reading(sensor_id, f64::from(i))).await.unwrap();
    }

    let recent = store.recent_readings(sensor_id, 10).await.unwrap();
    assert_eq!(recent.len(), 10);
    assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
#[ignore]
async fn pg_sensor_ids_are_distinct_and_sorted() {
    let store = create_pg_store().await;
    let first = unique_sensor_id();
    let second = unique_sensor_id();
    store.insert_reading(&new_reading(second, 1.0)).await.unwrap();
    store.insert_reading(&new_reading(first, 1.0)).await.unwrap();
    store.insert_reading(&new_reading(first, 2.0)).await.unwrap();

    let ids = store.list_sensor_ids().await.unwrap();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(ids.contains(&first));
    assert!(ids.contains(&second));

    let latest = store.latest_per_sensor().await.unwrap();
    let (_, reading) = latest.iter().find(|(d, _)| d.id == first).unwrap();
    assert_eq!(reading.value, 2.0);
}

#[tokio::test]
#[ignore]
async fn pg_bad_connection_string_is_connection_error() {
    let store = PgReadingStore::new(GatewayConfig::new("postgres://nobody@127.0.0.1:1/none"));
    let err = store.list_sensor_ids().await.unwrap_err();
    assert!(matches!(err, sensor_gateway_storage::StorageError::Connection(_)));
}

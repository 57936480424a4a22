//! ReadingStore implementation for PgReadingStore.

use async_trait::async_trait;
use sensor_gateway_core::{Device, NewReading, Reading};

use crate::traits::ReadingStore;
use crate::StorageError;

use super::{limit_to_i64, row_to_device_reading, row_to_reading, PgReadingStore};

// The casts keep decoding stable whether the columns were created as REAL/TIMESTAMP
// or DOUBLE PRECISION/TIMESTAMPTZ.
#[async_trait]
impl ReadingStore for PgReadingStore {
    async fn insert_reading(&self, reading: &NewReading) -> Result<Reading, StorageError> {
        let NewReading { sensor_id, value, unit } = reading.clone();
        let stored = self
            .with_connection("insert_reading", move |conn| {
                Box::pin(async move {
                    let row = sqlx::query(
                        "INSERT INTO sensores (sensor_id, value, unit) VALUES ($1, $2, $3)
                           RETURNING sensor_id, value::float8 AS value, unit,
                                     created_at::timestamptz AS created_at",
                    )
                    .bind(sensor_id)
                    .bind(value)
                    .bind(unit)
                    .fetch_one(&mut *conn)
                    .await?;
                    row_to_reading(&row)
                })
            })
            .await?;
        tracing::debug!(sensor_id, value, "reading inserted");
        Ok(stored)
    }

    async fn list_sensor_ids(&self) -> Result<Vec<i32>, StorageError> {
        self.with_connection("list_sensor_ids", |conn| {
            Box::pin(async move {
                sqlx::query_scalar("SELECT DISTINCT sensor_id FROM sensores ORDER BY sensor_id")
                    .fetch_all(&mut *conn)
                    .await
            })
        })
        .await
    }

    async fn latest_per_sensor(&self) -> Result<Vec<(Device, Reading)>, StorageError> {
        self.with_connection("latest_per_sensor", |conn| {
            Box::pin(async move {
                let rows = sqlx::query(
                    "SELECT DISTINCT ON (s.sensor_id)
                            s.sensor_id, s.value::float8 AS value, s.unit,
                            s.created_at::timestamptz AS created_at, d.name AS device_name
                       FROM sensores s
                       LEFT JOIN dispositivos d ON d.id = s.sensor_id
                      ORDER BY s.sensor_id, s.created_at DESC",
                )
                .fetch_all(&mut *conn)
                .await?;
                rows.iter().map(row_to_device_reading).collect()
            })
        })
        .await
    }

    async fn latest_reading(
        &self,
        sensor_id: i32,
    ) -> Result<Option<(Device, Reading)>, StorageError> {
        self.with_connection("latest_reading", move |conn| {
            Box::pin(async move {
                let row = sqlx::query(
                    "SELECT s.sensor_id, s.value::float8 AS value, s.unit,
                            s.created_at::timestamptz AS created_at, d.name AS device_name
                       FROM sensores s
                       LEFT JOIN dispositivos d ON d.id = s.sensor_id
                      WHERE s.sensor_id = $1
                      ORDER BY s.created_at DESC
                      LIMIT 1",
                )
                .bind(sensor_id)
                .fetch_optional(&mut *conn)
                .await?;
                row.as_ref().map(row_to_device_reading).transpose()
            })
        })
        .await
    }

    async fn recent_readings(
        &self,
        sensor_id: i32,
        limit: u32,
    ) -> Result<Vec<Reading>, StorageError> {
        self.with_connection("recent_readings", move |conn| {
            Box::pin(async move {
                let rows = sqlx::query(
                    "SELECT sensor_id, value::float8 AS value, unit,
                            created_at::timestamptz AS created_at
                       FROM sensores
                      WHERE sensor_id = $1
                      ORDER BY created_at DESC
                      LIMIT $2",
                )
                .bind(sensor_id)
                .bind(limit_to_i64(limit))
                .fetch_all(&mut *conn)
                .await?;
                rows.iter().map(row_to_reading).collect()
            })
        })
        .await
    }

    async fn recent_readings_all(&self, limit: u32) -> Result<Vec<Reading>, StorageError> {
        self.with_connection("recent_readings_all", move |conn| {
            Box::pin(async move {
                let rows = sqlx::query(
                    "SELECT sensor_id, value::float8 AS value, unit,
                            created_at::timestamptz AS created_at
                       FROM sensores
                      ORDER BY created_at DESC
                      LIMIT $1",
                )
                .bind(limit_to_i64(limit))
                .fetch_all(&mut *conn)
                .await?;
                rows.iter().map(row_to_reading).collect()
            })
        })
        .await
    }
}

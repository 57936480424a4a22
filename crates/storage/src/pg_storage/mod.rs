//! PostgreSQL storage backend using sqlx.
//!
//! No pool: every operation opens its own `PgConnection` from the configured
//! connection string and closes it before returning, whatever the outcome.

mod readings;

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use sensor_gateway_core::{Device, GatewayConfig, Reading};
use sqlx::postgres::PgRow;
use sqlx::{Connection, PgConnection, Row};

use crate::pg_migrations::run_pg_migrations;
use crate::StorageError;

#[derive(Clone, Debug)]
pub struct PgReadingStore {
    config: GatewayConfig,
}

impl PgReadingStore {
    /// Does not touch the database; connections are opened per operation.
    #[must_use]
    pub const fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Create the readings and devices tables if they are missing.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        let result = run_pg_migrations(&mut conn).await;
        close_quietly(conn, "migrate").await;
        result.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("reading store schema is up to date");
        Ok(())
    }

    async fn connect(&self) -> Result<PgConnection, StorageError> {
        PgConnection::connect(&self.config.database_url).await.map_err(|e| {
            tracing::warn!(error = %e, "connection failed");
            StorageError::Connection(e)
        })
    }

    /// Runs `op` on a fresh connection and releases it on success and error alike.
    pub(crate) async fn with_connection<T, F>(
        &self,
        name: &'static str,
        op: F,
    ) -> Result<T, StorageError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, sqlx::Error>> + Send,
    {
        let mut conn = self.connect().await?;
        let result = op(&mut conn).await;
        close_quietly(conn, name).await;
        result.map_err(|e| {
            tracing::warn!(op = name, error = %e, "query failed");
            StorageError::Database(e)
        })
    }
}

async fn close_quietly(conn: PgConnection, name: &'static str) {
    if let Err(e) = conn.close().await {
        tracing::warn!(op = name, error = %e, "connection did not close cleanly");
    }
}

pub(crate) fn row_to_reading(row: &PgRow) -> Result<Reading, sqlx::Error> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Reading::new(
        row.try_get("sensor_id")?,
        row.try_get("value")?,
        row.try_get("unit")?,
        created_at,
    ))
}

/// Rows joined against `dispositivos` carry a nullable `device_name` column.
pub(crate) fn row_to_device_reading(row: &PgRow) -> Result<(Device, Reading), sqlx::Error> {
    let reading = row_to_reading(row)?;
    let device = Device::resolve(reading.sensor_id, row.try_get("device_name")?);
    Ok((device, reading))
}

pub(crate) fn limit_to_i64(limit: u32) -> i64 {
    i64::from(limit)
}

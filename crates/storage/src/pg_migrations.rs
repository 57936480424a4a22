//! PostgreSQL schema for the readings and devices tables.

use sqlx::PgConnection;

/// Create tables and indexes if they do not exist yet. Safe to re-run.
pub async fn run_pg_migrations(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sensores (
            id BIGSERIAL PRIMARY KEY,
            sensor_id INTEGER NOT NULL,
            value DOUBLE PRECISION NOT NULL,
            unit TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_sensores_sensor_created
           ON sensores (sensor_id, created_at DESC)",
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_sensores_created ON sensores (created_at DESC)")
        .execute(&mut *conn)
        .await?;

    // Reference data only; the application never writes here and does not
    // enforce that readings point at an existing row.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dispositivos (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

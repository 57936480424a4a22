//! Schema setup for the readings and devices tables.

use sensor_gateway_core::GatewayConfig;
use sensor_gateway_storage::PgReadingStore;

pub(crate) async fn run(config: GatewayConfig) -> anyhow::Result<()> {
    PgReadingStore::new(config).migrate().await?;
    println!("Migration complete!");
    Ok(())
}

//! One-shot queries printed as JSON.

use anyhow::Result;
use sensor_gateway_core::GatewayConfig;

pub(crate) async fn devices(config: GatewayConfig) -> Result<()> {
    let ids = super::reading_service(config).list_device_ids().await?;
    println!("{}", serde_json::to_string_pretty(&ids)?);
    Ok(())
}

pub(crate) async fn latest(config: GatewayConfig, sensor_id: i32) -> Result<()> {
    match super::reading_service(config).latest_reading(sensor_id).await {
        Ok(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        Err(e) if e.is_not_found() => println!("Sensor not found: {sensor_id}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

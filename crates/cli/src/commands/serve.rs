use anyhow::Result;
use sensor_gateway_core::GatewayConfig;
use sensor_gateway_http::AppState;
use sensor_gateway_storage::PgReadingStore;
use std::sync::Arc;

pub(crate) async fn run(config: GatewayConfig, migrate: bool) -> Result<()> {
    tracing::info!(?config, "starting sensor gateway");
    if migrate {
        PgReadingStore::new(config.clone()).migrate().await?;
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(super::reading_service(config)));
    sensor_gateway_http::serve(state, &addr).await?;
    Ok(())
}

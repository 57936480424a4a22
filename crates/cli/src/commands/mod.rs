pub(crate) mod migrate;
pub(crate) mod query;
pub(crate) mod serve;

use std::sync::Arc;

use sensor_gateway_core::GatewayConfig;
use sensor_gateway_service::ReadingService;
use sensor_gateway_storage::PgReadingStore;

pub(crate) fn reading_service(config: GatewayConfig) -> Arc<ReadingService> {
    Arc::new(ReadingService::new(Arc::new(PgReadingStore::new(config))))
}

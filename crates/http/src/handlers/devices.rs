use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use sensor_gateway_core::{DeviceReading, DeviceSnapshot};

use crate::api_error::ApiError;
use crate::AppState;

pub async fn list_device_ids(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<i32>>, ApiError> {
    Ok(Json(state.reading_service.list_device_ids().await?))
}

pub async fn latest_per_device(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DeviceReading>>, ApiError> {
    Ok(Json(state.reading_service.latest_per_device().await?))
}

pub async fn latest_reading(
    State(state): State<Arc<AppState>>,
    Path(sensor_id): Path<i32>,
) -> Result<Json<DeviceSnapshot>, ApiError> {
    Ok(Json(state.reading_service.latest_reading(sensor_id).await?))
}

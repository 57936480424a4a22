use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use sensor_gateway_core::DashboardSeries;

use crate::api_error::ApiError;
use crate::AppState;

/// `GET /api/dashboard/{id|all}`
pub async fn dashboard_series(
    State(state): State<Arc<AppState>>,
    Path(selector): Path<String>,
) -> Result<Json<DashboardSeries>, ApiError> {
    Ok(Json(state.reading_service.dashboard_for(&selector).await?))
}

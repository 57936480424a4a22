//! Server-rendered HTML pages.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use sensor_gateway_core::DashboardSelector;
use sensor_gateway_service::ServiceError;

use crate::api_error::ApiError;
use crate::query_types::DashboardPageQuery;
use crate::views::{DashboardTemplate, DeviceTemplate, DevicesTemplate, NotFoundTemplate};
use crate::AppState;

pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardPageQuery>,
) -> Result<Html<String>, ApiError> {
    let selected = query
        .sensor
        .parse::<DashboardSelector>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let sensor_ids = state.reading_service.list_device_ids().await?;
    Ok(Html(DashboardTemplate::new(selected, sensor_ids).render()?))
}

pub async fn devices_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let devices = state.reading_service.device_overview().await?;
    Ok(Html(DevicesTemplate { devices }.render()?))
}

pub async fn device_page(
    State(state): State<Arc<AppState>>,
    Path(sensor_id): Path<i32>,
) -> Result<Response, ApiError> {
    let snapshot = match state.reading_service.latest_reading(sensor_id).await {
        Ok(snapshot) => snapshot,
        Err(ServiceError::NotFound(_)) => {
            let page = NotFoundTemplate { sensor_id }.render()?;
            return Ok((StatusCode::NOT_FOUND, Html(page)).into_response());
        },
        Err(e) => return Err(e.into()),
    };
    let history = state.reading_service.reading_history(sensor_id, None).await?;
    Ok(Html(DeviceTemplate { device: snapshot, history }.render()?).into_response())
}

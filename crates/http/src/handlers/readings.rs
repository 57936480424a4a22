use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use sensor_gateway_core::HistoryPoint;

use crate::api_error::ApiError;
use crate::query_types::{HistoryQuery, InsertQuery};
use crate::response_types::InsertResponse;
use crate::AppState;

pub async fn insert_reading(
    State(state): State<Arc<AppState>>,
    Path(sensor_id): Path<i32>,
    Query(query): Query<InsertQuery>,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let stored = state
        .reading_service
        .insert_reading(sensor_id, query.value.as_deref(), query.unit)
        .await?;
    Ok((StatusCode::CREATED, Json(InsertResponse::inserted(stored.sensor_id, stored.value))))
}

pub async fn reading_history(
    State(state): State<Arc<AppState>>,
    Path(sensor_id): Path<i32>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryPoint>>, ApiError> {
    let history = state.reading_service.reading_history(sensor_id, query.limit).await?;
    Ok(Json(history))
}

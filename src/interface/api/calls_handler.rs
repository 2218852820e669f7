//! Call session API handlers

use super::dto::{
    ApiResponse, DurationOverrideRequest, OperationResponse, SnapshotResponse, StartCallRequest,
};
use crate::domain::call::entity::ActiveCall;
use crate::domain::call_registry::CallRegistry;
use crate::domain::shared::value_objects::CallId;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CallRegistry>,
}

/// Liveness probe
pub async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("ok".to_string()))
}

/// Start a call
pub async fn start_call(
    State(state): State<AppState>,
    Json(request): Json<StartCallRequest>,
) -> (StatusCode, Json<ApiResponse<ActiveCall>>) {
    info!("API: Starting call for contact {}", request.contact.id);

    match state.registry.start_call(request.into_setup()) {
        Ok(call) => (StatusCode::CREATED, Json(ApiResponse::success(call))),
        Err(rejection) => {
            error!("API: Call rejected: {}", rejection);
            (
                StatusCode::CONFLICT,
                Json(ApiResponse::error(rejection.to_string())),
            )
        }
    }
}

/// Get all live calls plus the focus pointer
pub async fn list_calls(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SnapshotResponse>>, StatusCode> {
    let snapshot = state.registry.snapshot();
    let total = snapshot.calls.len();

    Ok(Json(ApiResponse::success(SnapshotResponse {
        calls: snapshot.calls,
        focused_call_id: snapshot.focused_call_id,
        total,
    })))
}

/// Get the foregrounded call
pub async fn get_focused_call(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ActiveCall>>, StatusCode> {
    match state.registry.focused_call() {
        Some(call) => Ok(Json(ApiResponse::success(call))),
        None => Ok(Json(ApiResponse::error("No call is focused".to_string()))),
    }
}

/// Get a live call by id
pub async fn get_call(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> Result<Json<ApiResponse<ActiveCall>>, StatusCode> {
    let call_id = match CallId::parse(&call_id) {
        Ok(id) => id,
        Err(e) => return Ok(Json(ApiResponse::error(e.to_string()))),
    };

    match state.registry.call(&call_id) {
        Some(call) => Ok(Json(ApiResponse::success(call))),
        None => Ok(Json(ApiResponse::error(format!(
            "Call {} not found",
            call_id
        )))),
    }
}

/// Minimize a call
pub async fn minimize_call(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> Result<Json<ApiResponse<OperationResponse>>, StatusCode> {
    let call_id = match CallId::parse(&call_id) {
        Ok(id) => id,
        Err(e) => return Ok(Json(ApiResponse::error(e.to_string()))),
    };

    let updated = state.registry.call(&call_id).is_some();
    state.registry.minimize_call(&call_id);

    Ok(Json(ApiResponse::success(OperationResponse {
        call_id,
        updated,
    })))
}

/// Restore a call to the foreground
pub async fn restore_call(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> Result<Json<ApiResponse<OperationResponse>>, StatusCode> {
    let call_id = match CallId::parse(&call_id) {
        Ok(id) => id,
        Err(e) => return Ok(Json(ApiResponse::error(e.to_string()))),
    };

    let updated = state.registry.call(&call_id).is_some();
    state.registry.restore_call(&call_id);

    Ok(Json(ApiResponse::success(OperationResponse {
        call_id,
        updated,
    })))
}

/// Overwrite a call's elapsed duration
pub async fn override_duration(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
    Json(request): Json<DurationOverrideRequest>,
) -> Result<Json<ApiResponse<OperationResponse>>, StatusCode> {
    let call_id = match CallId::parse(&call_id) {
        Ok(id) => id,
        Err(e) => return Ok(Json(ApiResponse::error(e.to_string()))),
    };

    let updated = state.registry.call(&call_id).is_some();
    state.registry.update_call_duration(&call_id, request.seconds);

    Ok(Json(ApiResponse::success(OperationResponse {
        call_id,
        updated,
    })))
}

/// End a call
pub async fn end_call(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> Result<Json<ApiResponse<OperationResponse>>, StatusCode> {
    let call_id = match CallId::parse(&call_id) {
        Ok(id) => id,
        Err(e) => return Ok(Json(ApiResponse::error(e.to_string()))),
    };

    info!("API: Ending call {}", call_id);
    let updated = state.registry.end_call(&call_id).is_some();

    Ok(Json(ApiResponse::success(OperationResponse {
        call_id,
        updated,
    })))
}

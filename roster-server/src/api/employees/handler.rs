//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::{Employee, EmployeeDraft, EmployeeUpdate};

use crate::core::ServerState;
use crate::store::StoreError;
use crate::utils::{AppError, AppResult};

/// List all employees in collection order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Employee>> {
    Json(state.store.list().await)
}

/// Create a new employee
///
/// 字段缺失时归一化为默认值，不拒绝请求
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<EmployeeDraft>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .store
        .create(draft)
        .await
        .map_err(|e| AppError::storage("Failed to create employee", e))?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (partial fields)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = state.store.update(&id, patch).await.map_err(|e| match e {
        StoreError::NotFound(msg) => AppError::not_found(msg),
        other => AppError::storage("Failed to update employee", other),
    })?;
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.store.delete(&id).await.map_err(|e| match e {
        StoreError::NotFound(msg) => AppError::not_found(msg),
        other => AppError::storage("Failed to delete employee", other),
    })?;
    Ok(StatusCode::NO_CONTENT)
}

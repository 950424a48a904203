//! Employee CRUD handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::database::{Employee, NewEmployee};
use crate::state::AppState;
use crate::utils::error::ApiError;

/// Create handler - POST /api/employees
///
/// Any body that decodes as JSON is accepted; there is no field-level
/// validation. The stored record comes back with id and timestamps
/// assigned by the database.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Json(new_employee) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let employee = state.store.insert(new_employee).await?;

    state.metrics.employees_created_total.inc();
    state.refresh_employee_gauge().await;

    info!("Employee created: {}", employee.id);
    Ok(Json(employee))
}

/// List handler - GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.store.list().await?;
    Ok(Json(employees))
}

/// Delete handler - DELETE /api/employees/{id}
///
/// The id is an opaque path segment; whether a row existed or not, a
/// successful statement yields 204.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    state.refresh_employee_gauge().await;

    Ok(StatusCode::NO_CONTENT)
}

//! Employee CRUD handlers.
//!
//! Each handler decodes its input first, then checks out one connection for
//! the single statement it runs. The connection guard lives in the handler's
//! scope and returns to the pool when the handler returns, whichever way it
//! returns. An id outside the key range is answered with 404 before any
//! connection is taken.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::EmployeeRepository;
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, EmployeeKey};
use crate::models::{Employee, EmployeeFields};
use crate::state::AppState;

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// Confirmation message for a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

/// `POST /employees`
///
/// # Errors
///
/// Returns 422 for an invalid body, 409 for a duplicate email, 500 if the
/// database fails.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<EmployeeFields>,
) -> Result<Json<Employee>> {
    let mut conn = state.connection().await?;
    let employee = EmployeeRepository::new(&mut conn).insert(&fields).await?;

    tracing::info!(employee_id = %employee.id, "Created employee");
    Ok(Json(employee))
}

/// `GET /employees`
///
/// # Errors
///
/// Returns 500 if the database fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let mut conn = state.connection().await?;
    let employees = EmployeeRepository::new(&mut conn).list_all().await?;

    Ok(Json(employees))
}

/// `GET /employees/{id}`
///
/// # Errors
///
/// Returns 404 if no employee has this id, 500 if the database fails.
pub async fn show(State(state): State<AppState>, key: EmployeeKey) -> Result<Json<Employee>> {
    let id = key.id()?;

    let mut conn = state.connection().await?;
    let employee = EmployeeRepository::new(&mut conn)
        .get_by_id(id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;

    Ok(Json(employee))
}

/// `PUT /employees/{id}`
///
/// Replaces every field; there is no partial update.
///
/// # Errors
///
/// Returns 422 for an invalid body, 404 if no employee has this id, 409 if the
/// email belongs to another employee, 500 if the database fails.
pub async fn update(
    State(state): State<AppState>,
    key: EmployeeKey,
    ApiJson(fields): ApiJson<EmployeeFields>,
) -> Result<Json<Employee>> {
    let id = key.id()?;

    let mut conn = state.connection().await?;
    let employee = EmployeeRepository::new(&mut conn)
        .replace_by_id(id, &fields)
        .await?
        .ok_or_else(AppError::employee_not_found)?;

    tracing::info!(employee_id = %id, "Updated employee");
    Ok(Json(employee))
}

/// `DELETE /employees/{id}`
///
/// # Errors
///
/// Returns 404 if no employee has this id, 500 if the database fails.
pub async fn destroy(
    State(state): State<AppState>,
    key: EmployeeKey,
) -> Result<Json<DeletedResponse>> {
    let id = key.id()?;

    let mut conn = state.connection().await?;
    let deleted = EmployeeRepository::new(&mut conn).delete_by_id(id).await?;

    if !deleted {
        return Err(AppError::employee_not_found());
    }

    tracing::info!(employee_id = %id, "Deleted employee");
    Ok(Json(DeletedResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}

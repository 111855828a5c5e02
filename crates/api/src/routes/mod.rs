//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness probe
//! GET    /health/ready          - Readiness probe (checks the database)
//!
//! # Employees
//! POST   /employees             - Create an employee
//! GET    /employees             - List all employees
//! GET    /employees/{id}        - Get one employee
//! PUT    /employees/{id}        - Replace an employee
//! DELETE /employees/{id}        - Delete an employee
//! ```

pub mod employees;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the employee routes router.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(employees::index).post(employees::create))
        .route(
            "/{id}",
            get(employees::show)
                .put(employees::update)
                .delete(employees::destroy),
        )
}

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/employees", employee_routes())
}

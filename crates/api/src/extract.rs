//! Request extractors whose rejections are [`AppError`]s.
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies. Wrapping them
//! keeps every client error in the same `{"detail": ...}` shape and makes body
//! decoding fail before a handler ever checks out a database connection.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

use employee_registry_core::EmployeeId;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// The `{id}` segment of an employee route.
///
/// Any integer is accepted. `None` means the integer is outside the key's
/// range, so no employee can have it.
#[derive(Debug)]
pub struct EmployeeKey(pub Option<EmployeeId>);

impl EmployeeKey {
    /// The id to look up, or the 404 for an id that cannot exist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the key is out of range.
    pub fn id(self) -> Result<EmployeeId, AppError> {
        self.0.ok_or_else(AppError::employee_not_found)
    }
}

impl<S> FromRequestParts<S> for EmployeeKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiPath(raw) = ApiPath::<String>::from_request_parts(parts, state).await?;
        Ok(Self(EmployeeId::parse_key(&raw)?))
    }
}

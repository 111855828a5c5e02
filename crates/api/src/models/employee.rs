//! Employee transfer model.
//!
//! Request bodies decode into [`EmployeeFields`]: all five mutable columns,
//! present and of the right JSON type. Nothing else is checked here; the one
//! rule on the data, email uniqueness, belongs to the table. Responses are
//! [`Employee`], the same fields plus the database-assigned `id`.

use serde::{Deserialize, Serialize};

use employee_registry_core::EmployeeId;

/// The mutable columns of an employee, as sent by clients.
///
/// An `id` member in the body, if present, is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub department: String,
    pub age: i32,
    pub salary: f64,
}

/// An employee as stored and as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

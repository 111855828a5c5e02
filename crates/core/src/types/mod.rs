//! Core types for the employee registry.

pub mod id;

pub use id::{EmployeeId, InvalidKey};

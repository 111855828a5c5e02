//! Domain models for the employee registry.

pub mod employee;

pub use employee::{Employee, EmployeeFields};

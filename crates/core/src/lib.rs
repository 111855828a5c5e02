//! Employee Registry Core - Shared types library.
//!
//! This crate provides the types shared by every employee registry component:
//! - `api` - HTTP service exposing the `/employees` resource
//! - `cli` - Command-line tools for schema setup and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. Database encoding is available behind the `postgres`
//! feature so the types can be bound directly in `sqlx` queries.
//!
//! # Modules
//!
//! - [`types`] - The employee id newtype and its key parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

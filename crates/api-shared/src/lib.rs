//! # API Shared
//!
//! Shared request/response definitions for the clinic administration APIs.
//!
//! Contains:
//! - DTOs for registration, scheduling, and listing (`dto` module)
//! - Dashboard output structures consumed by chart widgets
//! - Shared services like `HealthService`
//!
//! Used by `clinic-core` (services build stored documents from the request
//! types and return the dashboard types) and by the REST binary and CLI.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::{HealthRes, HealthService};

//! # Clinic Core
//!
//! Core business logic for the clinic administration backend.
//!
//! This crate contains pure data operations and document storage:
//! - A filesystem-backed JSON document store with sharded record
//!   directories ([`store`])
//! - Per-collection services for registration, scheduling, and
//!   prescriptions ([`services`])
//! - The dashboard aggregation engine ([`dashboard`])
//! - Static suggestion catalogs for the forms ([`catalog`])
//!
//! **No API concerns**: HTTP servers, OpenAPI docs, and CLI parsing belong
//! in the `clinic-run` binary and the `cli` crate.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod record_id;
pub mod services;
pub mod store;

pub use clinic_types::{Document, NonEmptyText};
pub use config::CoreConfig;
pub use dashboard::DashboardService;
pub use error::{ClinicError, ClinicResult};
pub use record_id::RecordId;
pub use services::{AppointmentService, DoctorService, PatientService, PrescriptionService};
pub use store::{Collection, DocumentStore};

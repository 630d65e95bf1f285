//! Domain services over the document store.
//!
//! One service per collection, each validating what the corresponding form
//! marks as required and writing the request body through to the store
//! unchanged otherwise. Field names on the wire and in storage are
//! identical, so a stored document can be listed straight back out.

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod prescriptions;

pub use appointments::AppointmentService;
pub use doctors::DoctorService;
pub use patients::PatientService;
pub use prescriptions::PrescriptionService;

use crate::error::{ClinicError, ClinicResult};
use clinic_types::{Document, NonEmptyText};
use serde::Serialize;
use serde_json::Value;

/// Serialises a request body into a storable document.
pub(crate) fn to_document<T: Serialize>(value: &T) -> ClinicResult<Document> {
    match serde_json::to_value(value).map_err(ClinicError::Serialization)? {
        Value::Object(map) => Ok(map),
        _ => Err(ClinicError::InvalidInput(
            "request must serialise to a JSON object".into(),
        )),
    }
}

/// Validates a required form field, naming the field in the error.
pub(crate) fn required_field(field: &str, value: &str) -> ClinicResult<()> {
    NonEmptyText::new(value)
        .map(|_| ())
        .map_err(|_| ClinicError::InvalidInput(format!("{field} is required")))
}

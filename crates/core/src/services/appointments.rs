//! Appointment scheduling and listing.

use super::{required_field, to_document};
use crate::error::ClinicResult;
use crate::record_id::RecordId;
use crate::store::{Collection, DocumentStore};
use api_shared::ScheduleAppointmentReq;
use clinic_types::Document;

/// Service for appointment record operations.
#[derive(Clone, Debug)]
pub struct AppointmentService {
    store: DocumentStore,
}

impl AppointmentService {
    /// Creates an appointment service over the given store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Schedules a new appointment and returns the record id.
    ///
    /// `patientId` and `doctorId` must be canonical record ids; whether
    /// they resolve to existing records is not checked. `appointmentDate`
    /// is required but not parsed here; downstream aggregation defines
    /// how unparsable dates behave. When `status` is `None` the stored
    /// document has no `status` field at all.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClinicError::InvalidInput`] if an id is not
    /// canonical or the date is empty, or a storage error if the write
    /// fails.
    pub fn schedule(&self, req: ScheduleAppointmentReq) -> ClinicResult<RecordId> {
        RecordId::parse(&req.patient_id)?;
        RecordId::parse(&req.doctor_id)?;
        required_field("appointmentDate", &req.appointment_date)?;

        let document = to_document(&req)?;
        self.store.create(Collection::Appointments, document)
    }

    /// Lists all appointment records.
    pub fn list(&self) -> ClinicResult<Vec<Document>> {
        self.store.list_all(Collection::Appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use crate::error::ClinicError;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_service(tmp: &TempDir) -> AppointmentService {
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).unwrap());
        AppointmentService::new(DocumentStore::new(cfg))
    }

    fn req() -> ScheduleAppointmentReq {
        ScheduleAppointmentReq {
            patient_id: "550e8400e29b41d4a716446655440000".into(),
            doctor_id: "aabbccddeeff00112233445566778899".into(),
            appointment_date: "2024-05-02".into(),
            appointment_time: "10:30".into(),
            reason: "Annual Check-up".into(),
            notes: String::new(),
            status: None,
        }
    }

    #[test]
    fn test_schedule_without_status_stores_no_status_field() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        service.schedule(req()).unwrap();

        let appointments = service.list().unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(
            appointments[0].get("appointmentDate").unwrap(),
            &json!("2024-05-02")
        );
        assert!(appointments[0].get("status").is_none());
    }

    #[test]
    fn test_schedule_with_status_stores_it_verbatim() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let mut request = req();
        request.status = Some("Completed".into());
        service.schedule(request).unwrap();

        let appointments = service.list().unwrap();
        assert_eq!(appointments[0].get("status").unwrap(), &json!("Completed"));
    }

    #[test]
    fn test_schedule_rejects_non_canonical_patient_id() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let mut request = req();
        request.patient_id = "550e8400-e29b-41d4-a716-446655440000".into();
        let result = service.schedule(request);
        assert!(matches!(result, Err(ClinicError::InvalidInput(_))));
    }

    #[test]
    fn test_schedule_rejects_empty_date() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let mut request = req();
        request.appointment_date = String::new();
        let result = service.schedule(request);
        assert!(matches!(result, Err(ClinicError::InvalidInput(_))));
    }
}

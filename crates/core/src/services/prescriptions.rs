//! Prescription creation and listing.

use super::{required_field, to_document};
use crate::error::{ClinicError, ClinicResult};
use crate::record_id::RecordId;
use crate::store::{Collection, DocumentStore};
use api_shared::CreatePrescriptionReq;
use clinic_types::Document;

/// Service for prescription record operations.
#[derive(Clone, Debug)]
pub struct PrescriptionService {
    store: DocumentStore,
}

impl PrescriptionService {
    /// Creates a prescription service over the given store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Creates a new prescription and returns the record id.
    ///
    /// `patientId` and `doctorId` must be canonical record ids, and at
    /// least one medication entry with a non-empty name is required.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if an id is not canonical or
    /// the medication list is empty, or a storage error if the write
    /// fails.
    pub fn create(&self, req: CreatePrescriptionReq) -> ClinicResult<RecordId> {
        RecordId::parse(&req.patient_id)?;
        RecordId::parse(&req.doctor_id)?;

        if req.medications.is_empty() {
            return Err(ClinicError::InvalidInput(
                "at least one medication is required".into(),
            ));
        }
        for medication in &req.medications {
            required_field("medication name", &medication.name)?;
        }

        let document = to_document(&req)?;
        self.store.create(Collection::Prescriptions, document)
    }

    /// Lists all prescription records.
    pub fn list(&self) -> ClinicResult<Vec<Document>> {
        self.store.list_all(Collection::Prescriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use api_shared::MedicationEntry;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_service(tmp: &TempDir) -> PrescriptionService {
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).unwrap());
        PrescriptionService::new(DocumentStore::new(cfg))
    }

    fn req() -> CreatePrescriptionReq {
        CreatePrescriptionReq {
            patient_name: "Amira Haddad".into(),
            patient_id: "550e8400e29b41d4a716446655440000".into(),
            doctor_name: "Dr. Okafor".into(),
            doctor_id: "aabbccddeeff00112233445566778899".into(),
            medications: vec![MedicationEntry {
                name: "Amoxicillin".into(),
                dosage: "500".into(),
                unit: "mg".into(),
                frequency: "Three times daily".into(),
                duration: "7 days".into(),
                instructions: "Take with food".into(),
            }],
            general_instructions: String::new(),
        }
    }

    #[test]
    fn test_create_and_list() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        service.create(req()).unwrap();

        let prescriptions = service.list().unwrap();
        assert_eq!(prescriptions.len(), 1);
        let medications = prescriptions[0].get("medications").unwrap();
        assert_eq!(medications[0].get("name").unwrap(), &json!("Amoxicillin"));
    }

    #[test]
    fn test_create_rejects_empty_medication_list() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let mut request = req();
        request.medications.clear();
        assert!(matches!(
            service.create(request),
            Err(ClinicError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_create_rejects_unnamed_medication() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let mut request = req();
        request.medications[0].name = String::new();
        assert!(matches!(
            service.create(request),
            Err(ClinicError::InvalidInput(_))
        ));
    }
}

//! Patient registration and listing.

use super::{required_field, to_document};
use crate::error::ClinicResult;
use crate::record_id::RecordId;
use crate::store::{Collection, DocumentStore};
use api_shared::RegisterPatientReq;
use clinic_types::Document;

/// Service for patient record operations.
#[derive(Clone, Debug)]
pub struct PatientService {
    store: DocumentStore,
}

impl PatientService {
    /// Creates a patient service over the given store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Registers a new patient and returns the record id.
    ///
    /// Only `name` is required; demographics, emergency contact, and the
    /// medical history block are stored as provided. No data-quality
    /// checks are applied beyond the required field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClinicError::InvalidInput`] if `name` is empty, or
    /// a storage error if the write fails.
    pub fn register(&self, req: RegisterPatientReq) -> ClinicResult<RecordId> {
        required_field("name", &req.name)?;

        let document = to_document(&req)?;
        self.store.create(Collection::Patients, document)
    }

    /// Lists all patient records.
    pub fn list(&self) -> ClinicResult<Vec<Document>> {
        self.store.list_all(Collection::Patients)
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

    fn test_service(tmp: &TempDir) -> PatientService {
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).unwrap());
        PatientService::new(DocumentStore::new(cfg))
    }

    fn req(name: &str) -> RegisterPatientReq {
        RegisterPatientReq {
            name: name.into(),
            email: "amira@example.com".into(),
            date_of_birth: "1987-03-12".into(),
            gender: "female".into(),
            phone: String::new(),
            address: String::new(),
            emergency_contact: Default::default(),
            medical_history: Default::default(),
        }
    }

    #[test]
    fn test_register_and_list() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let id = service.register(req("Amira Haddad")).unwrap();

        let patients = service.list().unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].get("name").unwrap(), &json!("Amira Haddad"));
        assert_eq!(patients[0].get("id").unwrap(), &json!(id.to_string()));
        // The history block defaults survive serialisation.
        assert_eq!(
            patients[0]
                .get("medicalHistory")
                .unwrap()
                .get("smokingStatus")
                .unwrap(),
            &json!("never")
        );
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let result = service.register(req("   "));
        assert!(matches!(result, Err(ClinicError::InvalidInput(_))));
        assert!(service.list().unwrap().is_empty());
    }
}

//! Doctor registration and listing.

use super::{required_field, to_document};
use crate::error::ClinicResult;
use crate::record_id::RecordId;
use crate::store::{Collection, DocumentStore};
use api_shared::RegisterDoctorReq;
use clinic_types::Document;

/// Service for doctor record operations.
#[derive(Clone, Debug)]
pub struct DoctorService {
    store: DocumentStore,
}

impl DoctorService {
    /// Creates a doctor service over the given store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Registers a new doctor and returns the record id.
    ///
    /// `name` and `specialization` are required; contact details are
    /// stored as provided.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClinicError::InvalidInput`] if a required field is
    /// empty, or a storage error if the write fails.
    pub fn register(&self, req: RegisterDoctorReq) -> ClinicResult<RecordId> {
        required_field("name", &req.name)?;
        required_field("specialization", &req.specialization)?;

        let document = to_document(&req)?;
        self.store.create(Collection::Doctors, document)
    }

    /// Lists all doctor records.
    pub fn list(&self) -> ClinicResult<Vec<Document>> {
        self.store.list_all(Collection::Doctors)
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

    fn test_service(tmp: &TempDir) -> DoctorService {
        let cfg = Arc::new(CoreConfig::new(tmp.path().to_path_buf()).unwrap());
        DoctorService::new(DocumentStore::new(cfg))
    }

    #[test]
    fn test_register_and_list() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        service
            .register(RegisterDoctorReq {
                name: "Dr. Okafor".into(),
                specialization: "Cardiology".into(),
                email: "okafor@example.com".into(),
                phone: String::new(),
            })
            .unwrap();

        let doctors = service.list().unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(
            doctors[0].get("specialization").unwrap(),
            &json!("Cardiology")
        );
    }

    #[test]
    fn test_register_requires_specialization() {
        let tmp = TempDir::new().unwrap();
        let service = test_service(&tmp);

        let result = service.register(RegisterDoctorReq {
            name: "Dr. Okafor".into(),
            specialization: "  ".into(),
            email: String::new(),
            phone: String::new(),
        });
        assert!(matches!(result, Err(ClinicError::InvalidInput(_))));
    }
}

//! Filesystem-backed JSON document store.
//!
//! Records live in a sharded directory structure, one collection per
//! top-level directory:
//!
//! ```text
//! <clinic_data_dir>/
//!   patients/
//!     <s1>/
//!       <s2>/
//!         <id>/
//!           document.json
//!   doctors/ ...
//!   appointments/ ...
//!   prescriptions/ ...
//! ```
//!
//! where `s1`/`s2` are the first four hex characters of the record id.
//!
//! The store enforces no schema. `create` stamps the stored document with
//! its `id` and a `createdAt` timestamp; `list_all` returns documents
//! ordered by (`createdAt`, `id`) so that consumers relying on stable input
//! order (the dashboard's first-occurrence bucketing) are deterministic
//! across runs and filesystems.

use crate::config::CoreConfig;
use crate::constants::{
    APPOINTMENTS_DIR_NAME, CREATED_AT_FIELD, DOCTORS_DIR_NAME, DOCUMENT_FILE_NAME, ID_FIELD,
    PATIENTS_DIR_NAME, PRESCRIPTIONS_DIR_NAME,
};
use crate::error::{ClinicError, ClinicResult};
use crate::record_id::RecordId;
use chrono::Utc;
use clinic_types::Document;
use serde_json::Value;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fmt, fs};

/// The four record collections the clinic backend persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Patients,
    Doctors,
    Appointments,
    Prescriptions,
}

impl Collection {
    /// Directory name of this collection under the clinic data dir.
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Patients => PATIENTS_DIR_NAME,
            Collection::Doctors => DOCTORS_DIR_NAME,
            Collection::Appointments => APPOINTMENTS_DIR_NAME,
            Collection::Prescriptions => PRESCRIPTIONS_DIR_NAME,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Handle to the document store. Cheap to clone; all clones share the same
/// startup configuration.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    cfg: Arc<CoreConfig>,
}

impl DocumentStore {
    /// Creates a store handle over the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.cfg.clinic_data_dir().join(collection.dir_name())
    }

    /// Writes a new document into `collection` and returns its id.
    ///
    /// The document is stamped with `id` (canonical form) and `createdAt`
    /// (RFC 3339, UTC) before being written. Any `id`/`createdAt` fields
    /// already present in the input are overwritten.
    ///
    /// # Errors
    ///
    /// Returns a [`ClinicError`] if the record directory cannot be
    /// allocated, the document cannot be serialised, or the file write
    /// fails.
    pub fn create(&self, collection: Collection, mut document: Document) -> ClinicResult<RecordId> {
        let collection_dir = self.collection_dir(collection);
        let (id, record_dir) = create_unique_record_dir(&collection_dir, RecordId::new)?;

        document.insert(ID_FIELD.into(), Value::String(id.to_string()));
        document.insert(
            CREATED_AT_FIELD.into(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let raw = serde_json::to_string_pretty(&document).map_err(ClinicError::Serialization)?;
        fs::write(record_dir.join(DOCUMENT_FILE_NAME), raw).map_err(ClinicError::FileWrite)?;

        tracing::info!(collection = %collection, id = %id, "document created");
        Ok(id)
    }

    /// Lists every document in `collection`, ordered by (`createdAt`, `id`).
    ///
    /// A collection that has never been written to lists as empty. A
    /// document that fails to parse is logged as a warning and skipped;
    /// stray entries at shard levels are ignored.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice (unreadable directories are treated
    /// as empty); the `ClinicResult` return keeps the signature stable if
    /// stricter behaviour is ever needed.
    pub fn list_all(&self, collection: Collection) -> ClinicResult<Vec<Document>> {
        let collection_dir = self.collection_dir(collection);

        let mut documents = Vec::new();

        let s1_iter = match fs::read_dir(&collection_dir) {
            Ok(it) => it,
            Err(_) => return Ok(documents),
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };
            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };
                for id_ent in id_iter.flatten() {
                    let id_path = id_ent.path();
                    if !id_path.is_dir() {
                        continue;
                    }

                    let doc_path = id_path.join(DOCUMENT_FILE_NAME);
                    if !doc_path.is_file() {
                        continue;
                    }

                    match fs::read_to_string(&doc_path) {
                        Ok(contents) => match serde_json::from_str::<Document>(&contents) {
                            Ok(document) => documents.push(document),
                            Err(err) => {
                                tracing::warn!(
                                    path = %doc_path.display(),
                                    error = %err,
                                    "skipping unparsable document"
                                );
                            }
                        },
                        Err(err) => {
                            tracing::warn!(
                                path = %doc_path.display(),
                                error = %err,
                                "skipping unreadable document"
                            );
                        }
                    }
                }
            }
        }

        documents.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        Ok(documents)
    }
}

/// Stable ordering key for listed documents.
fn sort_key(document: &Document) -> (&str, &str) {
    let field = |name: &str| match document.get(name) {
        Some(Value::String(s)) => s.as_str(),
        _ => "",
    };
    (field(CREATED_AT_FIELD), field(ID_FIELD))
}

/// Allocates a fresh record id and creates its sharded directory.
///
/// Guards against pathological id collisions (or pre-existing directories
/// from external interference) by retrying with a new id, up to 5 times.
///
/// # Errors
///
/// Returns [`ClinicError::RecordDirCreation`] if directory creation fails
/// after 5 attempts, or [`ClinicError::CollectionDirCreation`] if the shard
/// parents cannot be created.
fn create_unique_record_dir(
    collection_dir: &Path,
    mut id_source: impl FnMut() -> RecordId,
) -> ClinicResult<(RecordId, PathBuf)> {
    for _attempt in 0..5 {
        let id = id_source();
        let candidate = id.sharded_dir(collection_dir);

        if candidate.exists() {
            continue;
        }

        if let Some(parent) = candidate.parent() {
            fs::create_dir_all(parent).map_err(ClinicError::CollectionDirCreation)?;
        }

        match fs::create_dir(&candidate) {
            Ok(()) => return Ok((id, candidate)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(ClinicError::RecordDirCreation(e)),
        }
    }

    Err(ClinicError::RecordDirCreation(io::Error::new(
        ErrorKind::AlreadyExists,
        "failed to allocate a unique record directory after 5 attempts",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_store(dir: &Path) -> DocumentStore {
        let cfg = Arc::new(CoreConfig::new(dir.to_path_buf()).unwrap());
        DocumentStore::new(cfg)
    }

    fn doc(value: serde_json::Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other:?}"),
        }
    }

    #[test]
    fn test_create_stamps_id_and_created_at() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        let id = store
            .create(Collection::Doctors, doc(json!({"name": "Dr. Okafor"})))
            .unwrap();

        let listed = store.list_all(Collection::Doctors).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].get("id").unwrap(), &json!(id.to_string()));
        assert_eq!(listed[0].get("name").unwrap(), &json!("Dr. Okafor"));
        assert!(matches!(
            listed[0].get("createdAt"),
            Some(Value::String(_))
        ));
    }

    #[test]
    fn test_create_uses_sharded_layout() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        let id = store
            .create(Collection::Patients, doc(json!({"name": "Amira"})))
            .unwrap();

        let canonical = id.to_string();
        let expected = tmp
            .path()
            .join("patients")
            .join(&canonical[0..2])
            .join(&canonical[2..4])
            .join(&canonical)
            .join(DOCUMENT_FILE_NAME);
        assert!(expected.is_file());
    }

    #[test]
    fn test_list_all_missing_collection_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        let listed = store.list_all(Collection::Prescriptions).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_list_all_orders_by_created_at_then_id() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        for n in 0..5 {
            store
                .create(Collection::Appointments, doc(json!({"seq": n})))
                .unwrap();
        }

        let listed = store.list_all(Collection::Appointments).unwrap();
        assert_eq!(listed.len(), 5);

        let keys: Vec<(String, String)> = listed
            .iter()
            .map(|d| {
                (
                    d.get("createdAt").unwrap().as_str().unwrap().to_owned(),
                    d.get("id").unwrap().as_str().unwrap().to_owned(),
                )
            })
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_list_all_skips_unparsable_document() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        store
            .create(Collection::Doctors, doc(json!({"name": "Dr. Varga"})))
            .unwrap();

        // Hand-plant a record directory containing junk.
        let bad_dir = tmp.path().join("doctors/aa/bb/aabbccddeeff00112233445566778899");
        fs::create_dir_all(&bad_dir).unwrap();
        fs::write(bad_dir.join(DOCUMENT_FILE_NAME), "not json").unwrap();

        let listed = store.list_all(Collection::Doctors).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].get("name").unwrap(), &json!("Dr. Varga"));
    }

    #[test]
    fn test_create_overwrites_caller_supplied_id() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        let id = store
            .create(Collection::Patients, doc(json!({"id": "spoofed"})))
            .unwrap();

        let listed = store.list_all(Collection::Patients).unwrap();
        assert_eq!(listed[0].get("id").unwrap(), &json!(id.to_string()));
    }

    #[test]
    fn test_collections_are_isolated() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(tmp.path());

        store
            .create(Collection::Doctors, doc(json!({"name": "Dr. Lindqvist"})))
            .unwrap();

        assert!(store.list_all(Collection::Patients).unwrap().is_empty());
        assert_eq!(store.list_all(Collection::Doctors).unwrap().len(), 1);
    }
}

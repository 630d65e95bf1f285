//! Constants used throughout the clinic core crate.
//!
//! This module contains all path and filename constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Default directory for clinic data storage when no explicit directory is configured.
pub const DEFAULT_CLINIC_DATA_DIR: &str = "/clinic_data";

/// Directory name for the patients collection.
pub const PATIENTS_DIR_NAME: &str = "patients";

/// Directory name for the doctors collection.
pub const DOCTORS_DIR_NAME: &str = "doctors";

/// Directory name for the appointments collection.
pub const APPOINTMENTS_DIR_NAME: &str = "appointments";

/// Directory name for the prescriptions collection.
pub const PRESCRIPTIONS_DIR_NAME: &str = "prescriptions";

/// Filename for the document stored inside each record directory.
pub const DOCUMENT_FILE_NAME: &str = "document.json";

/// Month label used for appointment dates that cannot be parsed.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Document field stamped with the record id at creation time.
pub const ID_FIELD: &str = "id";

/// Document field stamped with the creation timestamp (RFC 3339, UTC).
pub const CREATED_AT_FIELD: &str = "createdAt";

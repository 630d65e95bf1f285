//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core services as `Arc<CoreConfig>`. Core code never reads process-wide
//! environment variables during request handling; that keeps behaviour
//! consistent across multi-threaded runtimes and test harnesses.

use crate::{ClinicError, ClinicResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    clinic_data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if `clinic_data_dir` is empty.
    pub fn new(clinic_data_dir: PathBuf) -> ClinicResult<Self> {
        if clinic_data_dir.as_os_str().is_empty() {
            return Err(ClinicError::InvalidInput(
                "clinic_data_dir cannot be empty".into(),
            ));
        }

        Ok(Self { clinic_data_dir })
    }

    /// Base directory under which the four collections are stored.
    pub fn clinic_data_dir(&self) -> &Path {
        &self.clinic_data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_dir() {
        let result = CoreConfig::new(PathBuf::new());
        assert!(matches!(result, Err(ClinicError::InvalidInput(_))));
    }

    #[test]
    fn test_new_keeps_dir() {
        let cfg = CoreConfig::new(PathBuf::from("/clinic_data")).unwrap();
        assert_eq!(cfg.clinic_data_dir(), Path::new("/clinic_data"));
    }
}

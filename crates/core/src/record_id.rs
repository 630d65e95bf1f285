//! Record identifiers and sharded-path derivation.
//!
//! The store keys every record by a *canonical* UUID: **32 lowercase
//! hexadecimal characters, no hyphens** (the value of
//! `Uuid::new_v4().simple().to_string()`). Canonical form is required for
//! externally supplied identifiers: a `patientId` arriving through the API
//! must already be canonical; other common UUID forms (uppercase,
//! hyphenated) are rejected rather than normalised.
//!
//! For a canonical id `u`, the record directory is
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`, which bounds per-directory fan-out
//! as collections grow.

use crate::error::{ClinicError, ClinicResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A canonical record identifier (32 lowercase hex characters, no hyphens).
///
/// Once constructed, the wrapped UUID is guaranteed to be in canonical form,
/// so path derivation and string output are consistent everywhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a fresh identifier for a new record.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates an externally supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if `input` is not already in
    /// canonical form.
    pub fn parse(input: &str) -> ClinicResult<Self> {
        if Self::is_canonical(input) {
            // is_canonical guarantees valid lowercase hex, so this cannot fail
            let uuid = Uuid::parse_str(input).map_err(|e| {
                ClinicError::InvalidInput(format!("unparsable record id: {e}"))
            })?;
            return Ok(Self(uuid));
        }
        Err(ClinicError::InvalidInput(format!(
            "record id must be 32 lowercase hex characters without hyphens, got: '{}'",
            input
        )))
    }

    /// Returns true if `input` is in canonical form (purely syntactic).
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/` where `s1`/`s2` are the first
    /// four hex characters of this id.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.0.simple().to_string();
        let s1 = &canonical[0..2];
        let s2 = &canonical[2..4];
        parent_dir.join(s1).join(s2).join(&canonical)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_canonical_id() {
        let id = RecordId::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 32);
        assert!(RecordId::is_canonical(&canonical));
    }

    #[test]
    fn test_parse_valid_canonical_id() {
        let canonical = "550e8400e29b41d4a716446655440000";
        let parsed = RecordId::parse(canonical).unwrap();
        assert_eq!(parsed.to_string(), canonical);
    }

    #[test]
    fn test_parse_rejects_non_canonical_forms() {
        // Hyphenated
        assert!(RecordId::parse("550e8400-e29b-41d4-a716-446655440000").is_err());
        // Uppercase
        assert!(RecordId::parse("550E8400E29B41D4A716446655440000").is_err());
        // Wrong length
        assert!(RecordId::parse("550e8400e29b41d4a71644665544000").is_err());
        assert!(RecordId::parse("550e8400e29b41d4a7164466554400000").is_err());
        // Non-hex
        assert!(RecordId::parse("550e8400e29b41d4a716446655440zzz").is_err());
        // Empty
        assert!(RecordId::parse("").is_err());
    }

    #[test]
    fn test_parse_error_mentions_expected_form() {
        match RecordId::parse("not-an-id") {
            Err(ClinicError::InvalidInput(msg)) => {
                assert!(msg.contains("32 lowercase hex characters"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_sharded_dir_structure() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let sharded = id.sharded_dir(Path::new("/clinic_data/doctors"));

        assert_eq!(
            sharded,
            PathBuf::from("/clinic_data/doctors/55/0e/550e8400e29b41d4a716446655440000")
        );
    }

    #[test]
    fn test_round_trip_new_to_string_to_parse() {
        let original = RecordId::new();
        let parsed: RecordId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}

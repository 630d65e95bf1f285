//! Shared primitive types for the clinic administration system.
//!
//! This crate holds the small, dependency-light types that every other crate
//! in the workspace builds on:
//!
//! - [`Document`]: the open-ended field/value mapping a stored record is
//!   made of. The document store enforces no schema, so anything that reads
//!   records must cope with absent or oddly-typed fields.
//! - [`NonEmptyText`]: a string that is guaranteed to contain at least one
//!   non-whitespace character, used wherever a form field is required.

/// An open-ended record as held in the document store.
///
/// Field presence is never guaranteed; consumers read fields defensively and
/// decide per-field what an absent value means.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Errors from constructing validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input was empty or contained only whitespace.
    #[error("Text cannot be empty")]
    Empty,
}

/// A string with at least one non-whitespace character.
///
/// Input is trimmed on construction; a trimmed-empty input is rejected.
/// Required form fields are passed through this type before a record is
/// written, so the stored value is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Validates and wraps `input`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the validated `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let text = NonEmptyText::new("  Cardiology  ").unwrap();
        assert_eq!(text.as_str(), "Cardiology");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(NonEmptyText::new("").is_err());
        assert!(NonEmptyText::new("   ").is_err());
        assert!(NonEmptyText::new("\t\n").is_err());
    }

    #[test]
    fn test_into_string() {
        let text = NonEmptyText::new("Dr. Okafor").unwrap();
        assert_eq!(text.into_string(), "Dr. Okafor");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let result: Result<NonEmptyText, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let text = NonEmptyText::new("Neurology").unwrap();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"Neurology\"");
        let back: NonEmptyText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }
}

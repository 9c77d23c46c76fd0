//! Filer identifier validation.

use crate::error::{EdgarError, Result};
use std::fmt;

/// A validated filer identifier (numeric CIK).
///
/// Holds the trimmed input; construction fails before any network call when
/// anything but ASCII digits remains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate a raw, user-supplied identifier.
    ///
    /// # Errors
    /// Returns `EdgarError::InvalidIdentifier` if the trimmed input is empty or
    /// contains a non-digit character.
    ///
    /// # Example
    /// ```
    /// # use thirteenf_edgar::Identifier;
    /// let id = Identifier::parse("  0001166559\n").unwrap();
    /// assert_eq!(id.as_str(), "0001166559");
    /// assert!(Identifier::parse("AAPL").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EdgarError::InvalidIdentifier(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as sent to the search endpoint.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

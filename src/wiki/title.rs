//! # Page Titles
//!
//! A [`Title`] can only be obtained through [`Title::parse`], so every value
//! of this type satisfies `^[A-Za-z0-9]+$`. Storage backends take `&Title`
//! and never see raw request text.

use std::fmt;
use std::str::FromStr;

use super::errors::{WikiError, WikiResult};

/// Validated page title
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    /// Validate `raw` and wrap it as a title.
    ///
    /// Rejects the empty string and anything outside ASCII letters and
    /// digits, which rules out `/`, `\`, `.` and every other separator.
    pub fn parse(raw: &str) -> WikiResult<Self> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(WikiError::InvalidTitle(raw.to_string()))
        }
    }

    /// Check whether `raw` would be accepted by [`Title::parse`]
    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Title {
    type Err = WikiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

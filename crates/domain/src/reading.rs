//! Reading — a value exactly as the host device returned it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque display text.
///
/// No parsing, trimming, or range checking is ever applied: a reading is
/// shown exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reading(String);

impl Reading {
    /// Wrap raw response text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Reading {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Reading {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for Reading {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

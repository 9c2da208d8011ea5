//! Free-form classification tags shared by products and distributors.

use core::fmt;

use serde::{Deserialize, Serialize};
use shopstock_core::{DomainError, DomainResult};

/// A single alphanumeric tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::validation(format!(
                "tag must be non-empty and alphanumeric, got {raw:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric() {
        assert!(Tag::new("perishable").is_ok());
        assert!(Tag::new("q4").is_ok());
    }

    #[test]
    fn rejects_empty_and_punctuated() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("semi;colon").is_err());
    }
}

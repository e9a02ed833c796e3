//! Content Hash Value Object
//!
//! SHA-256 digest used for the optional content-derived archive suffix.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a lowercase hex SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of the suffix appended to archive names
    pub const SUFFIX_LEN: usize = 12;

    /// Hash a sequence of byte chunks as one stream
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_parts([content])
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Leading hex characters used in file names
    pub fn short(&self) -> &str {
        &self.0[..Self::SUFFIX_LEN]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.0)
    }
}

// crates/profile/src/domain/value_objects/handle.rs

use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// Compilée une seule fois, motif constant
static HANDLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._]*[a-z0-9]$").expect("handle pattern is a valid regex")
});

/// Identifiant public unique du profil (`@handle`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 30;

    /// Constructeur sécurisé (API / Domaine)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // NFC + Lowercase + Trim
        let normalized: String = raw.trim()
            .nfc()
            .collect::<String>()
            .to_lowercase();

        let handle = Self(normalized);
        handle.validate()?;
        Ok(handle)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Handle {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();

        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "handle",
                reason: format!("Handle must be between {} and {} characters", Self::MIN_LEN, Self::MAX_LEN),
            });
        }

        if !HANDLE_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "handle",
                reason: "Invalid format: only lowercase, numbers, dots or underscores allowed. Cannot start/end with special chars.".into(),
            });
        }

        // Anti-obfuscation
        if self.0.contains("..") || self.0.contains("__") || self.0.contains("._") || self.0.contains("_.") {
            return Err(DomainError::Validation {
                field: "handle",
                reason: "Handle cannot contain consecutive special characters".into(),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for Handle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

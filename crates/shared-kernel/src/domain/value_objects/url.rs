// crates/shared-kernel/src/domain/value_objects/url.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use url::Url as LibUrl;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    /// Constructeur sécurisé (Domaine / API)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw_string = value.into();

        // 1. Parsing via la crate 'url' pour normalisation syntaxique
        let parsed = LibUrl::parse(raw_string.trim()).map_err(|_| DomainError::Validation {
            field: "url",
            reason: format!("Invalid URL format: {}", raw_string),
        })?;

        let url = Self(parsed.to_string());

        // 2. Validation métier stricte
        url.validate()?;

        Ok(url)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Url {
    fn validate(&self) -> Result<()> {
        let parsed = LibUrl::parse(&self.0).map_err(|_| DomainError::Validation {
            field: "url",
            reason: "Invalid URL state".into(),
        })?;

        // On restreint les protocoles (avatars servis par l'hébergeur média)
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(DomainError::Validation {
                field: "url",
                reason: "Only http and https protocols are allowed".into(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Url {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

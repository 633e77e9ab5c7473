// crates/shared-kernel/src/domain/value_objects/counter.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Compteur dénormalisé, jamais négatif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counter(u64);

impl Counter {
    pub fn try_new(val: u64) -> Result<Self> {
        let counter = Self(val);
        counter.validate()?;
        Ok(counter)
    }

    /// Pour la reconstruction depuis la DB
    pub fn from_raw(val: u64) -> Self {
        Self(val)
    }

    /// Reconstruction depuis une colonne signée (BIGINT)
    pub fn try_from_signed(val: i64) -> Result<Self> {
        u64::try_from(val)
            .map(Self)
            .map_err(|_| DomainError::Internal(format!("Negative counter value in storage: {}", val)))
    }

    /// Incrément saturant : on préfère saturer au Max plutôt que de paniquer
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Décrément saturant (ne descendra jamais sous 0)
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Counter {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl TryFrom<u64> for Counter {
    type Error = DomainError;

    fn try_from(val: u64) -> Result<Self> {
        Self::try_new(val)
    }
}

impl From<Counter> for u64 {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}

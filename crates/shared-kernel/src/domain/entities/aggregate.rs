// crates/shared-kernel/src/domain/entities/aggregate.rs

use serde::{Deserialize, Serialize};

/// Données techniques partagées par tous les agrégats.
/// La version sert au verrouillage optimiste côté persistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMetadata {
    version: i64,
}

impl AggregateMetadata {
    /// Crée une nouvelle instance (version 1 pour une création)
    pub fn new(version: i64) -> Self {
        Self { version }
    }

    /// RESTAURATION : version exacte lue en base
    pub fn restore(version: i64) -> Self {
        Self { version }
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for AggregateMetadata {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Trait maître pour tous les agrégats du système.
/// L'entité n'a qu'à exposer son id et ses métadonnées.
pub trait AggregateRoot: Send + Sync {
    fn id(&self) -> String;

    fn metadata(&self) -> &AggregateMetadata;

    fn metadata_mut(&mut self) -> &mut AggregateMetadata;

    /// Version actuelle de l'agrégat (Optimistic Concurrency Control)
    fn version(&self) -> i64 {
        self.metadata().version()
    }

    /// Version attendue en base avant la sauvegarde de l'état courant
    fn expected_version(&self) -> i64 {
        self.version() - 1
    }

    fn increment_version(&mut self) {
        self.metadata_mut().increment_version();
    }
}

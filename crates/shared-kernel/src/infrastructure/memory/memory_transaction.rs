// crates/shared-kernel/src/infrastructure/memory/memory_transaction.rs

use std::any::Any;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};

/// Écriture différée, appliquée sur un brouillon de l'état au moment du commit.
pub type StagedWrite<S> = Box<dyn FnOnce(&mut S) -> Result<()> + Send>;

/// Transaction en mémoire : les écritures sont empilées puis appliquées
/// d'un bloc par le `MemoryTransactionManager`. Rien n'est visible avant le commit.
pub struct MemoryTransaction<S> {
    writes: Arc<Mutex<Vec<StagedWrite<S>>>>,
}

impl<S: Send + 'static> MemoryTransaction<S> {
    pub(crate) fn new() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle partagé, conservé par le manager pour récupérer les écritures
    pub(crate) fn writes(&self) -> Arc<Mutex<Vec<StagedWrite<S>>>> {
        self.writes.clone()
    }

    pub async fn stage<F>(&self, write: F)
    where
        F: FnOnce(&mut S) -> Result<()> + Send + 'static,
    {
        self.writes.lock().await.push(Box::new(write));
    }

    pub async fn staged_count(&self) -> usize {
        self.writes.lock().await.len()
    }
}

impl<S: Send + 'static> Transaction for MemoryTransaction<S> {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub trait MemoryTransactionExt {
    fn as_memory<S: Send + 'static>(&mut self) -> Result<&mut MemoryTransaction<S>>;
}

impl MemoryTransactionExt for dyn Transaction + '_ {
    fn as_memory<S: Send + 'static>(&mut self) -> Result<&mut MemoryTransaction<S>> {
        self.as_any_mut()
            .downcast_mut::<MemoryTransaction<S>>()
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected MemoryTransaction".into()))
    }
}

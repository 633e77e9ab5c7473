// crates/shared-kernel/src/infrastructure/memory/memory_transaction_manager.rs

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::domain::transaction::{TransactionManager, TxFuture, TxWork};
use crate::errors::DomainError;
use crate::infrastructure::memory::MemoryTransaction;

/// Gestionnaire de transactions pour un état partagé en mémoire.
///
/// Le commit applique toutes les écritures sur une copie de l'état, puis
/// remplace l'état sous verrou d'écriture. Une écriture en échec abandonne
/// la copie entière : soit tout est visible, soit rien.
pub struct MemoryTransactionManager<S> {
    state: Arc<RwLock<S>>,
    rejected_commits: AtomicU32,
}

impl<S> MemoryTransactionManager<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(state: Arc<RwLock<S>>) -> Self {
        Self {
            state,
            rejected_commits: AtomicU32::new(0),
        }
    }

    pub fn state(&self) -> Arc<RwLock<S>> {
        self.state.clone()
    }

    /// Simule un rejet du backend sur les `count` prochains commits
    pub fn reject_next_commits(&self, count: u32) {
        self.rejected_commits.store(count, Ordering::SeqCst);
    }

    fn take_rejection(&self) -> bool {
        self.rejected_commits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl<S> TransactionManager for MemoryTransactionManager<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn in_transaction<'a>(&'a self, f: TxWork<'a>) -> TxFuture<'a> {
        Box::pin(async move {
            let tx = MemoryTransaction::<S>::new();
            let writes = tx.writes();

            // Le travail échoue : les écritures empilées sont simplement abandonnées
            f(Box::new(tx)).await?;

            let staged = std::mem::take(&mut *writes.lock().await);

            if self.take_rejection() {
                tracing::warn!("🛑 Memory commit rejected ({} staged writes dropped)", staged.len());
                return Err(DomainError::Infrastructure("Commit rejected by backend".into()));
            }

            let mut guard = self.state.write().await;
            let mut draft = guard.clone();
            for write in staged {
                write(&mut draft)?;
            }
            *guard = draft;

            Ok(())
        })
    }
}

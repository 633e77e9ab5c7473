// crates/profile/src/infrastructure/memory/memory_social_store.rs

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use shared_kernel::domain::transaction::{Transaction, TransactionManager};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::memory::{MemoryTransactionExt, MemoryTransactionManager};
use shared_kernel::infrastructure::TransactionManagerExt;

use crate::domain::entities::{FollowEdge, Profile};
use crate::domain::repositories::{CounterWriteAccess, FollowCountersRepository, FollowRepository, ProfileRepository};
use crate::domain::value_objects::CounterDelta;
use crate::infrastructure::memory::SocialState;

/// Adapter en mémoire des trois ports du graphe social.
///
/// Les écritures sont empilées dans la transaction courante et ne deviennent
/// visibles qu'au commit du `MemoryTransactionManager`. Sans transaction,
/// chaque écriture ouvre la sienne.
#[derive(Clone)]
pub struct MemorySocialStore {
    state: Arc<RwLock<SocialState>>,
    tx_manager: Arc<MemoryTransactionManager<SocialState>>,
}

impl MemorySocialStore {
    pub fn new() -> Self {
        let state = Arc::new(RwLock::new(SocialState::default()));
        let tx_manager = Arc::new(MemoryTransactionManager::new(state.clone()));
        Self { state, tx_manager }
    }

    pub fn tx_manager(&self) -> Arc<MemoryTransactionManager<SocialState>> {
        self.tx_manager.clone()
    }

    /// Même manager, vu comme port du domaine
    pub fn transaction_manager(&self) -> Arc<dyn TransactionManager> {
        self.tx_manager.clone()
    }

    /// Copie cohérente de l'état commité
    pub async fn snapshot(&self) -> SocialState {
        self.state.read().await.clone()
    }

    async fn write<F>(&self, tx: Option<&mut dyn Transaction>, op: F) -> Result<()>
    where
        F: FnOnce(&mut SocialState) -> Result<()> + Send + 'static,
    {
        match tx {
            Some(tx) => {
                tx.as_memory::<SocialState>()?.stage(op).await;
                Ok(())
            }
            None => {
                self.tx_manager
                    .run_in_transaction(move |mut tx| async move {
                        tx.as_memory::<SocialState>()?.stage(op).await;
                        Ok(())
                    })
                    .await
            }
        }
    }
}

impl Default for MemorySocialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MemorySocialStore {
    async fn fetch(&self, id: &AccountId) -> Result<Option<Profile>> {
        Ok(self.state.read().await.profile(id))
    }

    async fn insert(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let profile = profile.clone();
        self.write(tx, move |state| state.insert_profile(&profile)).await
    }

    async fn save(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let profile = profile.clone();
        self.write(tx, move |state| state.save_profile(&profile)).await
    }
}

#[async_trait]
impl FollowRepository for MemorySocialStore {
    async fn exists(&self, follower_id: &AccountId, following_id: &AccountId) -> Result<bool> {
        Ok(self.state.read().await.has_edge(follower_id, following_id))
    }

    async fn insert_edge(&self, tx: &mut dyn Transaction, edge: &FollowEdge) -> Result<()> {
        let edge = edge.clone();
        self.write(Some(tx), move |state| state.upsert_edge(&edge)).await
    }

    async fn delete_edge(
        &self,
        tx: &mut dyn Transaction,
        follower_id: &AccountId,
        following_id: &AccountId,
    ) -> Result<()> {
        let (follower_id, following_id) = (*follower_id, *following_id);
        self.write(Some(tx), move |state| {
            state.remove_edge(&follower_id, &following_id);
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl FollowCountersRepository for MemorySocialStore {
    async fn shift_following(
        &self,
        _access: CounterWriteAccess,
        tx: &mut dyn Transaction,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()> {
        let id = *id;
        self.write(Some(tx), move |state| state.shift_following(&id, delta)).await
    }

    async fn shift_followers(
        &self,
        _access: CounterWriteAccess,
        tx: &mut dyn Transaction,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()> {
        let id = *id;
        self.write(Some(tx), move |state| state.shift_followers(&id, delta)).await
    }
}

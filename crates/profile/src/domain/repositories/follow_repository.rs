// crates/profile/src/domain/repositories/follow_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

use crate::domain::entities::FollowEdge;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn exists(&self, follower_id: &AccountId, following_id: &AccountId) -> Result<bool>;

    /// Upsert : une arête déjà présente est conservée telle quelle
    async fn insert_edge(&self, tx: &mut dyn Transaction, edge: &FollowEdge) -> Result<()>;

    /// Supprimer une arête absente n'est pas une erreur
    async fn delete_edge(
        &self,
        tx: &mut dyn Transaction,
        follower_id: &AccountId,
        following_id: &AccountId,
    ) -> Result<()>;
}

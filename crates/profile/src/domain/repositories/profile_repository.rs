// crates/profile/src/domain/repositories/profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

use crate::domain::entities::Profile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Identité + compteurs
    async fn fetch(&self, id: &AccountId) -> Result<Option<Profile>>;

    /// Création avec compteurs à zéro. Handle et compte déjà pris : `AlreadyExists`.
    async fn insert(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<()>;

    /// Sauvegarde de l'identité seule, verrou optimiste sur `expected_version()`
    async fn save(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<()>;
}

// crates/profile/src/application/create_profile/create_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::TransactionManagerExt;
use crate::application::create_profile::CreateProfileCommand;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct CreateProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl CreateProfileUseCase {
    pub fn new(
        repo: Arc<dyn ProfileRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, tx_manager }
    }

    pub async fn execute(&self, cmd: CreateProfileCommand) -> Result<Profile> {
        // 1. Instanciation via le domaine (compteurs à zéro, version 1)
        let profile = Profile::builder(cmd.account_id, cmd.display_name, cmd.handle)
            .with_optional_bio(cmd.bio)
            .with_optional_avatar_url(cmd.avatar_url)
            .build();

        // 2. Insertion atomique : l'unicité du handle est tranchée par le store,
        // jamais par un check-then-insert
        let repo = self.repo.clone();
        let to_insert = profile.clone();
        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.insert(&to_insert, Some(&mut *tx)).await
            })
            .await?;

        tracing::info!("👤 Profile created: {} (@{})", profile.account_id(), profile.handle());
        Ok(profile)
    }
}

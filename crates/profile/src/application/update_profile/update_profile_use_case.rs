// crates/profile/src/application/update_profile/update_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::{AggregateRoot, EntityOptionExt};
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::{with_retry, RetryConfig, TransactionManagerExt};
use crate::application::update_profile::UpdateProfileCommand;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct UpdateProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    retry: RetryConfig,
}

impl UpdateProfileUseCase {
    pub fn new(
        repo: Arc<dyn ProfileRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            repo,
            tx_manager,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile> {
        let cmd = &command;
        with_retry(self.retry, || async move {
            self.try_execute_once(cmd).await
        })
        .await
    }

    async fn try_execute_once(&self, cmd: &UpdateProfileCommand) -> Result<Profile> {
        // 1. Récupération du profil (relu à chaque tentative)
        let original_profile = self
            .repo
            .fetch(&cmd.account_id)
            .await?
            .ok_or_not_found(cmd.account_id)?;

        // 2. Application des changements via le Modèle Riche
        let mut profile = original_profile.clone();

        if let Some(display_name) = &cmd.display_name {
            profile.update_display_name(display_name.clone());
        }
        if let Some(handle) = &cmd.handle {
            profile.update_handle(handle.clone());
        }
        if let Some(bio) = &cmd.bio {
            profile.update_bio(bio.clone());
        }
        if let Some(avatar_url) = &cmd.avatar_url {
            profile.update_avatar(avatar_url.clone());
        }

        // 3. Idempotence : aucune écriture si rien n'a changé
        if !profile.has_changes() {
            return Ok(original_profile);
        }

        // 4. Persistance avec verrou optimiste sur la version
        let repo = self.repo.clone();
        let to_save = profile.clone();
        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.save(&to_save, Some(&mut *tx)).await
            })
            .await?;

        profile.mark_persisted();
        tracing::debug!("✏️ Profile {} updated to version {}", profile.account_id(), profile.version());

        Ok(profile)
    }
}

// crates/profile/src/application/get_profile/get_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use crate::application::get_profile::GetProfileQuery;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct GetProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    /// Identité + compteurs
    pub async fn execute(&self, query: GetProfileQuery) -> Result<Profile> {
        self.repo
            .fetch(&query.account_id)
            .await?
            .ok_or_not_found(query.account_id)
    }
}

// crates/profile/src/application/get_follow_state/get_follow_state_use_case.rs

use std::sync::Arc;
use crate::application::get_follow_state::GetFollowStateQuery;
use crate::domain::errors::{FollowError, FollowResult};
use crate::domain::repositories::FollowRepository;
use crate::domain::value_objects::FollowState;

pub struct GetFollowStateUseCase {
    follow_repo: Arc<dyn FollowRepository>,
}

impl GetFollowStateUseCase {
    pub fn new(follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repo }
    }

    /// Lecture simple, sans lien atomique avec une bascule ultérieure.
    pub async fn execute(&self, query: GetFollowStateQuery) -> FollowResult<FollowState> {
        let viewer_id = query.viewer_id.ok_or(FollowError::NotAuthenticated)?;

        // Aucune arête réflexive ne peut exister : pas de lecture
        if viewer_id == query.target_id {
            return Ok(FollowState::NotFollowing);
        }

        let exists = self.follow_repo.exists(&viewer_id, &query.target_id).await?;
        Ok(FollowState::from(exists))
    }
}

// crates/profile/src/application/follow_graph/follow_service.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::domain::value_objects::AccountId;
use crate::application::follow_graph::FollowGraph;
use crate::application::get_follow_state::{GetFollowStateQuery, GetFollowStateUseCase};
use crate::application::toggle_follow::{ToggleFollowCommand, ToggleFollowUseCase};
use crate::domain::errors::FollowResult;
use crate::domain::repositories::{FollowCountersRepository, FollowRepository};
use crate::domain::value_objects::FollowState;

pub struct FollowService {
    toggle: ToggleFollowUseCase,
    get_state: GetFollowStateUseCase,
}

impl FollowService {
    pub fn new(
        follow_repo: Arc<dyn FollowRepository>,
        counters_repo: Arc<dyn FollowCountersRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            toggle: ToggleFollowUseCase::new(follow_repo.clone(), counters_repo, tx_manager),
            get_state: GetFollowStateUseCase::new(follow_repo),
        }
    }
}

#[async_trait]
impl FollowGraph for FollowService {
    async fn toggle_follow(
        &self,
        viewer_id: Option<AccountId>,
        target_id: AccountId,
        desired_state: Option<FollowState>,
    ) -> FollowResult<FollowState> {
        self.toggle
            .execute(ToggleFollowCommand { viewer_id, target_id, desired_state })
            .await
    }

    async fn get_follow_state(
        &self,
        viewer_id: Option<AccountId>,
        target_id: AccountId,
    ) -> FollowResult<FollowState> {
        self.get_state
            .execute(GetFollowStateQuery { viewer_id, target_id })
            .await
    }
}

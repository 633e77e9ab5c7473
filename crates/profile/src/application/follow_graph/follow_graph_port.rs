// crates/profile/src/application/follow_graph/follow_graph_port.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use crate::domain::errors::FollowResult;
use crate::domain::value_objects::FollowState;

/// Seule surface publique de mutation du graphe.
/// Les compteurs n'y sont jamais exposés en écriture.
#[async_trait]
pub trait FollowGraph: Send + Sync {
    async fn toggle_follow(
        &self,
        viewer_id: Option<AccountId>,
        target_id: AccountId,
        desired_state: Option<FollowState>,
    ) -> FollowResult<FollowState>;

    async fn get_follow_state(
        &self,
        viewer_id: Option<AccountId>,
        target_id: AccountId,
    ) -> FollowResult<FollowState>;
}

// crates/profile/src/application/get_follow_state/get_follow_state_query.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::AccountId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetFollowStateQuery {
    /// `None` : aucun utilisateur connecté
    pub viewer_id: Option<AccountId>,
    pub target_id: AccountId,
}

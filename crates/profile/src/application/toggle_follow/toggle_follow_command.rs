// crates/profile/src/application/toggle_follow/toggle_follow_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::AccountId;
use crate::domain::value_objects::FollowState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ToggleFollowCommand {
    /// `None` : aucun utilisateur connecté
    pub viewer_id: Option<AccountId>,
    pub target_id: AccountId,
    /// État voulu. Absent : l'état courant est lu puis inversé.
    pub desired_state: Option<FollowState>,
}

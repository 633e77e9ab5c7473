// crates/profile/src/application/follow_controller/follow_request_state.rs

use crate::domain::errors::FollowResult;
use crate::domain::value_objects::FollowState;

/// Cycle de vie d'une requête de bascule côté client
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FollowRequestState {
    #[default]
    Idle,
    Pending,
    Settled(FollowResult<FollowState>),
}

impl FollowRequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn outcome(&self) -> Option<&FollowResult<FollowState>> {
        match self {
            Self::Settled(result) => Some(result),
            _ => None,
        }
    }
}

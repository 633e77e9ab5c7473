// crates/profile/src/domain/value_objects/counter_delta.rs

use crate::domain::value_objects::FollowState;

/// Variation unitaire d'un compteur de relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterDelta {
    Increment,
    Decrement,
}

impl CounterDelta {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// Suivre incrémente, ne plus suivre décrémente
impl From<FollowState> for CounterDelta {
    fn from(target: FollowState) -> Self {
        match target {
            FollowState::Following => Self::Increment,
            FollowState::NotFollowing => Self::Decrement,
        }
    }
}

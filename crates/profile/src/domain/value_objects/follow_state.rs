// crates/profile/src/domain/value_objects/follow_state.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation dirigée viewer -> target, telle que vue par le viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FollowState {
    Following,
    NotFollowing,
}

impl FollowState {
    pub fn is_following(self) -> bool {
        matches!(self, Self::Following)
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Following => Self::NotFollowing,
            Self::NotFollowing => Self::Following,
        }
    }
}

impl From<bool> for FollowState {
    fn from(is_following: bool) -> Self {
        if is_following {
            Self::Following
        } else {
            Self::NotFollowing
        }
    }
}

impl From<FollowState> for bool {
    fn from(state: FollowState) -> Self {
        state.is_following()
    }
}

impl fmt::Display for FollowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Following => f.write_str("following"),
            Self::NotFollowing => f.write_str("not_following"),
        }
    }
}

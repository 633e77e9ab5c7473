// crates/profile/src/domain/entities/follow_edge.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::errors::{FollowError, FollowResult};

/// Relation dirigée `follower -> following`.
/// Identifiée par la paire ordonnée, jamais réflexive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    follower_id: AccountId,
    following_id: AccountId,
    created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn try_new(follower_id: AccountId, following_id: AccountId) -> FollowResult<Self> {
        if follower_id == following_id {
            return Err(FollowError::SelfFollowNotAllowed);
        }

        Ok(Self {
            follower_id,
            following_id,
            created_at: Utc::now(),
        })
    }

    pub fn restore(follower_id: AccountId, following_id: AccountId, created_at: DateTime<Utc>) -> Self {
        Self {
            follower_id,
            following_id,
            created_at,
        }
    }

    pub fn follower_id(&self) -> AccountId { self.follower_id }
    pub fn following_id(&self) -> AccountId { self.following_id }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    pub fn key(&self) -> (AccountId, AccountId) {
        (self.follower_id, self.following_id)
    }
}

impl EntityMetadata for FollowEdge {
    fn entity_name() -> &'static str { "FollowEdge" }
}

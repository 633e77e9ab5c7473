// crates/profile/src/application/toggle_follow/toggle_follow_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::infrastructure::TransactionManagerExt;
use crate::application::toggle_follow::ToggleFollowCommand;
use crate::domain::entities::FollowEdge;
use crate::domain::errors::{FollowError, FollowResult};
use crate::domain::repositories::{CounterWriteAccess, FollowCountersRepository, FollowRepository};
use crate::domain::value_objects::{CounterDelta, FollowState};

/// Bascule une relation et ajuste les deux compteurs dans un seul lot atomique :
/// arête, `following_count` du viewer, `followers_count` de la cible.
///
/// Pas de retry : un échec remonte tel quel, sans effet partiel.
pub struct ToggleFollowUseCase {
    follow_repo: Arc<dyn FollowRepository>,
    counters_repo: Arc<dyn FollowCountersRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl ToggleFollowUseCase {
    pub fn new(
        follow_repo: Arc<dyn FollowRepository>,
        counters_repo: Arc<dyn FollowCountersRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            follow_repo,
            counters_repo,
            tx_manager,
        }
    }

    pub async fn execute(&self, cmd: ToggleFollowCommand) -> FollowResult<FollowState> {
        let viewer_id = cmd.viewer_id.ok_or(FollowError::NotAuthenticated)?;
        let target_id = cmd.target_id;

        // Rejeté avant toute lecture ou écriture
        if viewer_id == target_id {
            return Err(FollowError::SelfFollowNotAllowed);
        }

        // 1. État cible : explicite (dernier écrit gagne) ou inverse de l'état lu
        let target_state = match cmd.desired_state {
            Some(state) => state,
            None => FollowState::from(self.follow_repo.exists(&viewer_id, &target_id).await?).flipped(),
        };

        let edge = match target_state {
            FollowState::Following => Some(FollowEdge::try_new(viewer_id, target_id)?),
            FollowState::NotFollowing => None,
        };
        let delta = CounterDelta::from(target_state);
        let access = CounterWriteAccess::granted();

        // 2. Lot atomique : les trois écritures ou aucune
        let follow_repo = self.follow_repo.clone();
        let counters_repo = self.counters_repo.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                match &edge {
                    Some(edge) => follow_repo.insert_edge(&mut *tx, edge).await?,
                    None => follow_repo.delete_edge(&mut *tx, &viewer_id, &target_id).await?,
                }

                counters_repo.shift_following(access, &mut *tx, &viewer_id, delta).await?;
                counters_repo.shift_followers(access, &mut *tx, &target_id, delta).await?;

                Ok(())
            })
            .await
            .inspect_err(|e| {
                tracing::warn!("⚠️ Follow toggle {} -> {} aborted: {}", viewer_id, target_id, e);
            })?;

        tracing::info!("🔁 {} is now {} {}", viewer_id, target_state, target_id);
        Ok(target_state)
    }
}

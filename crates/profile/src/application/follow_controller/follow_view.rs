// crates/profile/src/application/follow_controller/follow_view.rs

use shared_kernel::domain::value_objects::AccountId;
use crate::application::follow_controller::FollowRequestState;
use crate::domain::entities::Profile;
use crate::domain::errors::FollowResult;
use crate::domain::value_objects::FollowState;

/// Modèle de vue du bouton "Suivre" d'un profil cible.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowView {
    target_id: AccountId,
    follow_state: FollowState,
    follower_count: u64,
    request: FollowRequestState,
    snapshot: Option<(FollowState, u64)>,
}

impl FollowView {
    pub fn new(target_id: AccountId, follow_state: FollowState, follower_count: u64) -> Self {
        Self {
            target_id,
            follow_state,
            follower_count,
            request: FollowRequestState::Idle,
            snapshot: None,
        }
    }

    pub fn from_profile(target: &Profile, follow_state: FollowState) -> Self {
        Self::new(target.account_id(), follow_state, target.stats().follower_count())
    }

    pub fn target_id(&self) -> AccountId { self.target_id }
    pub fn follow_state(&self) -> FollowState { self.follow_state }
    pub fn follower_count(&self) -> u64 { self.follower_count }
    pub fn request_state(&self) -> &FollowRequestState { &self.request }

    /// Bascule affichée avant la réponse serveur. `None` si une requête est en cours.
    pub fn begin_toggle(&mut self) -> Option<FollowState> {
        if self.request.is_pending() {
            return None;
        }

        self.snapshot = Some((self.follow_state, self.follower_count));

        let desired = self.follow_state.flipped();
        self.follow_state = desired;
        self.follower_count = shifted(self.follower_count, desired);
        self.request = FollowRequestState::Pending;

        Some(desired)
    }

    /// Abandon d'une requête en cours : état d'avant restauré, retour à `Idle`
    pub fn cancel(&mut self) {
        if !self.request.is_pending() {
            return;
        }

        if let Some((prev_state, prev_count)) = self.snapshot.take() {
            self.follow_state = prev_state;
            self.follower_count = prev_count;
        }
        self.request = FollowRequestState::Idle;
    }

    pub fn settle(&mut self, result: FollowResult<FollowState>) {
        let (prev_state, prev_count) = self
            .snapshot
            .take()
            .unwrap_or((self.follow_state, self.follower_count));

        match &result {
            Ok(server_state) => {
                self.follow_state = *server_state;
                self.follower_count = if *server_state == prev_state {
                    prev_count
                } else {
                    shifted(prev_count, *server_state)
                };
            }
            Err(_) => {
                self.follow_state = prev_state;
                self.follower_count = prev_count;
            }
        }

        self.request = FollowRequestState::Settled(result);
    }
}

// Compteur affiché, plancher à zéro
fn shifted(count: u64, towards: FollowState) -> u64 {
    match towards {
        FollowState::Following => count.saturating_add(1),
        FollowState::NotFollowing => count.saturating_sub(1),
    }
}

// crates/profile/src/application/follow_controller/follow_toggle_controller.rs

use std::sync::Arc;
use dashmap::DashMap;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::infrastructure::concurrency::{InFlightPermit, InFlightRegistry};
use crate::application::follow_controller::{FollowRequestState, FollowView};
use crate::application::follow_graph::FollowGraph;
use crate::domain::entities::Profile;
use crate::domain::errors::{FollowError, FollowResult};
use crate::domain::value_objects::FollowState;

type PairKey = (AccountId, AccountId);

/// Façade client d'un `FollowGraph` : au plus une bascule en cours par paire
/// (viewer, cible) et un état de requête observable par paire.
pub struct FollowController {
    graph: Arc<dyn FollowGraph>,
    in_flight: InFlightRegistry<PairKey>,
    states: DashMap<PairKey, FollowRequestState>,
}

/// Passe la paire en `Pending`. Un slot jamais réglé (futur annulé)
/// remet la paire à `Idle` ; le permis est rendu après.
struct PendingSlot<'a> {
    states: &'a DashMap<PairKey, FollowRequestState>,
    key: PairKey,
    settled: bool,
    _permit: InFlightPermit<PairKey>,
}

impl<'a> PendingSlot<'a> {
    fn open(states: &'a DashMap<PairKey, FollowRequestState>, permit: InFlightPermit<PairKey>) -> Self {
        let key = *permit.key();
        states.insert(key, FollowRequestState::Pending);
        Self {
            states,
            key,
            settled: false,
            _permit: permit,
        }
    }

    fn settle(&mut self, result: FollowResult<FollowState>) {
        self.states.insert(self.key, FollowRequestState::Settled(result));
        self.settled = true;
    }
}

impl Drop for PendingSlot<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.states.remove(&self.key);
        }
    }
}

/// Vue en attente de réponse : annulée si le futur est abandonné
struct PendingView<'v> {
    view: &'v mut FollowView,
    settled: bool,
}

impl PendingView<'_> {
    fn settle(&mut self, result: FollowResult<FollowState>) {
        self.view.settle(result);
        self.settled = true;
    }
}

impl Drop for PendingView<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.view.cancel();
        }
    }
}

impl FollowController {
    pub fn new(graph: Arc<dyn FollowGraph>) -> Self {
        Self {
            graph,
            in_flight: InFlightRegistry::new(),
            states: DashMap::new(),
        }
    }

    pub fn request_state(&self, viewer_id: AccountId, target_id: AccountId) -> FollowRequestState {
        self.states
            .get(&(viewer_id, target_id))
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    pub fn is_in_flight(&self, viewer_id: AccountId, target_id: AccountId) -> bool {
        self.in_flight.is_in_flight(&(viewer_id, target_id))
    }

    /// Oublie une requête réglée : la paire repasse à `Idle`
    pub fn acknowledge(&self, viewer_id: AccountId, target_id: AccountId) {
        self.states
            .remove_if(&(viewer_id, target_id), |_, state| !state.is_pending());
    }

    pub async fn get_follow_state(
        &self,
        viewer_id: Option<AccountId>,
        target_id: AccountId,
    ) -> FollowResult<FollowState> {
        self.graph.get_follow_state(viewer_id, target_id).await
    }

    pub async fn toggle(
        &self,
        viewer_id: Option<AccountId>,
        target_id: AccountId,
        desired_state: Option<FollowState>,
    ) -> FollowResult<FollowState> {
        let viewer = viewer_id.ok_or(FollowError::NotAuthenticated)?;

        let Some(permit) = self.in_flight.try_acquire((viewer, target_id)) else {
            tracing::debug!("⏳ Toggle already in flight: {} -> {}", viewer, target_id);
            return Err(FollowError::ToggleInFlight);
        };

        let mut slot = PendingSlot::open(&self.states, permit);
        let result = self.graph.toggle_follow(Some(viewer), target_id, desired_state).await;
        slot.settle(result.clone());

        result
    }

    /// Vue initiale : profil cible déjà lu + lecture de l'état de relation
    pub async fn load_view(&self, viewer_id: Option<AccountId>, target: &Profile) -> FollowResult<FollowView> {
        let state = self.get_follow_state(viewer_id, target.account_id()).await?;
        Ok(FollowView::from_profile(target, state))
    }

    /// Bascule optimiste : la vue change tout de suite, puis suit le serveur
    /// ou revient à son état d'avant en cas d'erreur.
    pub async fn toggle_view(&self, viewer_id: Option<AccountId>, view: &mut FollowView) -> FollowResult<FollowState> {
        let Some(desired) = view.begin_toggle() else {
            return Err(FollowError::ToggleInFlight);
        };

        let target_id = view.target_id();
        let mut pending = PendingView { view, settled: false };
        let result = self.toggle(viewer_id, target_id, Some(desired)).await;
        pending.settle(result.clone());
        result
    }
}

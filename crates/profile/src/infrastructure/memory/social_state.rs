// crates/profile/src/infrastructure/memory/social_state.rs

use std::collections::HashMap;
use shared_kernel::domain::entities::{AggregateRoot, EntityMetadata};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{FollowEdge, Profile};
use crate::domain::value_objects::{CounterDelta, Handle, ProfileStats};

/// État complet du graphe en mémoire.
/// Identité et compteurs sont rangés séparément, comme en base.
#[derive(Debug, Clone, Default)]
pub struct SocialState {
    profiles: HashMap<AccountId, Profile>,
    stats: HashMap<AccountId, ProfileStats>,
    handles: HashMap<Handle, AccountId>,
    follows: HashMap<(AccountId, AccountId), FollowEdge>,
}

impl SocialState {
    // --- Lectures ---

    pub fn profile(&self, id: &AccountId) -> Option<Profile> {
        let stats = self.stats.get(id).copied().unwrap_or_default();
        self.profiles.get(id).cloned().map(|p| p.with_stats(stats))
    }

    pub fn stats(&self, id: &AccountId) -> Option<ProfileStats> {
        self.stats.get(id).copied()
    }

    pub fn has_edge(&self, follower_id: &AccountId, following_id: &AccountId) -> bool {
        self.follows.contains_key(&(*follower_id, *following_id))
    }

    pub fn edge_count(&self) -> usize {
        self.follows.len()
    }

    // --- Écritures (appliquées sur le brouillon d'un commit) ---

    pub(crate) fn insert_profile(&mut self, profile: &Profile) -> Result<()> {
        let id = profile.account_id();

        if self.profiles.contains_key(&id) {
            return Err(DomainError::AlreadyExists {
                entity: Profile::entity_name(),
                field: "account_id",
                value: id.to_string(),
            });
        }
        self.ensure_handle_free(profile.handle(), &id)?;

        let mut stored = profile.clone();
        stored.mark_persisted();

        self.handles.insert(profile.handle().clone(), id);
        self.stats.insert(id, profile.stats());
        self.profiles.insert(id, stored);
        Ok(())
    }

    pub(crate) fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        let id = profile.account_id();
        let current = self
            .profiles
            .get(&id)
            .ok_or_else(|| Profile::not_found(id))?;

        if current.version() != profile.expected_version() {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!("Profile version mismatch for user {}", id),
            });
        }

        let old_handle = current.handle().clone();
        if &old_handle != profile.handle() {
            self.ensure_handle_free(profile.handle(), &id)?;
            self.handles.remove(&old_handle);
            self.handles.insert(profile.handle().clone(), id);
        }

        let mut stored = profile.clone();
        stored.mark_persisted();
        self.profiles.insert(id, stored);
        Ok(())
    }

    pub(crate) fn upsert_edge(&mut self, edge: &FollowEdge) -> Result<()> {
        // Équivalent des clés étrangères : les deux profils doivent exister
        for id in [edge.follower_id(), edge.following_id()] {
            if !self.profiles.contains_key(&id) {
                return Err(Profile::not_found(id));
            }
        }

        self.follows.entry(edge.key()).or_insert_with(|| edge.clone());
        Ok(())
    }

    pub(crate) fn remove_edge(&mut self, follower_id: &AccountId, following_id: &AccountId) {
        self.follows.remove(&(*follower_id, *following_id));
    }

    pub(crate) fn shift_following(&mut self, id: &AccountId, delta: CounterDelta) -> Result<()> {
        self.stats_mut(id)?.shift_following(delta);
        Ok(())
    }

    pub(crate) fn shift_followers(&mut self, id: &AccountId, delta: CounterDelta) -> Result<()> {
        self.stats_mut(id)?.shift_followers(delta);
        Ok(())
    }

    fn stats_mut(&mut self, id: &AccountId) -> Result<&mut ProfileStats> {
        self.stats.get_mut(id).ok_or_else(|| Profile::not_found(id))
    }

    fn ensure_handle_free(&self, handle: &Handle, owner: &AccountId) -> Result<()> {
        match self.handles.get(handle) {
            Some(existing) if existing != owner => Err(DomainError::AlreadyExists {
                entity: Profile::entity_name(),
                field: "handle",
                value: handle.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

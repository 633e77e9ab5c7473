// crates/profile/src/domain/entities/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::{AggregateMetadata, AggregateRoot, EntityMetadata};
use shared_kernel::domain::value_objects::{AccountId, Url};

use crate::domain::builders::ProfileBuilder;
use crate::domain::value_objects::{Bio, DisplayName, Handle, ProfileStats};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    account_id: AccountId,
    display_name: DisplayName,
    handle: Handle,
    bio: Option<Bio>,
    avatar_url: Option<Url>,
    stats: ProfileStats,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    metadata: AggregateMetadata,
    // Une session d'édition ne consomme qu'une version
    #[serde(skip)]
    has_changes: bool,
}

impl Profile {
    pub fn builder(account_id: AccountId, display_name: DisplayName, handle: Handle) -> ProfileBuilder {
        ProfileBuilder::new(account_id, display_name, handle)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn restore(
        account_id: AccountId,
        display_name: DisplayName,
        handle: Handle,
        bio: Option<Bio>,
        avatar_url: Option<Url>,
        stats: ProfileStats,
        version: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id,
            display_name,
            handle,
            bio,
            avatar_url,
            stats,
            created_at,
            updated_at,
            metadata: AggregateMetadata::restore(version),
            has_changes: false,
        }
    }

    // --- Getters ---

    pub fn account_id(&self) -> AccountId { self.account_id }
    pub fn display_name(&self) -> &DisplayName { &self.display_name }
    pub fn handle(&self) -> &Handle { &self.handle }
    pub fn bio(&self) -> Option<&Bio> { self.bio.as_ref() }
    pub fn avatar_url(&self) -> Option<&Url> { self.avatar_url.as_ref() }
    pub fn stats(&self) -> ProfileStats { self.stats }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Vrai si une mutation d'identité attend d'être sauvegardée
    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    // --- Mutations d'identité ---

    pub fn update_display_name(&mut self, new_display_name: DisplayName) -> bool {
        if self.display_name == new_display_name {
            return false;
        }
        self.display_name = new_display_name;
        self.apply_change();
        true
    }

    /// Changement critique : l'unicité est vérifiée par le store au commit
    pub fn update_handle(&mut self, new_handle: Handle) -> bool {
        if self.handle == new_handle {
            return false;
        }
        self.handle = new_handle;
        self.apply_change();
        true
    }

    pub fn update_bio(&mut self, new_bio: Option<Bio>) -> bool {
        if self.bio == new_bio {
            return false;
        }
        self.bio = new_bio;
        self.apply_change();
        true
    }

    pub fn update_avatar(&mut self, new_avatar_url: Option<Url>) -> bool {
        if self.avatar_url == new_avatar_url {
            return false;
        }
        self.avatar_url = new_avatar_url;
        self.apply_change();
        true
    }

    /// Les compteurs lus sont rattachés après coup par les adapters
    pub(crate) fn with_stats(mut self, stats: ProfileStats) -> Self {
        self.stats = stats;
        self
    }

    /// Appelé une fois l'identité sauvegardée
    pub(crate) fn mark_persisted(&mut self) {
        self.has_changes = false;
    }

    fn apply_change(&mut self) {
        if !self.has_changes {
            self.increment_version();
            self.has_changes = true;
        }
        self.updated_at = Utc::now();
    }
}

impl EntityMetadata for Profile {
    fn entity_name() -> &'static str { "Profile" }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "profiles_handle_key" => "handle",
            "profiles_pkey" => "account_id",
            _ => "unique_constraint",
        }
    }
}

impl AggregateRoot for Profile {
    fn id(&self) -> String { self.account_id.to_string() }
    fn metadata(&self) -> &AggregateMetadata { &self.metadata }
    fn metadata_mut(&mut self) -> &mut AggregateMetadata { &mut self.metadata }
}

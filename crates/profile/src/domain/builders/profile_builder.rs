// crates/profile/src/domain/builders/profile_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::{AccountId, Url};

use crate::domain::entities::Profile;
use crate::domain::value_objects::{Bio, DisplayName, Handle, ProfileStats};

pub struct ProfileBuilder {
    account_id: AccountId,
    display_name: DisplayName,
    handle: Handle,
    bio: Option<Bio>,
    avatar_url: Option<Url>,
    stats: ProfileStats,
    version: i64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ProfileBuilder {
    /// Chemin 1 : CREATION (Use Case / API), compteurs à zéro
    pub fn new(account_id: AccountId, display_name: DisplayName, handle: Handle) -> Self {
        Self {
            account_id,
            display_name,
            handle,
            bio: None,
            avatar_url: None,
            stats: ProfileStats::default(),
            version: 1,
            created_at: None,
            updated_at: None,
        }
    }

    /// Chemin 2 : RESTAURATION (Infrastructure / Repository)
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        account_id: AccountId,
        display_name: DisplayName,
        handle: Handle,
        bio: Option<Bio>,
        avatar_url: Option<Url>,
        stats: ProfileStats,
        version: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Profile {
        Profile::restore(
            account_id,
            display_name,
            handle,
            bio,
            avatar_url,
            stats,
            version,
            created_at,
            updated_at,
        )
    }

    // --- SETTERS (chemin Création et fixtures de test) ---

    pub fn with_bio(mut self, bio: Bio) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_optional_bio(mut self, bio: Option<Bio>) -> Self {
        self.bio = bio;
        self
    }

    pub fn with_avatar_url(mut self, url: Url) -> Self {
        self.avatar_url = Some(url);
        self
    }

    pub fn with_optional_avatar_url(mut self, url: Option<Url>) -> Self {
        self.avatar_url = url;
        self
    }

    /// Compteurs de départ (seed de test ou migration de données)
    pub fn with_stats(mut self, stats: ProfileStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn build(self) -> Profile {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);

        Profile::restore(
            self.account_id,
            self.display_name,
            self.handle,
            self.bio,
            self.avatar_url,
            self.stats,
            self.version,
            created_at,
            self.updated_at.unwrap_or(created_at),
        )
    }
}

// crates/profile/src/infrastructure/postgres/rows/postgres_profile_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::{AccountId, Url};
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::Profile;
use crate::domain::value_objects::{Bio, DisplayName, Handle, ProfileStats};

/// Ligne `profiles` jointe à `profile_stats`
#[derive(FromRow, Debug)]
pub struct PostgresProfileRow {
    pub account_id: Uuid,
    pub display_name: String,
    pub handle: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: PostgresProfileRow) -> Result<Self> {
        let follower_count: u64 = row.follower_count.try_into()
            .map_err(|_| DomainError::Internal("Negative follower_count in database".into()))?;
        let following_count: u64 = row.following_count.try_into()
            .map_err(|_| DomainError::Internal("Negative following_count in database".into()))?;

        Ok(Profile::restore(
            AccountId::new_unchecked(row.account_id),
            DisplayName::from_raw(row.display_name),
            Handle::from_raw(row.handle),
            row.bio.map(Bio::from_raw),
            row.avatar_url.map(Url::from_raw),
            ProfileStats::new(follower_count, following_count),
            row.version,
            row.created_at,
            row.updated_at,
        ))
    }
}

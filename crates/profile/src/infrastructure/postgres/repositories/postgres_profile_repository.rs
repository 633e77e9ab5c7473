// crates/profile/src/infrastructure/postgres/repositories/postgres_profile_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use shared_kernel::domain::entities::{AggregateRoot, EntityMetadata};
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::transactions::execute_on;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::postgres::rows::PostgresProfileRow;

const SELECT_PROFILE: &str = r#"
    SELECT p.account_id, p.display_name, p.handle, p.bio, p.avatar_url,
           s.follower_count, s.following_count,
           p.version, p.created_at, p.updated_at
    FROM profiles p
    JOIN profile_stats s ON s.account_id = p.account_id
    WHERE p.account_id = $1
"#;

/// Les colonnes BIGINT n'acceptent pas au-delà de `i64::MAX`
fn to_db_count(field: &'static str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| DomainError::Validation {
        field,
        reason: format!("{} exceeds the storable maximum", value),
    })
}

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn fetch(&self, id: &AccountId) -> Result<Option<Profile>> {
        let row = sqlx::query_as::<_, PostgresProfileRow>(SELECT_PROFILE)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Profile>()?;

        row.map(Profile::try_from).transpose()
    }

    async fn insert(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let p = profile.clone();
        let stats = p.stats();
        let follower_count = to_db_count("follower_count", stats.follower_count())?;
        let following_count = to_db_count("following_count", stats.following_count())?;

        execute_on(&self.pool, tx, |conn| Box::pin(async move {
            // Identité et compteurs en une seule instruction
            let sql = r#"
                WITH inserted AS (
                    INSERT INTO profiles (
                        account_id, display_name, handle, bio, avatar_url,
                        version, created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    RETURNING account_id
                )
                INSERT INTO profile_stats (account_id, follower_count, following_count)
                SELECT account_id, $9, $10 FROM inserted
            "#;

            sqlx::query(sql)
                .bind(p.account_id().as_uuid())
                .bind(p.display_name().as_str())
                .bind(p.handle().as_str())
                .bind(p.bio().map(|b| b.as_str()))
                .bind(p.avatar_url().map(|u| u.as_str()))
                .bind(p.version())
                .bind(p.created_at())
                .bind(p.updated_at())
                .bind(follower_count)
                .bind(following_count)
                .execute(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            Ok(())
        })).await
    }

    async fn save(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let p = profile.clone();

        execute_on(&self.pool, tx, |conn| Box::pin(async move {
            // 1. UPDATE avec verrou optimiste
            let sql = r#"
                UPDATE profiles SET
                    display_name = $1, handle = $2, bio = $3, avatar_url = $4,
                    updated_at = $5, version = $6
                WHERE account_id = $7 AND version = $8
            "#;

            let result = sqlx::query(sql)
                .bind(p.display_name().as_str())
                .bind(p.handle().as_str())
                .bind(p.bio().map(|b| b.as_str()))
                .bind(p.avatar_url().map(|u| u.as_str()))
                .bind(p.updated_at())
                .bind(p.version())
                .bind(p.account_id().as_uuid())
                .bind(p.expected_version())
                .execute(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            if result.rows_affected() > 0 {
                return Ok(());
            }

            // 2. Profil absent ou version dépassée ?
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM profiles WHERE account_id = $1)")
                .bind(p.account_id().as_uuid())
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            if !exists {
                return Err(Profile::not_found(p.account_id()));
            }

            Err(DomainError::ConcurrencyConflict {
                reason: format!("Profile version mismatch for user {}", p.account_id()),
            })
        })).await
    }
}

// crates/profile/src/infrastructure/postgres/repositories/postgres_follow_counters_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::transactions::execute_on;
use crate::domain::entities::Profile;
use crate::domain::repositories::{CounterWriteAccess, FollowCountersRepository};
use crate::domain::value_objects::CounterDelta;

/// Colonnes de `profile_stats` ajustables par delta
#[derive(Clone, Copy)]
enum CounterColumn {
    Followers,
    Following,
}

impl CounterColumn {
    // Plancher à zéro côté SQL, jamais de valeur négative
    fn update_sql(self) -> &'static str {
        match self {
            Self::Followers => {
                "UPDATE profile_stats SET follower_count = GREATEST(follower_count + $2, 0) WHERE account_id = $1"
            }
            Self::Following => {
                "UPDATE profile_stats SET following_count = GREATEST(following_count + $2, 0) WHERE account_id = $1"
            }
        }
    }
}

pub struct PostgresFollowCountersRepository {
    pool: PgPool,
}

impl PostgresFollowCountersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn shift(
        &self,
        tx: &mut dyn Transaction,
        column: CounterColumn,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()> {
        let id = *id;

        execute_on(&self.pool, Some(tx), |conn| Box::pin(async move {
            let result = sqlx::query(column.update_sql())
                .bind(id.as_uuid())
                .bind(delta.as_i64())
                .execute(&mut *conn)
                .await
                .map_domain::<Profile>()?;

            if result.rows_affected() == 0 {
                return Err(Profile::not_found(id));
            }

            Ok(())
        })).await
    }
}

#[async_trait]
impl FollowCountersRepository for PostgresFollowCountersRepository {
    async fn shift_following(
        &self,
        _access: CounterWriteAccess,
        tx: &mut dyn Transaction,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()> {
        self.shift(tx, CounterColumn::Following, id, delta).await
    }

    async fn shift_followers(
        &self,
        _access: CounterWriteAccess,
        tx: &mut dyn Transaction,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()> {
        self.shift(tx, CounterColumn::Followers, id, delta).await
    }
}

// crates/profile/src/infrastructure/postgres/repositories/postgres_follow_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::transactions::execute_on;
use crate::domain::entities::FollowEdge;
use crate::domain::repositories::FollowRepository;

pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn exists(&self, follower_id: &AccountId, following_id: &AccountId) -> Result<bool> {
        let sql = "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2)";

        sqlx::query_scalar::<_, bool>(sql)
            .bind(follower_id.as_uuid())
            .bind(following_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_domain::<FollowEdge>()
    }

    async fn insert_edge(&self, tx: &mut dyn Transaction, edge: &FollowEdge) -> Result<()> {
        let edge = edge.clone();

        // Clé étrangère violée => NotFound (profil absent)
        execute_on(&self.pool, Some(tx), |conn| Box::pin(async move {
            let sql = r#"
                INSERT INTO follows (follower_id, following_id, created_at)
                VALUES ($1, $2, $3)
                ON CONFLICT (follower_id, following_id) DO NOTHING
            "#;

            sqlx::query(sql)
                .bind(edge.follower_id().as_uuid())
                .bind(edge.following_id().as_uuid())
                .bind(edge.created_at())
                .execute(&mut *conn)
                .await
                .map_domain::<FollowEdge>()?;

            Ok(())
        })).await
    }

    async fn delete_edge(
        &self,
        tx: &mut dyn Transaction,
        follower_id: &AccountId,
        following_id: &AccountId,
    ) -> Result<()> {
        let (follower, following) = (*follower_id, *following_id);

        execute_on(&self.pool, Some(tx), |conn| Box::pin(async move {
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
                .bind(follower.as_uuid())
                .bind(following.as_uuid())
                .execute(&mut *conn)
                .await
                .map_domain::<FollowEdge>()?;

            Ok(())
        })).await
    }
}

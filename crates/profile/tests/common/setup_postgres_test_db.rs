// crates/profile/tests/common/setup_postgres_test_db.rs

use std::sync::Arc;
use profile::domain::entities::Profile;
use profile::domain::repositories::ProfileRepository;
use profile::domain::value_objects::{DisplayName, Handle, ProfileStats};
use profile::infrastructure::postgres::repositories::{
    PostgresFollowCountersRepository, PostgresFollowRepository, PostgresProfileRepository,
};
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

/// Adapters Postgres branchés sur une base jetable.
/// Garder `_ctx` en vie : il porte le container.
pub struct SocialFixture {
    pub _ctx: PostgresTestContext,
    pub profiles: Arc<PostgresProfileRepository>,
    pub follows: Arc<PostgresFollowRepository>,
    pub counters: Arc<PostgresFollowCountersRepository>,
    pub tx_manager: Arc<dyn TransactionManager>,
}

pub async fn setup_postgres_test_db() -> SocialFixture {
    let ctx = PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
        .expect("Postgres test context failed");

    let pool = ctx.pool();
    SocialFixture {
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        follows: Arc::new(PostgresFollowRepository::new(pool.clone())),
        counters: Arc::new(PostgresFollowCountersRepository::new(pool.clone())),
        tx_manager: Arc::new(PostgresTransactionManager::new(pool)),
        _ctx: ctx,
    }
}

pub async fn seed_profile(fixture: &SocialFixture, handle: &str, stats: ProfileStats) -> Profile {
    let profile = Profile::builder(
        AccountId::new(),
        DisplayName::from_raw(handle.to_uppercase()),
        Handle::from_raw(handle),
    )
    .with_stats(stats)
    .build();

    fixture.profiles.insert(&profile, None).await.expect("Seed profile failed");
    profile
}

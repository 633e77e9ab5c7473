// crates/profile/tests/infrastructure/repository_it_for_profile.rs

use profile::domain::repositories::ProfileRepository;
use profile::domain::value_objects::{Bio, DisplayName, Handle, ProfileStats};
use shared_kernel::domain::entities::AggregateRoot;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use profile::infrastructure::postgres::repositories::PostgresProfileRepository;
use profile::infrastructure::postgres::utils::run_postgres_migrations;

use crate::common::{seed_profile, setup_postgres_test_db};

#[tokio::test]
async fn test_profile_lifecycle() {
    let fixture = setup_postgres_test_db().await;
    let repo = &fixture.profiles;

    // 1. Création avec compteurs initiaux
    let profile = seed_profile(&fixture, "alice", ProfileStats::new(3, 1)).await;

    // 2. Lecture : identité + compteurs joints
    let mut fetched = repo.fetch(&profile.account_id()).await.unwrap().expect("Should find profile");
    assert_eq!(fetched.handle().as_str(), "alice");
    assert_eq!(fetched.stats(), ProfileStats::new(3, 1));
    assert_eq!(fetched.version(), 1);

    // 3. Une session d'édition = une version
    fetched.update_display_name(DisplayName::from_raw("Alice Updated"));
    fetched.update_bio(Some(Bio::from_raw("Hello")));
    repo.save(&fetched, None).await.expect("Update failed");

    let reloaded = repo.fetch(&profile.account_id()).await.unwrap().unwrap();
    assert_eq!(reloaded.display_name().as_str(), "Alice Updated");
    assert_eq!(reloaded.bio().map(|b| b.as_str()), Some("Hello"));
    assert_eq!(reloaded.version(), 2);
}

#[tokio::test]
async fn test_fetch_unknown_profile_returns_none() {
    let fixture = setup_postgres_test_db().await;

    let result = fixture.profiles.fetch(&AccountId::new()).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_handle_must_be_unique() {
    let fixture = setup_postgres_test_db().await;
    seed_profile(&fixture, "alice", ProfileStats::default()).await;
    let mut bob = seed_profile(&fixture, "bob", ProfileStats::default()).await;

    bob.update_handle(Handle::from_raw("alice"));
    let result = fixture.profiles.save(&bob, None).await;

    assert!(matches!(
        result,
        Err(DomainError::AlreadyExists { field: "handle", .. })
    ));
}

#[tokio::test]
async fn test_concurrency_conflict_real_scenario() {
    let fixture = setup_postgres_test_db().await;
    let profile = seed_profile(&fixture, "carol", ProfileStats::default()).await;

    // Deux lecteurs partent de la même version
    let mut first = fixture.profiles.fetch(&profile.account_id()).await.unwrap().unwrap();
    let mut second = first.clone();

    first.update_display_name(DisplayName::from_raw("First"));
    second.update_display_name(DisplayName::from_raw("Second"));

    fixture.profiles.save(&first, None).await.expect("First writer wins");
    let result = fixture.profiles.save(&second, None).await;

    assert!(matches!(result, Err(DomainError::ConcurrencyConflict { .. })));
}

#[tokio::test]
async fn test_embedded_migrations_on_empty_database() {
    // Base vierge : seules les migrations embarquées du crate sont appliquées
    let ctx = PostgresTestContext::builder().build().await.unwrap();
    run_postgres_migrations(&ctx.pool()).await.expect("Migrations failed");

    // Idempotent au redémarrage
    run_postgres_migrations(&ctx.pool()).await.expect("Second run failed");

    let repo = PostgresProfileRepository::new(ctx.pool());
    assert!(repo.fetch(&AccountId::new()).await.unwrap().is_none());
}

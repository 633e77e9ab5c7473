// crates/profile/tests/infrastructure/repository_it_for_follow.rs

use profile::application::toggle_follow::{ToggleFollowCommand, ToggleFollowUseCase};
use profile::domain::errors::FollowError;
use profile::domain::repositories::{FollowRepository, ProfileRepository};
use profile::domain::value_objects::{FollowState, ProfileStats};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;

use crate::common::{seed_profile, setup_postgres_test_db, SocialFixture};

fn use_case(fixture: &SocialFixture) -> ToggleFollowUseCase {
    ToggleFollowUseCase::new(
        fixture.follows.clone(),
        fixture.counters.clone(),
        fixture.tx_manager.clone(),
    )
}

async fn stats_of(fixture: &SocialFixture, id: &AccountId) -> ProfileStats {
    fixture.profiles.fetch(id).await.unwrap().unwrap().stats()
}

#[tokio::test]
async fn test_toggle_round_trip_restores_counters() {
    let fixture = setup_postgres_test_db().await;
    let alice = seed_profile(&fixture, "alice", ProfileStats::new(0, 2)).await;
    let bob = seed_profile(&fixture, "bob", ProfileStats::new(5, 0)).await;
    let use_case = use_case(&fixture);
    let cmd = ToggleFollowCommand {
        viewer_id: Some(alice.account_id()),
        target_id: bob.account_id(),
        desired_state: None,
    };

    // 1. Follow
    let state = use_case.execute(cmd).await.unwrap();
    assert_eq!(state, FollowState::Following);
    assert!(fixture.follows.exists(&alice.account_id(), &bob.account_id()).await.unwrap());
    assert_eq!(stats_of(&fixture, &alice.account_id()).await, ProfileStats::new(0, 3));
    assert_eq!(stats_of(&fixture, &bob.account_id()).await, ProfileStats::new(6, 0));

    // 2. Unfollow
    let state = use_case.execute(cmd).await.unwrap();
    assert_eq!(state, FollowState::NotFollowing);
    assert!(!fixture.follows.exists(&alice.account_id(), &bob.account_id()).await.unwrap());
    assert_eq!(stats_of(&fixture, &alice.account_id()).await, ProfileStats::new(0, 2));
    assert_eq!(stats_of(&fixture, &bob.account_id()).await, ProfileStats::new(5, 0));
}

#[tokio::test]
async fn test_counters_never_go_below_zero() {
    let fixture = setup_postgres_test_db().await;
    let alice = seed_profile(&fixture, "alice", ProfileStats::default()).await;
    let bob = seed_profile(&fixture, "bob", ProfileStats::default()).await;

    let cmd = ToggleFollowCommand {
        viewer_id: Some(alice.account_id()),
        target_id: bob.account_id(),
        desired_state: Some(FollowState::NotFollowing),
    };
    use_case(&fixture).execute(cmd).await.unwrap();

    assert_eq!(stats_of(&fixture, &alice.account_id()).await, ProfileStats::default());
    assert_eq!(stats_of(&fixture, &bob.account_id()).await, ProfileStats::default());
}

#[tokio::test]
async fn test_missing_target_rolls_back_the_whole_batch() {
    let fixture = setup_postgres_test_db().await;
    let alice = seed_profile(&fixture, "alice", ProfileStats::new(0, 2)).await;
    let ghost = AccountId::new();

    // Unfollow : l'arête absente passe, le compteur de la cible échoue
    let cmd = ToggleFollowCommand {
        viewer_id: Some(alice.account_id()),
        target_id: ghost,
        desired_state: Some(FollowState::NotFollowing),
    };
    let result = use_case(&fixture).execute(cmd).await;

    assert!(matches!(result, Err(FollowError::Persistence(DomainError::NotFound { .. }))));
    assert_eq!(stats_of(&fixture, &alice.account_id()).await, ProfileStats::new(0, 2));
}

#[tokio::test]
async fn test_follow_unknown_target_is_not_found() {
    let fixture = setup_postgres_test_db().await;
    let alice = seed_profile(&fixture, "alice", ProfileStats::default()).await;
    let ghost = AccountId::new();

    let cmd = ToggleFollowCommand {
        viewer_id: Some(alice.account_id()),
        target_id: ghost,
        desired_state: None,
    };
    let result = use_case(&fixture).execute(cmd).await;

    assert!(matches!(result, Err(FollowError::Persistence(DomainError::NotFound { .. }))));
    assert!(!fixture.follows.exists(&alice.account_id(), &ghost).await.unwrap());
    assert_eq!(stats_of(&fixture, &alice.account_id()).await, ProfileStats::default());
}

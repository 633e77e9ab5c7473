// crates/profile/src/application/toggle_follow/toggle_follow_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::value_objects::AccountId;
    use shared_kernel::errors::DomainError;

    use crate::application::get_follow_state::{GetFollowStateQuery, GetFollowStateUseCase};
    use crate::application::toggle_follow::{ToggleFollowCommand, ToggleFollowUseCase};
    use crate::domain::entities::Profile;
    use crate::domain::errors::FollowError;
    use crate::domain::repositories::ProfileRepository;
    use crate::domain::value_objects::{DisplayName, FollowState, Handle, ProfileStats};
    use crate::infrastructure::memory::{MemorySocialStore, SocialState};

    fn setup() -> (ToggleFollowUseCase, MemorySocialStore) {
        let store = MemorySocialStore::new();
        let use_case = ToggleFollowUseCase::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            store.transaction_manager(),
        );
        (use_case, store)
    }

    async fn seed(store: &MemorySocialStore, handle: &str, followers: u64, following: u64) -> AccountId {
        let profile = Profile::builder(AccountId::new(), DisplayName::from_raw(handle), Handle::from_raw(handle))
            .with_stats(ProfileStats::new(followers, following))
            .build();
        store.insert(&profile, None).await.unwrap();
        profile.account_id()
    }

    fn toggle(viewer: AccountId, target: AccountId) -> ToggleFollowCommand {
        ToggleFollowCommand { viewer_id: Some(viewer), target_id: target, desired_state: None }
    }

    fn set(viewer: AccountId, target: AccountId, state: FollowState) -> ToggleFollowCommand {
        ToggleFollowCommand { viewer_id: Some(viewer), target_id: target, desired_state: Some(state) }
    }

    fn counters(state: &SocialState, id: &AccountId) -> ProfileStats {
        state.stats(id).unwrap()
    }

    #[tokio::test]
    async fn test_follow_then_unfollow_round_trip() {
        // Arrange : A suit 2 comptes, B a 5 abonnés
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 2).await;
        let b = seed(&store, "bob", 5, 0).await;

        // Act 1
        let first = use_case.execute(toggle(a, b)).await;

        // Assert 1
        assert_eq!(first, Ok(FollowState::Following));
        let state = store.snapshot().await;
        assert!(state.has_edge(&a, &b));
        assert_eq!(counters(&state, &a).following_count(), 3);
        assert_eq!(counters(&state, &b).follower_count(), 6);

        // Act 2
        let second = use_case.execute(toggle(a, b)).await;

        // Assert 2 : retour à l'état initial
        assert_eq!(second, Ok(FollowState::NotFollowing));
        let state = store.snapshot().await;
        assert!(!state.has_edge(&a, &b));
        assert_eq!(counters(&state, &a), ProfileStats::new(0, 2));
        assert_eq!(counters(&state, &b), ProfileStats::new(5, 0));
    }

    #[tokio::test]
    async fn test_follow_state_reflects_toggle() {
        // Arrange
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 0).await;
        let b = seed(&store, "bob", 0, 0).await;
        let reader = GetFollowStateUseCase::new(Arc::new(store.clone()));
        let query = GetFollowStateQuery { viewer_id: Some(a), target_id: b };

        // Act
        use_case.execute(toggle(a, b)).await.unwrap();

        // Assert : relation dirigée
        assert_eq!(reader.execute(query).await, Ok(FollowState::Following));
        let reverse = GetFollowStateQuery { viewer_id: Some(b), target_id: a };
        assert_eq!(reader.execute(reverse).await, Ok(FollowState::NotFollowing));
    }

    #[tokio::test]
    async fn test_self_follow_has_no_side_effect() {
        // Arrange
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 1, 1).await;
        let before = store.snapshot().await;

        // Act
        let result = use_case.execute(set(a, a, FollowState::Following)).await;

        // Assert
        assert_eq!(result, Err(FollowError::SelfFollowNotAllowed));
        let after = store.snapshot().await;
        assert_eq!(after.edge_count(), before.edge_count());
        assert_eq!(counters(&after, &a), counters(&before, &a));
    }

    #[tokio::test]
    async fn test_requires_authenticated_viewer() {
        let (use_case, store) = setup();
        let b = seed(&store, "bob", 0, 0).await;

        let result = use_case
            .execute(ToggleFollowCommand { viewer_id: None, target_id: b, desired_state: None })
            .await;

        assert_eq!(result, Err(FollowError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_rejected_commit_leaves_no_partial_state() {
        // Arrange
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 2).await;
        let b = seed(&store, "bob", 5, 0).await;
        store.tx_manager().reject_next_commits(1);

        // Act
        let result = use_case.execute(toggle(a, b)).await;

        // Assert
        assert!(matches!(result, Err(FollowError::Persistence(DomainError::Infrastructure(_)))));
        let state = store.snapshot().await;
        assert!(!state.has_edge(&a, &b));
        assert_eq!(counters(&state, &a), ProfileStats::new(0, 2));
        assert_eq!(counters(&state, &b), ProfileStats::new(5, 0));
    }

    #[tokio::test]
    async fn test_missing_target_aborts_whole_batch() {
        // Arrange
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 2).await;
        let ghost = AccountId::new();

        // Act
        let result = use_case.execute(toggle(a, ghost)).await;

        // Assert
        assert!(matches!(result, Err(FollowError::Persistence(DomainError::NotFound { .. }))));
        let state = store.snapshot().await;
        assert_eq!(state.edge_count(), 0);
        assert_eq!(counters(&state, &a).following_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_target_on_unfollow_aborts_viewer_decrement() {
        // Arrange : pas d'arête à supprimer, seul le compteur de la cible échoue
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 2).await;

        // Act
        let result = use_case.execute(set(a, AccountId::new(), FollowState::NotFollowing)).await;

        // Assert
        assert!(matches!(result, Err(FollowError::Persistence(DomainError::NotFound { .. }))));
        assert_eq!(counters(&store.snapshot().await, &a).following_count(), 2);
    }

    #[tokio::test]
    async fn test_counters_never_go_below_zero() {
        // Arrange
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 0).await;
        let b = seed(&store, "bob", 0, 0).await;

        // Act : désabonnements explicites répétés sans relation existante
        for _ in 0..3 {
            let result = use_case.execute(set(a, b, FollowState::NotFollowing)).await;
            assert_eq!(result, Ok(FollowState::NotFollowing));
        }

        // Assert
        let state = store.snapshot().await;
        assert_eq!(counters(&state, &a), ProfileStats::default());
        assert_eq!(counters(&state, &b), ProfileStats::default());
    }

    #[tokio::test]
    async fn test_explicit_state_is_last_write_wins() {
        // Arrange
        let (use_case, store) = setup();
        let a = seed(&store, "alice", 0, 0).await;
        let b = seed(&store, "bob", 0, 0).await;

        // Act : deux "suivre" explicites, pas de déduplication
        use_case.execute(set(a, b, FollowState::Following)).await.unwrap();
        use_case.execute(set(a, b, FollowState::Following)).await.unwrap();

        // Assert : une seule arête, compteurs incrémentés deux fois
        let state = store.snapshot().await;
        assert_eq!(state.edge_count(), 1);
        assert_eq!(counters(&state, &a).following_count(), 2);
        assert_eq!(counters(&state, &b).follower_count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_followers_are_all_counted() {
        // Arrange
        let (use_case, store) = setup();
        let target = seed(&store, "star", 0, 0).await;
        let mut fans = Vec::new();
        for i in 0..10 {
            fans.push(seed(&store, &format!("fan{}", i), 0, 0).await);
        }

        // Act
        let results = futures::future::join_all(
            fans.iter().map(|fan| use_case.execute(toggle(*fan, target))),
        )
        .await;

        // Assert
        assert!(results.iter().all(|r| *r == Ok(FollowState::Following)));
        let state = store.snapshot().await;
        assert_eq!(state.edge_count(), 10);
        assert_eq!(counters(&state, &target).follower_count(), 10);
        assert!(fans.iter().all(|fan| counters(&state, fan).following_count() == 1));
    }
}

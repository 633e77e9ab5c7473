// crates/profile/src/application/get_follow_state/get_follow_state_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use async_trait::async_trait;
    use shared_kernel::domain::transaction::Transaction;
    use shared_kernel::domain::value_objects::AccountId;
    use shared_kernel::errors::{DomainError, Result};

    use crate::application::get_follow_state::{GetFollowStateQuery, GetFollowStateUseCase};
    use crate::domain::entities::FollowEdge;
    use crate::domain::errors::FollowError;
    use crate::domain::repositories::FollowRepository;
    use crate::domain::value_objects::FollowState;

    /// Répond `edge` et compte les lectures
    #[derive(Default)]
    struct FollowRepositoryStub {
        edge: bool,
        fail: bool,
        reads: AtomicU32,
    }

    #[async_trait]
    impl FollowRepository for FollowRepositoryStub {
        async fn exists(&self, _: &AccountId, _: &AccountId) -> Result<bool> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::Infrastructure("offline".into()));
            }
            Ok(self.edge)
        }
        async fn insert_edge(&self, _: &mut dyn Transaction, _: &FollowEdge) -> Result<()> {
            unreachable!("read-only use case")
        }
        async fn delete_edge(&self, _: &mut dyn Transaction, _: &AccountId, _: &AccountId) -> Result<()> {
            unreachable!("read-only use case")
        }
    }

    fn query(viewer: Option<AccountId>, target: AccountId) -> GetFollowStateQuery {
        GetFollowStateQuery { viewer_id: viewer, target_id: target }
    }

    #[tokio::test]
    async fn test_edge_presence_maps_to_state() {
        let following = GetFollowStateUseCase::new(Arc::new(FollowRepositoryStub { edge: true, ..Default::default() }));
        let not_following = GetFollowStateUseCase::new(Arc::new(FollowRepositoryStub::default()));

        let q = query(Some(AccountId::new()), AccountId::new());

        assert_eq!(following.execute(q).await, Ok(FollowState::Following));
        assert_eq!(not_following.execute(q).await, Ok(FollowState::NotFollowing));
    }

    #[tokio::test]
    async fn test_self_is_not_following_without_read() {
        // Arrange
        let repo = Arc::new(FollowRepositoryStub { edge: true, ..Default::default() });
        let use_case = GetFollowStateUseCase::new(repo.clone());
        let me = AccountId::new();

        // Act
        let result = use_case.execute(query(Some(me), me)).await;

        // Assert
        assert_eq!(result, Ok(FollowState::NotFollowing));
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_requires_authenticated_viewer() {
        let use_case = GetFollowStateUseCase::new(Arc::new(FollowRepositoryStub::default()));

        let result = use_case.execute(query(None, AccountId::new())).await;

        assert_eq!(result, Err(FollowError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_read_failure_is_persistence_error() {
        let use_case = GetFollowStateUseCase::new(Arc::new(FollowRepositoryStub { fail: true, ..Default::default() }));

        let result = use_case.execute(query(Some(AccountId::new()), AccountId::new())).await;

        assert!(matches!(result, Err(FollowError::Persistence(DomainError::Infrastructure(_)))));
    }
}

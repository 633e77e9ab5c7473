// crates/profile/src/domain/repositories/profile_repository_stub.rs

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

/// Stub configurable : `save_errors` est consommé à chaque sauvegarde,
/// une sauvegarde sans erreur en file réussit.
#[derive(Default)]
pub struct ProfileRepositoryStub {
    pub profile_to_return: Mutex<Option<Profile>>,
    pub save_errors: Mutex<Vec<DomainError>>,
    pub save_calls: AtomicU32,
    pub fetch_calls: AtomicU32,
}

impl ProfileRepositoryStub {
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile_to_return: Mutex::new(Some(profile)),
            ..Default::default()
        }
    }

    pub fn failing_saves(self, errors: Vec<DomainError>) -> Self {
        *self.save_errors.lock().unwrap() = errors;
        self
    }

    pub fn saves(&self) -> u32 {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn fetch(&self, _id: &AccountId) -> Result<Option<Profile>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.profile_to_return.lock().unwrap().clone())
    }

    async fn insert(&self, profile: &Profile, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        *self.profile_to_return.lock().unwrap() = Some(profile.clone());
        Ok(())
    }

    async fn save(&self, _profile: &Profile, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut errors = self.save_errors.lock().unwrap();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.remove(0))
        }
    }
}

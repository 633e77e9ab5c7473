// crates/profile/src/domain/errors/follow_error.rs

use shared_kernel::errors::{AppError, DomainError, ErrorCode};
use thiserror::Error;

/// Erreurs de la bascule de relation et de sa lecture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FollowError {
    #[error("No authenticated viewer")]
    NotAuthenticated,

    #[error("An account cannot follow itself")]
    SelfFollowNotAllowed,

    #[error("A follow toggle is already in flight for this pair")]
    ToggleInFlight,

    /// Échec d'une sous-écriture : la transaction entière est annulée
    #[error("Persistence failure: {0}")]
    Persistence(#[from] DomainError),
}

pub type FollowResult<T> = std::result::Result<T, FollowError>;

impl From<FollowError> for AppError {
    fn from(err: FollowError) -> Self {
        match err {
            FollowError::NotAuthenticated => {
                AppError::new(ErrorCode::Unauthorized, err.to_string())
            }
            FollowError::SelfFollowNotAllowed => {
                AppError::new(ErrorCode::ValidationFailed, err.to_string())
            }
            FollowError::ToggleInFlight => {
                AppError::new(ErrorCode::ConcurrencyConflict, err.to_string())
            }
            FollowError::Persistence(domain) => AppError::from(domain),
        }
    }
}

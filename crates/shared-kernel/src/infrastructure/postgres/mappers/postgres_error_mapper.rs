// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

fn is_conflict_code(code: &str) -> bool {
    code == SERIALIZATION_FAILURE || code == DEADLOCK_DETECTED
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| {
            match e {
                sqlx::Error::RowNotFound => DomainError::NotFound {
                    entity: E::entity_name(),
                    id: "unknown".into(),
                },
                sqlx::Error::Database(db_err) => {
                    let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();

                    if code == UNIQUE_VIOLATION {
                        let field = db_err
                            .try_downcast_ref::<PgDatabaseError>()
                            .and_then(|pg| pg.constraint())
                            .map(E::map_constraint_to_field)
                            .unwrap_or("unique_constraint");

                        return DomainError::AlreadyExists {
                            entity: E::entity_name(),
                            field,
                            value: "already taken".into(),
                        };
                    }

                    // Ligne référencée absente (profil inexistant)
                    if code == FOREIGN_KEY_VIOLATION {
                        let constraint = db_err
                            .try_downcast_ref::<PgDatabaseError>()
                            .and_then(|pg| pg.constraint())
                            .unwrap_or("foreign_key");

                        return DomainError::NotFound {
                            entity: E::entity_name(),
                            id: format!("referenced by {}", constraint),
                        };
                    }

                    if is_conflict_code(&code) {
                        return DomainError::ConcurrencyConflict {
                            reason: format!("Concurrency conflict on {}", E::entity_name()),
                        };
                    }

                    DomainError::Infrastructure(db_err.message().into())
                }
                _ => DomainError::Infrastructure(e.to_string()),
            }
        })
    }

    /// Erreur technique, sauf conflit de sérialisation qui reste rejouable
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().map(|c| is_conflict_code(&c)).unwrap_or(false) {
                    return DomainError::ConcurrencyConflict {
                        reason: format!("{}: {}", context, db_err.message()),
                    };
                }
            }
            DomainError::Infrastructure(format!("{}: {}", context, e))
        })
    }
}

// crates/profile/src/infrastructure/postgres/repositories/mod.rs

mod postgres_follow_counters_repository;
mod postgres_follow_repository;
mod postgres_profile_repository;

pub use postgres_follow_counters_repository::PostgresFollowCountersRepository;
pub use postgres_follow_repository::PostgresFollowRepository;
pub use postgres_profile_repository::PostgresProfileRepository;

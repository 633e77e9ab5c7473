// crates/profile/src/domain/repositories/mod.rs

mod follow_counters_repository;
mod follow_repository;
mod profile_repository;

#[cfg(test)]
mod profile_repository_stub;

pub use follow_counters_repository::{CounterWriteAccess, FollowCountersRepository};
pub use follow_repository::FollowRepository;
pub use profile_repository::ProfileRepository;

#[cfg(test)]
pub use profile_repository_stub::ProfileRepositoryStub;

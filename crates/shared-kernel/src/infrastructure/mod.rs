// crates/shared-kernel/src/infrastructure/mod.rs

mod retry;
mod transaction_manager;

pub mod memory;

#[cfg(feature = "concurrency")]
pub mod concurrency;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use retry::{with_retry, RetryConfig};
pub use transaction_manager::TransactionManagerExt;

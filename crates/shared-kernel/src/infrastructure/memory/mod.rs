// crates/shared-kernel/src/infrastructure/memory/mod.rs

mod memory_transaction;
mod memory_transaction_manager;

pub use memory_transaction::{MemoryTransaction, MemoryTransactionExt, StagedWrite};
pub use memory_transaction_manager::MemoryTransactionManager;

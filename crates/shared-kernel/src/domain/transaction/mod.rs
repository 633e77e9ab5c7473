// crates/shared-kernel/src/domain/transaction/mod.rs

mod transaction;
mod transaction_manager;

pub use transaction::Transaction;
pub use transaction_manager::{TransactionManager, TxFuture, TxWork};

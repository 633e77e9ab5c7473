// crates/shared-kernel/src/infrastructure/postgres/transactions/mod.rs

mod postgres_transaction;
mod postgres_transaction_manager;

pub use postgres_transaction::{execute_on, PgWork, PostgresTransaction, PostgresTransactionExt};
pub use postgres_transaction_manager::PostgresTransactionManager;

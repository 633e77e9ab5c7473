// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;

/// Unité d'écriture atomique ouverte par un `TransactionManager`.
/// Les adapters concrets (Postgres, mémoire) sont retrouvés par downcast.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

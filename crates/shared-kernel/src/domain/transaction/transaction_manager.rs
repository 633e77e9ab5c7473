// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use crate::domain::transaction::Transaction;
use crate::errors::Result;

pub type TxFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

pub type TxWork<'a> = Box<dyn FnOnce(Box<dyn Transaction>) -> TxFuture<'a> + Send + 'a>;

/// Exécute un travail dans une transaction : commit si `Ok`, rollback si `Err`.
/// Aucune écriture partielle n'est visible des autres lecteurs.
pub trait TransactionManager: Send + Sync {
    fn in_transaction<'a>(&'a self, f: TxWork<'a>) -> TxFuture<'a>;
}

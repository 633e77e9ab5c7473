// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use sqlx::{Pool, Postgres};
use crate::domain::transaction::{Transaction, TransactionManager, TxFuture, TxWork};
use crate::errors::DomainError;
use crate::infrastructure::postgres::transactions::PostgresTransaction;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;

pub struct PostgresTransactionManager {
    pool: Pool<Postgres>,
}

impl PostgresTransactionManager {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(&'a self, f: TxWork<'a>) -> TxFuture<'a> {
        Box::pin(async move {
            let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;
            let pg_tx = PostgresTransaction::new(tx);
            let handle = pg_tx.handle();

            let outcome = f(Box::new(pg_tx) as Box<dyn Transaction>).await;

            let Some(tx) = handle.lock().await.take() else {
                return Err(DomainError::Internal("Transaction handle lost before completion".into()));
            };

            match outcome {
                Ok(()) => tx.commit().await.map_domain_infra("Failed to commit transaction"),
                Err(e) => {
                    if let Err(rollback_err) = tx.rollback().await {
                        tracing::warn!("⚠️ Rollback failed after error '{}': {}", e, rollback_err);
                    }
                    Err(e)
                }
            }
        })
    }
}

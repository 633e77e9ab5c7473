// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction.rs

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use sqlx::{PgConnection, PgPool, Postgres, Transaction as PostgresTx};
use tokio::sync::Mutex;
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;

type SharedTx = Arc<Mutex<Option<PostgresTx<'static, Postgres>>>>;

/// Requête à exécuter sur une connexion, qu'elle soit transactionnelle ou non
pub type PgWork<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

/// Transaction sqlx partagée avec le `PostgresTransactionManager`.
///
/// Le manager garde une copie du handle : à la fin du travail il reprend la
/// transaction pour la commiter ou l'annuler.
pub struct PostgresTransaction {
    inner: SharedTx,
}

impl PostgresTransaction {
    pub fn new(tx: PostgresTx<'static, Postgres>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub(crate) fn handle(&self) -> SharedTx {
        self.inner.clone()
    }

    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: for<'c> FnOnce(&'c mut PgConnection) -> PgWork<'c, T> + Send,
        T: Send,
    {
        let mut guard = self.inner.lock().await;
        let tx = guard
            .as_mut()
            .ok_or_else(|| DomainError::Internal("Transaction already completed".into()))?;
        f(&mut **tx).await
    }
}

impl Transaction for PostgresTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

pub trait PostgresTransactionExt {
    fn as_postgres(&mut self) -> Result<&mut PostgresTransaction>;
}

impl PostgresTransactionExt for dyn Transaction + '_ {
    fn as_postgres(&mut self) -> Result<&mut PostgresTransaction> {
        self.as_any_mut()
            .downcast_mut::<PostgresTransaction>()
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected PostgresTransaction".into()))
    }
}

/// Exécute `f` dans la transaction fournie, sinon sur une connexion du pool.
pub async fn execute_on<F, T>(
    pool: &PgPool,
    tx: Option<&mut dyn Transaction>,
    f: F,
) -> Result<T>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> PgWork<'c, T> + Send,
    T: Send,
{
    match tx {
        Some(t) => t.as_postgres()?.run(f).await,
        None => {
            let mut conn = pool
                .acquire()
                .await
                .map_domain_infra("Pool acquisition failed")?;
            f(&mut *conn).await
        }
    }
}

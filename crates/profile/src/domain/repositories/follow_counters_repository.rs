// crates/profile/src/domain/repositories/follow_counters_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

use crate::domain::value_objects::CounterDelta;

/// Droit d'écriture sur les compteurs, délivré uniquement par la bascule
/// de relation. Hors du crate, il ne peut pas être construit :
///
/// ```compile_fail
/// use profile::domain::repositories::CounterWriteAccess;
///
/// let _access = CounterWriteAccess::granted();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CounterWriteAccess(());

impl CounterWriteAccess {
    pub(crate) fn granted() -> Self {
        Self(())
    }
}

/// Compteurs dénormalisés. Écriture uniquement dans une transaction,
/// aucun setter absolu. Décrément saturé à zéro, profil absent : `NotFound`.
#[async_trait]
pub trait FollowCountersRepository: Send + Sync {
    async fn shift_following(
        &self,
        access: CounterWriteAccess,
        tx: &mut dyn Transaction,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()>;

    async fn shift_followers(
        &self,
        access: CounterWriteAccess,
        tx: &mut dyn Transaction,
        id: &AccountId,
        delta: CounterDelta,
    ) -> Result<()>;
}

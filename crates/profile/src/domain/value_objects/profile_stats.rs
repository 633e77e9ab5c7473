// crates/profile/src/domain/value_objects/profile_stats.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::Counter;
use crate::domain::value_objects::CounterDelta;

/// Statistiques dénormalisées du profil.
/// Persistées à part de l'identité : seule la bascule de relation les modifie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    follower_count: Counter,
    following_count: Counter,
}

impl ProfileStats {
    pub fn new(follower_count: u64, following_count: u64) -> Self {
        Self {
            follower_count: Counter::from_raw(follower_count),
            following_count: Counter::from_raw(following_count),
        }
    }

    pub fn follower_count(&self) -> u64 {
        self.follower_count.value()
    }

    pub fn following_count(&self) -> u64 {
        self.following_count.value()
    }

    // pub(crate) : seuls les adapters de compteurs du crate y ont accès

    pub(crate) fn shift_followers(&mut self, delta: CounterDelta) {
        Self::shift(&mut self.follower_count, delta);
    }

    pub(crate) fn shift_following(&mut self, delta: CounterDelta) {
        Self::shift(&mut self.following_count, delta);
    }

    // Décrément saturant : plancher à zéro
    fn shift(counter: &mut Counter, delta: CounterDelta) {
        match delta {
            CounterDelta::Increment => counter.increment(),
            CounterDelta::Decrement => counter.decrement(),
        }
    }
}

// crates/shared-kernel/src/infrastructure/concurrency/in_flight.rs

//! # InFlight - Une seule opération en cours par clé
//!
//! Variante non bloquante du singleflight : au lieu de faire attendre les
//! appelants suivants sur le résultat du premier, on leur refuse l'accès
//! tant que le permis du premier n'a pas été rendu.
//!
//! Le permis est libéré au `Drop`, y compris si le futur qui le détient est
//! annulé ou échoue.

use std::hash::Hash;
use std::sync::Arc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

pub struct InFlightRegistry<K>
where
    K: Hash + Eq + Clone,
{
    slots: Arc<DashMap<K, ()>>,
}

impl<K> InFlightRegistry<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
        }
    }

    /// Réserve la clé. `None` si une opération est déjà en cours pour elle.
    pub fn try_acquire(&self, key: K) -> Option<InFlightPermit<K>> {
        // Check-and-Insert atomique sous le verrou de shard
        match self.slots.entry(key.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => {
                entry.insert(());
                Some(InFlightPermit {
                    key,
                    slots: self.slots.clone(),
                })
            }
        }
    }

    pub fn is_in_flight(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K> Default for InFlightRegistry<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

pub struct InFlightPermit<K>
where
    K: Hash + Eq + Clone,
{
    key: K,
    slots: Arc<DashMap<K, ()>>,
}

impl<K> InFlightPermit<K>
where
    K: Hash + Eq + Clone,
{
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K> Drop for InFlightPermit<K>
where
    K: Hash + Eq + Clone,
{
    fn drop(&mut self) {
        self.slots.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_refused_while_permit_alive() {
        let registry = InFlightRegistry::new();

        let permit = registry.try_acquire(("a", "b"));
        assert!(permit.is_some());
        assert!(registry.try_acquire(("a", "b")).is_none());
        assert!(registry.is_in_flight(&("a", "b")));
    }

    #[test]
    fn test_keys_are_independent() {
        let registry = InFlightRegistry::new();

        let _ab = registry.try_acquire(("a", "b")).unwrap();
        let ba = registry.try_acquire(("b", "a"));

        assert!(ba.is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_drop_releases_the_key() {
        let registry = InFlightRegistry::new();

        {
            let permit = registry.try_acquire(7u32).unwrap();
            assert_eq!(*permit.key(), 7);
        }

        assert!(registry.is_empty());
        assert!(registry.try_acquire(7u32).is_some());
    }

    #[tokio::test]
    async fn test_concurrent_acquire_has_single_winner() {
        let registry = Arc::new(InFlightRegistry::<u32>::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry.try_acquire(1).map(|permit| {
                        // Le permis part avec la tâche, on le garde vivant
                        std::mem::forget(permit);
                    })
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert!(registry.is_in_flight(&1));
    }
}

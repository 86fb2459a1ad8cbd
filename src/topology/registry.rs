//! Rank-partitioned registry: the state every view reads.
//!
//! A [`RankedRegistry`] holds one ordered collection of `key → value` per
//! rank, densely indexed from rank 0 to the highest rank ever populated.
//! The rank of a key is either derived from its cardinality
//! ([`Derived`]: simplices, paths) or assigned by the inserting complex and
//! searched for on lookup ([`Assigned`]: hyperedges).
//!
//! The registry is owned by the enclosing complex. Views borrow it and never
//! mutate it; the `insert*`/`remove*` hooks below are what the complex calls,
//! and they refuse anything that would break rank partitioning:
//! - every key is non-empty;
//! - a key occupies exactly one rank;
//! - under [`Derived`], slot `r` holds only keys of cardinality `r + 1`.
//!
//! For assigned ranks, key→rank resolution goes through a lazily built
//! index populated by scanning ranks in ascending order (lowest rank wins).
//! Once built, the insert and remove hooks keep it current in place, so a
//! stream of inserts builds it at most once.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use hashbrown::HashMap;
use once_cell::sync::OnceCell;

use crate::debug_invariants::DebugInvariants;
use crate::topology::cache::InvalidateCache;
use crate::topology::bounds::LabelLike;
use crate::topology::input::KeyInput;
use crate::topology::key::{CanonicalKey, RankedKey, SeqKey, SetKey};
use crate::topology::rank::{Assigned, Derived, MultiKey, Rank, RankStrategy};
use crate::view_error::ViewError;

/// Multiplicity map: several records sharing one key and rank.
pub type Multi<A> = BTreeMap<MultiKey, A>;

/// Hyperedges of a combinatorial complex: one record per set-key.
pub type HyperEdgeRegistry<L, A> = RankedRegistry<SetKey<L>, A, Assigned>;
/// Hyperedges of a colored hypergraph: a multiplicity map per set-key.
pub type ColoredRegistry<L, A> = RankedRegistry<SetKey<L>, Multi<A>, Assigned>;
/// Simplices of a simplicial complex.
pub type SimplexRegistry<L, A> = RankedRegistry<SetKey<L>, A, Derived>;
/// Paths of a path complex.
pub type PathRegistry<L, A> = RankedRegistry<SeqKey<L>, A, Derived>;

/// Outcome of [`RankedRegistry::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved<K> {
    /// Stored at this rank.
    Found(Rank, K),
    /// Well-formed but not stored.
    Missing(K),
    /// The input named no labels at all.
    Empty,
}

impl<K> Resolved<K> {
    pub fn found(self) -> Option<(Rank, K)> {
        match self {
            Resolved::Found(rank, key) => Some((rank, key)),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(..))
    }
}

/// Rank-partitioned `key → value` storage.
#[derive(Clone, Debug)]
pub struct RankedRegistry<K, V, S = Assigned>
where
    K: RankedKey,
{
    slots: Vec<BTreeMap<K, V>>,
    rank_index: OnceCell<HashMap<K, Rank>>,
    _strategy: PhantomData<S>,
}

impl<K: RankedKey, V, S> Default for RankedRegistry<K, V, S> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            rank_index: OnceCell::new(),
            _strategy: PhantomData,
        }
    }
}

impl<K: RankedKey, V, S: RankStrategy> RankedRegistry<K, V, S> {
    /// Creates an empty registry: no rank, no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys across all ranks.
    pub fn len(&self) -> usize {
        self.slots.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(BTreeMap::is_empty)
    }

    /// Number of slots, including empty ones below the highest populated rank.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The collection stored at `rank`, if that slot exists.
    #[inline]
    pub fn slot(&self, rank: Rank) -> Option<&BTreeMap<K, V>> {
        self.slots.get(rank)
    }

    /// Iterate over `(rank, collection)` for every slot, ascending.
    pub fn slots(&self) -> impl Iterator<Item = (Rank, &BTreeMap<K, V>)> + '_ {
        self.slots.iter().enumerate()
    }

    /// Ranks holding at least one key, ascending.
    pub fn ranks(&self) -> Vec<Rank> {
        self.slots()
            .filter_map(|(rank, slot)| (!slot.is_empty()).then_some(rank))
            .collect()
    }

    /// Highest rank holding at least one key.
    pub fn max_rank(&self) -> Option<Rank> {
        self.slots.iter().rposition(|slot| !slot.is_empty())
    }

    /// Whether `rank` holds at least one key.
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.slot(rank).is_some_and(|slot| !slot.is_empty())
    }

    /// Per-rank counts from rank 0 to [`max_rank`](Self::max_rank), where
    /// `count` sizes one stored value (1 for plain records, the multiplicity
    /// for colored ones).
    pub fn shape_by<F>(&self, count: F) -> Vec<usize>
    where
        F: Fn(&V) -> usize,
    {
        let Some(max) = self.max_rank() else {
            return Vec::new();
        };
        self.slots[..=max]
            .iter()
            .map(|slot| slot.values().map(&count).sum::<usize>())
            .collect()
    }

    /// Per-rank key counts.
    pub fn shape(&self) -> Vec<usize> {
        self.shape_by(|_| 1)
    }

    /// Value for `key` at a known `rank`.
    #[inline]
    pub fn get_at(&self, rank: Rank, key: &K) -> Option<&V> {
        self.slot(rank).and_then(|slot| slot.get(key))
    }

    /// Resolve the rank holding `key`.
    ///
    /// Derived ranks are computed from the key's cardinality and only
    /// confirmed against one slot. Assigned ranks go through the rank index.
    pub fn rank_of(&self, key: &K) -> Option<Rank> {
        match S::derive(key.cardinality()) {
            Some(rank) => self.get_at(rank, key).map(|_| rank),
            None if key.cardinality() == 0 => None,
            None => self.rank_index().get(key).copied(),
        }
    }

    /// Resolve caller input to the rank that holds it.
    ///
    /// A bare label names a node, so it is looked up at rank 0 only and
    /// never searched for. Anything else is normalized and resolved through
    /// [`rank_of`](Self::rank_of).
    pub fn resolve<L>(&self, input: KeyInput<L, K>) -> Resolved<K>
    where
        L: LabelLike,
        K: CanonicalKey<L>,
    {
        let (key, rank) = match input {
            KeyInput::Atomic(label) => {
                let key = K::singleton(label);
                let rank = self.get_at(0, &key).map(|_| 0);
                (key, rank)
            }
            other => match other.normalize_query() {
                Some(key) => {
                    let rank = self.rank_of(&key);
                    (key, rank)
                }
                None => return Resolved::Empty,
            },
        };
        log::trace!("registry: resolved {key:?} to {rank:?}");
        match rank {
            Some(rank) => Resolved::Found(rank, key),
            None => Resolved::Missing(key),
        }
    }

    /// Value stored for `key` at whatever rank holds it.
    pub fn get(&self, key: &K) -> Option<&V> {
        let rank = self.rank_of(key)?;
        self.get_at(rank, key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.rank_of(key).is_some()
    }

    /// Mutable access to a stored value. Keys and ranks cannot change
    /// through this handle.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let rank = self.rank_of(key)?;
        self.slots.get_mut(rank).and_then(|slot| slot.get_mut(key))
    }

    /// Iterate over every stored `(rank, key, value)`: ascending rank, then
    /// ascending key.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &K, &V)> + '_ {
        self.slots()
            .flat_map(|(rank, slot)| slot.iter().map(move |(k, v)| (rank, k, v)))
    }

    /// Remove `key` from whatever rank holds it.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let rank = self.rank_of(key)?;
        let removed = self.slots.get_mut(rank)?.remove(key);
        if removed.is_some() {
            log::debug!("registry: removed {key:?} from rank {rank}");
            if let Some(index) = self.rank_index.get_mut() {
                index.remove(key);
            }
        }
        removed
    }

    fn rank_index(&self) -> &HashMap<K, Rank> {
        self.rank_index.get_or_init(|| {
            log::trace!("registry: building rank index over {} slots", self.slots.len());
            let mut index = HashMap::with_capacity(self.len());
            for (rank, slot) in self.slots() {
                for key in slot.keys() {
                    if let Some(first) = index.get(key) {
                        log::warn!(
                            "registry: key {key:?} occupies ranks {first} and {rank}; resolving to {first}"
                        );
                        continue;
                    }
                    index.insert(key.clone(), rank);
                }
            }
            index
        })
    }

    fn slot_mut(&mut self, rank: Rank) -> &mut BTreeMap<K, V> {
        if self.slots.len() <= rank {
            self.slots.resize_with(rank + 1, BTreeMap::new);
        }
        &mut self.slots[rank]
    }

    /// Place `value` under `key` at `rank` after checking the key is
    /// non-empty and not already stored at a different rank.
    fn place(&mut self, key: K, rank: Rank, value: V) -> Result<Option<V>, ViewError> {
        if key.cardinality() == 0 {
            return Err(ViewError::InvalidKeyShape(
                "a cell must contain at least one label".to_string(),
            ));
        }
        if let Some(existing) = self.rank_of(&key) {
            if existing != rank {
                return Err(ViewError::RankConflict {
                    key: format!("{key:?}"),
                    existing,
                    requested: rank,
                });
            }
        }
        crate::debug_invariants!(self.validate_placement(&key, rank), "RankedRegistry::place");
        log::debug!("registry: insert {key:?} at rank {rank}");
        if let Some(index) = self.rank_index.get_mut() {
            index.entry(key.clone()).or_insert(rank);
        }
        Ok(self.slot_mut(rank).insert(key, value))
    }

    /// Check that `key` may sit at `rank`: its derived rank agrees and no
    /// other slot already holds it. Touches one entry per slot.
    #[cfg_attr(
        not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")),
        allow(dead_code)
    )]
    fn validate_placement(&self, key: &K, rank: Rank) -> Result<(), ViewError> {
        if let Some(derived) = S::derive(key.cardinality()) {
            if derived != rank {
                return Err(ViewError::RankConflict {
                    key: format!("{key:?}"),
                    existing: rank,
                    requested: derived,
                });
            }
        }
        match self
            .slots()
            .find(|(other, slot)| *other != rank && slot.contains_key(key))
        {
            Some((existing, _)) => Err(ViewError::RankConflict {
                key: format!("{key:?}"),
                existing,
                requested: rank,
            }),
            None => Ok(()),
        }
    }
}

impl<K: RankedKey, V, S> InvalidateCache for RankedRegistry<K, V, S> {
    /// Drop the lazily built key→rank index.
    fn invalidate_cache(&mut self) {
        if self.rank_index.take().is_some() {
            log::debug!("registry: rank index invalidated");
        }
    }
}

impl<K: RankedKey, V> RankedRegistry<K, V, Assigned> {
    /// Insert `key` at an explicitly chosen `rank`, returning the value it
    /// replaced.
    ///
    /// Fails with [`ViewError::RankConflict`] if the key already lives at a
    /// different rank.
    pub fn insert(&mut self, key: K, rank: Rank, value: V) -> Result<Option<V>, ViewError> {
        self.place(key, rank, value)
    }
}

impl<K: RankedKey, V> RankedRegistry<K, V, Derived> {
    /// Insert `key` at rank `cardinality - 1`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ViewError> {
        let rank = Derived::derive(key.cardinality()).ok_or_else(|| {
            ViewError::InvalidKeyShape("a cell must contain at least one label".to_string())
        })?;
        self.place(key, rank, value)
    }
}

impl<K: RankedKey, A> RankedRegistry<K, Multi<A>, Assigned> {
    /// Insert one colored record under `(key, multiplicity)` at `rank`,
    /// returning the record it replaced.
    ///
    /// Multiplicity keys are whatever the owning complex chooses; they are
    /// neither allocated nor renumbered here.
    pub fn insert_keyed(
        &mut self,
        key: K,
        rank: Rank,
        multiplicity: MultiKey,
        record: A,
    ) -> Result<Option<A>, ViewError> {
        match self.rank_of(&key) {
            Some(existing) if existing != rank => Err(ViewError::RankConflict {
                key: format!("{key:?}"),
                existing,
                requested: rank,
            }),
            Some(_) => {
                log::debug!("registry: insert {key:?}#{multiplicity} at rank {rank}");
                Ok(self
                    .get_mut(&key)
                    .and_then(|records| records.insert(multiplicity, record)))
            }
            None => self
                .place(key, rank, Multi::from([(multiplicity, record)]))
                .map(|_| None),
        }
    }

    /// Remove the record `(key, multiplicity)`. The key itself is dropped
    /// once its last record is gone.
    pub fn remove_keyed(&mut self, key: &K, multiplicity: MultiKey) -> Option<A> {
        let records = self.get_mut(key)?;
        let removed = records.remove(&multiplicity);
        if records.is_empty() {
            self.remove(key);
        }
        removed
    }

    /// Validate that no key is left with an empty multiplicity map.
    pub fn validate_multiplicity(&self) -> Result<(), ViewError> {
        match self.iter().find(|(_, _, records)| records.is_empty()) {
            Some((rank, key, _)) => Err(ViewError::NotFound(format!(
                "key {key:?} at rank {rank} has no multiplicity records"
            ))),
            None => Ok(()),
        }
    }
}

impl<K: RankedKey, V, S: RankStrategy> DebugInvariants for RankedRegistry<K, V, S> {
    fn validate_invariants(&self) -> Result<(), ViewError> {
        let mut seen: HashMap<&K, Rank> = HashMap::new();
        for (rank, key, _) in self.iter() {
            if key.cardinality() == 0 {
                return Err(ViewError::InvalidKeyShape(format!(
                    "empty key stored at rank {rank}"
                )));
            }
            if let Some(derived) = S::derive(key.cardinality()) {
                if derived != rank {
                    return Err(ViewError::RankConflict {
                        key: format!("{key:?}"),
                        existing: rank,
                        requested: derived,
                    });
                }
            }
            if let Some(&existing) = seen.get(key) {
                return Err(ViewError::RankConflict {
                    key: format!("{key:?}"),
                    existing,
                    requested: rank,
                });
            }
            seen.insert(key, rank);
        }
        Ok(())
    }
}

#[cfg(test)]
impl<K: RankedKey, V, S: RankStrategy> RankedRegistry<K, V, S> {
    /// Write straight into a slot, bypassing every check. Test-only: used to
    /// build malformed registries.
    pub(crate) fn insert_unchecked(&mut self, key: K, rank: Rank, value: V) {
        self.slot_mut(rank).insert(key, value);
        self.invalidate_cache();
    }
}

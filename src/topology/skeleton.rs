//! Skeleton queries: every key whose rank stands in a [`Relation`] to a
//! target rank, in ascending key order.
//!
//! Each per-rank slot is already sorted, so the result is a k-way merge of
//! the admitted slots rather than a collect-and-sort. A rank that is absent
//! simply contributes nothing; `Equal` on an absent rank is the empty
//! sequence.

use itertools::Itertools;

use crate::topology::key::RankedKey;
use crate::topology::rank::{Rank, RankStrategy, Relation};
use crate::topology::registry::RankedRegistry;

impl<K: RankedKey, V, S: RankStrategy> RankedRegistry<K, V, S> {
    /// Ranks (slot indices) admitted by `relation` against `rank`.
    pub fn admitted_ranks(&self, rank: Rank, relation: Relation) -> Vec<Rank> {
        self.slots()
            .filter(|(r, slot)| !slot.is_empty() && relation.admits(*r, rank))
            .map(|(r, _)| r)
            .collect()
    }

    /// Keys at ranks admitted by `relation`, sorted ascending.
    pub fn skeleton(&self, rank: Rank, relation: Relation) -> Vec<K> {
        self.skeleton_with(rank, relation, |key, _| std::iter::once(key.clone()))
    }

    /// Skeleton with each stored entry expanded into zero or more items.
    ///
    /// `expand` must yield items in ascending order for a given entry and
    /// items that order consistently with their keys (e.g. `(key, m)` pairs),
    /// so that each slot's stream stays sorted for the merge.
    pub fn skeleton_with<'a, T, I, F>(&'a self, rank: Rank, relation: Relation, expand: F) -> Vec<T>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
        F: Fn(&'a K, &'a V) -> I,
    {
        log::trace!("skeleton: rank {rank} relation {relation}");
        let expand = &expand;
        self.admitted_ranks(rank, relation)
            .into_iter()
            .filter_map(|r| self.slot(r))
            .map(|slot| slot.iter().flat_map(move |(k, v)| expand(k, v)))
            .kmerge()
            .collect()
    }
}

//! `HyperEdgeView`: read-only access to the hyperedges of a combinatorial
//! complex.
//!
//! Hyperedges are order-insensitive and carry a rank chosen by the complex,
//! independent of how many labels they span; lookups therefore search for
//! the rank. One set-key maps to exactly one record.

use std::fmt;

use crate::topology::bounds::LabelLike;
use crate::topology::input::KeyInput;
use crate::topology::key::{CanonicalKey, SetKey};
use crate::topology::rank::{Rank, Relation};
use crate::topology::registry::HyperEdgeRegistry;
use crate::view_error::ViewError;
use crate::views::expect_found;
use crate::views::render::{LabelTuple, key_string, write_view};

/// View over the hyperedges of a combinatorial complex.
#[derive(Clone, Debug)]
pub struct HyperEdgeView<'a, L: LabelLike, A> {
    registry: &'a HyperEdgeRegistry<L, A>,
    name: String,
}

impl<'a, L: LabelLike, A> HyperEdgeView<'a, L, A> {
    pub fn new(registry: &'a HyperEdgeRegistry<L, A>) -> Self {
        Self {
            registry,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, input: KeyInput<L, SetKey<L>>) -> Result<(Rank, SetKey<L>), ViewError> {
        expect_found::<L, _>(self.registry.resolve(input), "hyperedge")
    }

    /// Rank holding the hyperedge. A bare label resolves against rank 0 only.
    ///
    /// # Errors
    /// [`ViewError::NotFound`] if no rank holds it.
    pub fn rank_of(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<Rank, ViewError> {
        self.lookup(input.into()).map(|(rank, _)| rank)
    }

    /// Every record stored for the hyperedge, in multiplicity order.
    ///
    /// Plain hyperedges hold exactly one record, so this is a singleton;
    /// use [`get_unique`](Self::get_unique) to receive it directly.
    pub fn get(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<Vec<&'a A>, ViewError> {
        self.get_unique(input).map(|record| vec![record])
    }

    /// The single record stored for the hyperedge.
    pub fn get_unique(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<&'a A, ViewError> {
        let (rank, key) = self.lookup(input.into())?;
        let registry: &'a HyperEdgeRegistry<L, A> = self.registry;
        registry.get_at(rank, &key).ok_or_else(|| {
            ViewError::NotFound(format!("hyperedge {} has no record", key_string(key.labels())))
        })
    }

    /// Whether the hyperedge is stored at any rank. Empty input is `false`.
    pub fn contains(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> bool {
        self.registry.resolve(input.into()).is_found()
    }

    /// Hyperedges whose rank satisfies `relation` against `rank`, sorted.
    pub fn skeleton(&self, rank: Rank, relation: Relation) -> Vec<SetKey<L>> {
        self.registry.skeleton(rank, relation)
    }

    /// Hyperedge count per rank, from rank 0 to the highest rank.
    pub fn shape(&self) -> Vec<usize> {
        self.registry.shape()
    }

    /// Total number of hyperedges, nodes included.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Ranks holding at least one hyperedge, ascending.
    pub fn ranks(&self) -> Vec<Rank> {
        self.registry.ranks()
    }

    pub fn max_rank(&self) -> Option<Rank> {
        self.registry.max_rank()
    }

    /// The present rank just below `rank`.
    ///
    /// `None` if `rank` is not present, or is the lowest or highest present
    /// rank.
    pub fn lower_rank(&self, rank: Rank) -> Option<Rank> {
        let ranks = self.ranks();
        let pos = Self::interior_position(&ranks, rank)?;
        Some(ranks[pos - 1])
    }

    /// The present rank just above `rank`, under the same conditions as
    /// [`lower_rank`](Self::lower_rank).
    pub fn higher_rank(&self, rank: Rank) -> Option<Rank> {
        let ranks = self.ranks();
        let pos = Self::interior_position(&ranks, rank)?;
        Some(ranks[pos + 1])
    }

    fn interior_position(ranks: &[Rank], rank: Rank) -> Option<usize> {
        let pos = ranks.binary_search(&rank).ok()?;
        (pos > 0 && pos + 1 < ranks.len()).then_some(pos)
    }

    /// Every stored hyperedge: ascending rank, then ascending key.
    pub fn iter(&self) -> impl Iterator<Item = &'a SetKey<L>> {
        let registry: &'a HyperEdgeRegistry<L, A> = self.registry;
        registry.iter().map(|(_, key, _)| key)
    }
}

impl<L: LabelLike, A> fmt::Display for HyperEdgeView<'_, L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(
            f,
            "HyperEdgeView",
            self.iter().map(|key| LabelTuple(key.labels())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(labels: &[u32]) -> SetKey<u32> {
        SetKey::new(labels.iter().copied())
    }

    fn registry() -> HyperEdgeRegistry<u32, &'static str> {
        let mut reg = HyperEdgeRegistry::new();
        reg.insert(key(&[1]), 0, "n1").unwrap();
        reg.insert(key(&[2]), 0, "n2").unwrap();
        reg.insert(key(&[1, 2]), 1, "e12").unwrap();
        reg.insert(key(&[1, 2, 3]), 2, "f123").unwrap();
        reg.insert(key(&[3, 4]), 5, "g34").unwrap();
        reg
    }

    #[test]
    fn lookup_by_any_shape() {
        let reg = registry();
        let view = HyperEdgeView::new(&reg);
        assert_eq!(view.get_unique([2, 1]).unwrap(), &"e12");
        assert_eq!(view.get_unique(key(&[3, 2, 1])).unwrap(), &"f123");
        assert_eq!(view.get_unique(KeyInput::Atomic(1)).unwrap(), &"n1");
        assert_eq!(view.get([1, 2]).unwrap(), vec![&"e12"]);
        assert_eq!(view.rank_of([4, 3]).unwrap(), 5);
    }

    #[test]
    fn missing_hyperedge_is_not_found() {
        let reg = registry();
        let view = HyperEdgeView::new(&reg);
        let err = view.rank_of([2, 5]).unwrap_err();
        assert_eq!(
            err,
            ViewError::NotFound("hyperedge (2, 5) is not in the complex".to_string())
        );
        assert!(matches!(view.get(KeyInput::Atomic(9)), Err(ViewError::NotFound(_))));
        assert!(matches!(view.get(Vec::<u32>::new()), Err(ViewError::NotFound(_))));
    }

    #[test]
    fn atomic_labels_only_match_rank_zero() {
        let mut reg = HyperEdgeRegistry::<u32, ()>::new();
        reg.insert(key(&[7]), 2, ()).unwrap();
        let view = HyperEdgeView::new(&reg);
        assert!(!view.contains(KeyInput::Atomic(7)));
        assert!(view.contains([7]));
        assert_eq!(view.rank_of([7]).unwrap(), 2);
    }

    #[test]
    fn containment_never_fails() {
        let reg = registry();
        let view = HyperEdgeView::new(&reg);
        assert!(view.contains([1, 2, 3]));
        assert!(view.contains(KeyInput::Atomic(2)));
        assert!(!view.contains([1, 3]));
        assert!(!view.contains(Vec::<u32>::new()));
        let empty = HyperEdgeRegistry::<u32, ()>::new();
        assert!(!HyperEdgeView::new(&empty).contains([1]));
    }

    #[test]
    fn neighbouring_ranks() {
        let reg = registry();
        let view = HyperEdgeView::new(&reg);
        assert_eq!(view.ranks(), vec![0, 1, 2, 5]);
        assert_eq!(view.lower_rank(2), Some(1));
        assert_eq!(view.higher_rank(2), Some(5));
        assert_eq!(view.lower_rank(0), None);
        assert_eq!(view.higher_rank(5), None);
        assert_eq!(view.lower_rank(3), None);
    }

    #[test]
    fn shape_size_and_display() {
        let reg = registry();
        let view = HyperEdgeView::new(&reg).with_name("he");
        assert_eq!(view.shape(), vec![2, 1, 1, 0, 0, 1]);
        assert_eq!(view.len(), view.shape().iter().sum::<usize>());
        assert_eq!(view.name(), "he");
        assert_eq!(
            view.to_string(),
            "HyperEdgeView([(1,), (2,), (1, 2), (1, 2, 3), (3, 4)])"
        );
    }
}

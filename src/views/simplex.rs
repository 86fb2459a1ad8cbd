//! `SimplexView`: simplices of a simplicial complex, partitioned by
//! dimension. The rank of a simplex is its cardinality minus one, so
//! resolution never scans.

use std::fmt;

use crate::topology::bounds::LabelLike;
use crate::topology::input::KeyInput;
use crate::topology::key::{CanonicalKey, SetKey};
use crate::topology::rank::{Rank, Relation};
use crate::topology::registry::SimplexRegistry;
use crate::view_error::ViewError;
use crate::views::expect_found;
use crate::views::render::{LabelTuple, key_string, write_view};

#[derive(Clone, Debug)]
pub struct SimplexView<'a, L: LabelLike, A> {
    registry: &'a SimplexRegistry<L, A>,
    name: String,
}

impl<'a, L: LabelLike, A> SimplexView<'a, L, A> {
    pub fn new(registry: &'a SimplexRegistry<L, A>) -> Self {
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

    /// Attributes of the simplex.
    ///
    /// # Errors
    /// [`ViewError::NotFound`] if it is not stored.
    pub fn get(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<&'a A, ViewError> {
        let registry: &'a SimplexRegistry<L, A> = self.registry;
        let (rank, key) = expect_found::<L, _>(registry.resolve(input.into()), "simplex")?;
        registry
            .get_at(rank, &key)
            .ok_or_else(|| {
                ViewError::NotFound(format!("simplex {} has no record", key_string(key.labels())))
            })
    }

    /// Dimension of a stored simplex.
    pub fn rank_of(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<Rank, ViewError> {
        expect_found::<L, _>(self.registry.resolve(input.into()), "simplex").map(|(rank, _)| rank)
    }

    /// Whether the simplex is stored. Never fails: empty input, input
    /// larger than any stored simplex and absent dimensions are all `false`.
    pub fn contains(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> bool {
        // A key above the top dimension derives a rank with no slot, so the
        // resolver already misses it.
        !self.is_empty() && self.registry.resolve(input.into()).is_found()
    }

    /// Simplices whose dimension satisfies `relation` against `rank`, sorted.
    pub fn skeleton(&self, rank: Rank, relation: Relation) -> Vec<SetKey<L>> {
        self.registry.skeleton(rank, relation)
    }

    /// Number of simplices per dimension, from 0 to the top dimension.
    pub fn shape(&self) -> Vec<usize> {
        self.registry.shape()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Highest dimension holding a simplex.
    pub fn max_dim(&self) -> Option<Rank> {
        self.registry.max_rank()
    }

    pub fn ranks(&self) -> Vec<Rank> {
        self.registry.ranks()
    }

    /// Every simplex: ascending dimension, then ascending key.
    pub fn iter(&self) -> impl Iterator<Item = &'a SetKey<L>> {
        let registry: &'a SimplexRegistry<L, A> = self.registry;
        registry.iter().map(|(_, key, _)| key)
    }
}

impl<L: LabelLike, A> fmt::Display for SimplexView<'_, L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(
            f,
            "SimplexView",
            self.iter().map(|key| LabelTuple(key.labels())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::key::RankedKey;

    fn triangle() -> SimplexRegistry<char, u32> {
        let mut reg = SimplexRegistry::new();
        for (i, v) in ['a', 'b', 'c'].into_iter().enumerate() {
            reg.insert(SetKey::new([v]), i as u32).unwrap();
        }
        reg.insert(SetKey::new(['a', 'b']), 10).unwrap();
        reg.insert(SetKey::new(['b', 'c']), 11).unwrap();
        reg.insert(SetKey::new(['a', 'c']), 12).unwrap();
        reg.insert(SetKey::new(['c', 'b', 'a']), 20).unwrap();
        reg
    }

    #[test]
    fn rank_is_cardinality_minus_one() {
        let reg = triangle();
        let view = SimplexView::new(&reg);
        assert_eq!(view.rank_of(['b', 'a']).unwrap(), 1);
        assert_eq!(view.rank_of(KeyInput::Atomic('c')).unwrap(), 0);
        assert_eq!(view.rank_of(['a', 'b', 'c']).unwrap(), 2);
        assert_eq!(view.get(['c', 'a']).unwrap(), &12);
        assert!(matches!(view.get(['a', 'd']), Err(ViewError::NotFound(_))));
    }

    #[test]
    fn containment_answers_false_instead_of_failing() {
        let reg = triangle();
        let view = SimplexView::new(&reg);
        assert!(view.contains(['a', 'b', 'c']));
        assert!(view.contains(['a', 'a', 'b']));
        assert!(!view.contains(['a', 'b', 'c', 'd']));
        assert!(!view.contains(Vec::<char>::new()));
        assert!(!view.contains(KeyInput::Atomic('z')));
        let empty = SimplexRegistry::<char, ()>::new();
        assert!(!SimplexView::new(&empty).contains(['a']));
    }

    #[test]
    fn skeleton_by_dimension() {
        let reg = triangle();
        let view = SimplexView::new(&reg);
        let edges = view.skeleton(1, Relation::Equal);
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|e| e.cardinality() == 2));
        assert_eq!(view.skeleton(0, Relation::Up).len(), 4);
        assert!(view.skeleton(3, Relation::Equal).is_empty());
        assert_eq!(view.shape(), vec![3, 3, 1]);
        assert_eq!(view.len(), 7);
    }

    #[test]
    fn display_lists_every_simplex() {
        let mut reg = SimplexRegistry::<u32, ()>::new();
        reg.insert(SetKey::new([2, 1]), ()).unwrap();
        reg.insert(SetKey::new([1]), ()).unwrap();
        assert_eq!(
            SimplexView::new(&reg).to_string(),
            "SimplexView([(1,), (1, 2)])"
        );
    }
}

//! `PathView`: paths of a path complex.
//!
//! Identical to [`SimplexView`](crate::views::SimplexView) except that paths
//! are order-sensitive: `(a, b)` and `(b, a)` are distinct entries and a
//! label may repeat along a path. A path of length 1 is also addressable by
//! its bare label.

use std::fmt;

use crate::topology::bounds::LabelLike;
use crate::topology::input::KeyInput;
use crate::topology::key::{CanonicalKey, SeqKey};
use crate::topology::rank::{Rank, Relation};
use crate::topology::registry::PathRegistry;
use crate::view_error::ViewError;
use crate::views::expect_found;
use crate::views::render::{LabelTuple, key_string, write_view};

#[derive(Clone, Debug)]
pub struct PathView<'a, L: LabelLike, A> {
    registry: &'a PathRegistry<L, A>,
    name: String,
}

impl<'a, L: LabelLike, A> PathView<'a, L, A> {
    pub fn new(registry: &'a PathRegistry<L, A>) -> Self {
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

    pub fn get(&self, input: impl Into<KeyInput<L, SeqKey<L>>>) -> Result<&'a A, ViewError> {
        let registry: &'a PathRegistry<L, A> = self.registry;
        let (rank, key) = expect_found::<L, _>(registry.resolve(input.into()), "path")?;
        registry.get_at(rank, &key).ok_or_else(|| {
            ViewError::NotFound(format!("path {} has no record", key_string(key.labels())))
        })
    }

    /// Rank of a stored path: its length minus one.
    pub fn rank_of(&self, input: impl Into<KeyInput<L, SeqKey<L>>>) -> Result<Rank, ViewError> {
        expect_found::<L, _>(self.registry.resolve(input.into()), "path").map(|(rank, _)| rank)
    }

    /// Whether this exact sequence is stored. Never fails.
    pub fn contains(&self, input: impl Into<KeyInput<L, SeqKey<L>>>) -> bool {
        !self.is_empty() && self.registry.resolve(input.into()).is_found()
    }

    /// Paths whose rank satisfies `relation` against `rank`, in
    /// lexicographic order of their label sequences.
    pub fn skeleton(&self, rank: Rank, relation: Relation) -> Vec<SeqKey<L>> {
        self.registry.skeleton(rank, relation)
    }

    pub fn shape(&self) -> Vec<usize> {
        self.registry.shape()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn max_rank(&self) -> Option<Rank> {
        self.registry.max_rank()
    }

    pub fn ranks(&self) -> Vec<Rank> {
        self.registry.ranks()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SeqKey<L>> {
        let registry: &'a PathRegistry<L, A> = self.registry;
        registry.iter().map(|(_, key, _)| key)
    }
}

impl<L: LabelLike, A> fmt::Display for PathView<'_, L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(f, "PathView", self.iter().map(|key| LabelTuple(key.labels())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> PathRegistry<&'static str, i32> {
        let mut reg = PathRegistry::new();
        reg.insert(SeqKey::new(["a"]), 0).unwrap();
        reg.insert(SeqKey::new(["a", "b"]), 1).unwrap();
        reg.insert(SeqKey::new(["b", "a"]), 2).unwrap();
        reg
    }

    #[test]
    fn order_distinguishes_paths() {
        let reg = paths();
        let view = PathView::new(&reg);
        assert_eq!(view.get(["a", "b"]).unwrap(), &1);
        assert_eq!(view.get(["b", "a"]).unwrap(), &2);
        assert_eq!(view.len(), 3);
        assert_eq!(view.shape(), vec![1, 2]);
    }

    #[test]
    fn containment_follows_sequence_identity() {
        let reg = paths();
        let view = PathView::new(&reg);
        assert!(view.contains(["b", "a"]));
        assert!(!view.contains(["a", "b", "a"]));
        assert!(!view.contains(["b"]));
        assert!(!view.contains(Vec::<&str>::new()));
    }

    #[test]
    fn bare_label_addresses_length_one_path() {
        let reg = paths();
        let view = PathView::new(&reg);
        assert!(view.contains(KeyInput::Atomic("a")));
        assert_eq!(view.get(KeyInput::Atomic("a")).unwrap(), &0);
        assert_eq!(view.rank_of(SeqKey::new(["b", "a"])).unwrap(), 1);
        assert_eq!(
            view.rank_of(KeyInput::Atomic("c")).unwrap_err(),
            ViewError::NotFound(r#"path ("c",) is not in the complex"#.to_string())
        );
    }

    #[test]
    fn repeated_labels_are_kept() {
        let mut reg = PathRegistry::<u8, ()>::new();
        reg.insert(SeqKey::new([1, 2, 1]), ()).unwrap();
        let view = PathView::new(&reg);
        assert_eq!(view.rank_of([1, 2, 1]).unwrap(), 2);
        assert!(!view.contains([1, 2]));
        assert_eq!(view.to_string(), "PathView([(1, 2, 1)])");
    }

    #[test]
    fn skeleton_is_lexicographic() {
        let reg = paths();
        let view = PathView::new(&reg);
        assert_eq!(
            view.skeleton(0, Relation::UpEq),
            vec![
                SeqKey::new(["a"]),
                SeqKey::new(["a", "b"]),
                SeqKey::new(["b", "a"])
            ]
        );
    }
}

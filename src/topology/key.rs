//! Canonical cell identities.
//!
//! A cell is named by its vertex labels. Order-insensitive cells
//! (hyperedges, simplices, nodes) are identified by a [`SetKey`]: the
//! deduplicated labels held in ascending order, so two inputs naming the same
//! label set always produce the same key. Order-sensitive cells (paths,
//! cell boundaries) are identified by a [`SeqKey`], which keeps the labels
//! exactly as given.
//!
//! Both implement [`CanonicalKey`], which is what the registry and the
//! normalizer are generic over.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::topology::bounds::LabelLike;

/// Anything a rank-partitioned registry can store as a key.
pub trait RankedKey: Clone + Eq + Hash + Ord + fmt::Debug {
    /// Number of labels (with repeats, for sequences).
    fn cardinality(&self) -> usize;
}

/// A canonical cell identity built from labels.
pub trait CanonicalKey<L: LabelLike>: RankedKey {
    /// Build the canonical key for `labels`.
    fn from_labels(labels: Vec<L>) -> Self;

    /// Key of a single atomic label.
    fn singleton(label: L) -> Self {
        Self::from_labels(vec![label])
    }

    /// The labels in canonical order.
    fn labels(&self) -> &[L];
}

/// An external cell object exposing its own canonical elements.
///
/// Hyperedge, simplex, path and cell types live with the owning complex;
/// the views only need this accessor.
pub trait CellObject {
    type Key;

    fn elements(&self) -> &Self::Key;
}

/// Order-insensitive identity: labels sorted ascending, duplicates removed.
///
/// The derived ordering compares the sorted label sequences
/// lexicographically, which is the ordering skeleton queries return.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetKey<L>(Vec<L>);

impl<L: LabelLike> SetKey<L> {
    pub fn new<I: IntoIterator<Item = L>>(labels: I) -> Self {
        Self::from_labels(labels.into_iter().collect())
    }

    /// Whether `label` belongs to this key.
    pub fn contains(&self, label: &L) -> bool {
        self.0.binary_search(label).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.0.iter()
    }
}

impl<L: LabelLike> RankedKey for SetKey<L> {
    #[inline]
    fn cardinality(&self) -> usize {
        self.0.len()
    }
}

impl<L: LabelLike> CanonicalKey<L> for SetKey<L> {
    fn from_labels(mut labels: Vec<L>) -> Self {
        labels.sort_unstable();
        labels.dedup();
        SetKey(labels)
    }

    fn labels(&self) -> &[L] {
        &self.0
    }
}

impl<L: LabelLike> FromIterator<L> for SetKey<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<L: LabelLike> CellObject for SetKey<L> {
    type Key = SetKey<L>;

    fn elements(&self) -> &Self::Key {
        self
    }
}

impl<L: fmt::Debug> fmt::Debug for SetKey<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<L: Serialize> Serialize for SetKey<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

// Deserialization re-canonicalizes, so unsorted or repeated labels on the
// wire still land on the same key.
impl<'de, L: LabelLike + Deserialize<'de>> Deserialize<'de> for SetKey<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<L>::deserialize(deserializer).map(SetKey::from_labels)
    }
}

/// Order-sensitive identity: labels exactly as given, repeats allowed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeqKey<L>(Vec<L>);

impl<L: LabelLike> SeqKey<L> {
    pub fn new<I: IntoIterator<Item = L>>(labels: I) -> Self {
        SeqKey(labels.into_iter().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.0.iter()
    }

    /// The same labels in reverse order.
    pub fn reversed(&self) -> Self {
        SeqKey(self.0.iter().rev().cloned().collect())
    }

    /// Whether `other` is a cyclic rotation of `self`.
    pub fn is_rotation_of(&self, other: &SeqKey<L>) -> bool {
        let n = self.0.len();
        if n != other.0.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| (0..n).all(|i| self.0[(i + shift) % n] == other.0[i]))
    }

    /// Whether the two sequences bound the same cell: `other` is a rotation
    /// of `self` or of `self` reversed.
    pub fn is_homotopic_to(&self, other: &SeqKey<L>) -> bool {
        self.is_rotation_of(other) || self.reversed().is_rotation_of(other)
    }
}

impl<L: LabelLike> RankedKey for SeqKey<L> {
    #[inline]
    fn cardinality(&self) -> usize {
        self.0.len()
    }
}

impl<L: LabelLike> CanonicalKey<L> for SeqKey<L> {
    fn from_labels(labels: Vec<L>) -> Self {
        SeqKey(labels)
    }

    fn labels(&self) -> &[L] {
        &self.0
    }
}

impl<L: LabelLike> FromIterator<L> for SeqKey<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<L: LabelLike> CellObject for SeqKey<L> {
    type Key = SeqKey<L>;

    fn elements(&self) -> &Self::Key {
        self
    }
}

impl<L: fmt::Debug> fmt::Debug for SeqKey<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("");
        for label in &self.0 {
            t.field(label);
        }
        t.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_eq_size, assert_impl_all};

    // Keys are plain label vectors: no hidden header, freely shareable.
    assert_eq_size!(SetKey<u32>, Vec<u32>);
    assert_eq_size!(SeqKey<u32>, Vec<u32>);
    assert_impl_all!(SetKey<u32>: Send, Sync, Ord, std::hash::Hash);

    #[test]
    fn set_key_ignores_order_and_repeats() {
        let a = SetKey::new([3, 1, 2]);
        let b = SetKey::new([2, 3, 1, 1]);
        assert_eq!(a, b);
        assert_eq!(a.labels(), &[1, 2, 3]);
        assert_eq!(a.cardinality(), 3);
    }

    #[test]
    fn set_key_orders_by_sorted_labels() {
        let mut keys = vec![
            SetKey::new([2, 3]),
            SetKey::new([1]),
            SetKey::new([1, 3]),
            SetKey::new([1, 2]),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                SetKey::new([1]),
                SetKey::new([1, 2]),
                SetKey::new([1, 3]),
                SetKey::new([2, 3]),
            ]
        );
    }

    #[test]
    fn seq_key_keeps_order() {
        let ab = SeqKey::new(["a", "b"]);
        let ba = SeqKey::new(["b", "a"]);
        assert_ne!(ab, ba);
        assert_eq!(SeqKey::new(["a", "b", "a"]).cardinality(), 3);
    }

    #[test]
    fn rotation_and_reversal_are_homotopic() {
        let square = SeqKey::new([1, 2, 3, 4]);
        assert!(square.is_homotopic_to(&SeqKey::new([3, 4, 1, 2])));
        assert!(square.is_homotopic_to(&SeqKey::new([4, 3, 2, 1])));
        assert!(square.is_homotopic_to(&SeqKey::new([2, 1, 4, 3])));
        assert!(!square.is_homotopic_to(&SeqKey::new([1, 3, 2, 4])));
        assert!(!square.is_homotopic_to(&SeqKey::new([1, 2, 3])));
    }

    #[test]
    fn set_key_deserialize_canonicalizes() {
        let key: SetKey<u32> = serde_json::from_str("[3, 1, 3, 2]").unwrap();
        assert_eq!(key, SetKey::new([1, 2, 3]));
        assert_eq!(serde_json::to_string(&key).unwrap(), "[1,2,3]");
    }

    #[test]
    fn membership_uses_canonical_order() {
        let key = SetKey::new(["c", "b", "a"]);
        assert!(key.contains(&"c"));
        assert!(!key.contains(&"d"));
    }
}

//! Boundary normalization: every accepted way of naming a cell is resolved
//! once, here, into a canonical key.
//!
//! The accepted shapes form the tagged union [`KeyInput`]:
//! - [`KeyInput::Cell`]: a first-class cell object's elements, already canonical;
//! - [`KeyInput::Collection`]: labels in any order (order is kept only for
//!   sequence keys);
//! - [`KeyInput::Atomic`]: a single label, wrapped as a singleton key.
//!
//! Dynamically shaped input (e.g. decoded JSON) enters through
//! [`KeyInput::from_json`] and [`MultiKeyInput::from_json`]; anything that is
//! neither a label nor a list of labels fails with
//! [`ViewError::InvalidKeyShape`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::topology::bounds::LabelLike;
use crate::topology::key::{CanonicalKey, CellObject, SeqKey, SetKey};
use crate::topology::rank::MultiKey;
use crate::view_error::ViewError;

/// One way of naming a cell, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyInput<L, K> {
    /// A bare label.
    Atomic(L),
    /// A collection of labels.
    Collection(Vec<L>),
    /// The elements of a cell object.
    Cell(K),
}

impl<L: LabelLike, K: CanonicalKey<L>> KeyInput<L, K> {
    pub fn collection<I: IntoIterator<Item = L>>(labels: I) -> Self {
        KeyInput::Collection(labels.into_iter().collect())
    }

    /// Take the elements of any cell object keyed like this view.
    pub fn cell<C: CellObject<Key = K> + ?Sized>(cell: &C) -> Self {
        KeyInput::Cell(cell.elements().clone())
    }

    #[inline]
    pub fn is_atomic(&self) -> bool {
        matches!(self, KeyInput::Atomic(_))
    }

    /// Normalize for indexing. Empty collections and empty cells are
    /// rejected; cells are non-empty by construction.
    pub fn normalize(self) -> Result<K, ViewError> {
        let key = match self {
            KeyInput::Atomic(label) => return Ok(K::singleton(label)),
            KeyInput::Collection(labels) => K::from_labels(labels),
            KeyInput::Cell(key) => key,
        };
        if key.cardinality() == 0 {
            return Err(ViewError::InvalidKeyShape(
                "a cell must contain at least one label".to_string(),
            ));
        }
        Ok(key)
    }

    /// Normalize for a query: an empty key has no stored cell, so it is
    /// reported as absent rather than as an error.
    pub fn normalize_query(self) -> Option<K> {
        self.normalize().ok()
    }
}

impl<L, K> KeyInput<L, K>
where
    L: LabelLike + DeserializeOwned,
    K: CanonicalKey<L>,
{
    /// Decode a dynamically shaped value: arrays are collections, anything
    /// else must decode as a single label.
    pub fn from_json(value: &Value) -> Result<Self, ViewError> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(label_from_json)
                .collect::<Result<Vec<L>, _>>()
                .map(KeyInput::Collection),
            other => label_from_json(other).map(KeyInput::Atomic),
        }
    }
}

fn label_from_json<L: DeserializeOwned>(value: &Value) -> Result<L, ViewError> {
    L::deserialize(value)
        .map_err(|e| ViewError::InvalidKeyShape(format!("`{value}` is not a label: {e}")))
}

impl<L, K> From<Vec<L>> for KeyInput<L, K> {
    fn from(labels: Vec<L>) -> Self {
        KeyInput::Collection(labels)
    }
}

impl<L, K, const N: usize> From<[L; N]> for KeyInput<L, K> {
    fn from(labels: [L; N]) -> Self {
        KeyInput::Collection(labels.into())
    }
}

impl<L: Clone, K> From<&[L]> for KeyInput<L, K> {
    fn from(labels: &[L]) -> Self {
        KeyInput::Collection(labels.to_vec())
    }
}

impl<L> From<SetKey<L>> for KeyInput<L, SetKey<L>> {
    fn from(key: SetKey<L>) -> Self {
        KeyInput::Cell(key)
    }
}

impl<L> From<SeqKey<L>> for KeyInput<L, SeqKey<L>> {
    fn from(key: SeqKey<L>) -> Self {
        KeyInput::Cell(key)
    }
}

/// The `(elements, multiplicity key)` shape addressing one colored hyperedge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiKeyInput<L> {
    pub elements: KeyInput<L, SetKey<L>>,
    pub key: MultiKey,
}

impl<L: LabelLike> MultiKeyInput<L> {
    pub fn new(elements: impl Into<KeyInput<L, SetKey<L>>>, key: MultiKey) -> Self {
        Self {
            elements: elements.into(),
            key,
        }
    }
}

impl<L, I> From<(I, MultiKey)> for MultiKeyInput<L>
where
    L: LabelLike,
    I: Into<KeyInput<L, SetKey<L>>>,
{
    fn from((elements, key): (I, MultiKey)) -> Self {
        Self::new(elements, key)
    }
}

impl<L: LabelLike + DeserializeOwned> MultiKeyInput<L> {
    /// Decode `[[labels...], key]`. The first component must be a
    /// collection and the second a non-negative integer.
    pub fn from_json(value: &Value) -> Result<Self, ViewError> {
        let malformed = || {
            ViewError::InvalidKeyShape(format!(
                "`{value}` must be of the form [elements of hyperedge, key]"
            ))
        };
        let Value::Array(pair) = value else {
            return Err(malformed());
        };
        let [elements @ Value::Array(_), key] = pair.as_slice() else {
            return Err(malformed());
        };
        let key = key
            .as_u64()
            .and_then(|k| MultiKey::try_from(k).ok())
            .ok_or_else(malformed)?;
        Ok(Self {
            elements: KeyInput::from_json(elements)?,
            key,
        })
    }
}

//! `ColoredHyperEdgeView`: hyperedges of a colored hypergraph.
//!
//! Several hyperedges may span the same label set at the same rank; they
//! are told apart by a multiplicity key chosen by the complex. A single
//! record is therefore addressed by `(elements, key)`, while a bare set of
//! elements addresses all of them.
//!
//! Rank 0 holds the nodes. They can be looked up like any other entry but
//! are neither iterated nor counted by [`len`](ColoredHyperEdgeView::len).

use std::fmt;

use crate::topology::bounds::LabelLike;
use crate::topology::input::{KeyInput, MultiKeyInput};
use crate::topology::key::{CanonicalKey, SetKey};
use crate::topology::rank::{MultiKey, Rank, Relation};
use crate::topology::registry::{ColoredRegistry, Multi};
use crate::view_error::ViewError;
use crate::views::expect_found;
use crate::views::render::{LabelTuple, key_string, write_view};

/// View over the hyperedges of a colored hypergraph.
#[derive(Clone, Debug)]
pub struct ColoredHyperEdgeView<'a, L: LabelLike, A> {
    registry: &'a ColoredRegistry<L, A>,
    name: String,
}

impl<'a, L: LabelLike, A> ColoredHyperEdgeView<'a, L, A> {
    pub fn new(registry: &'a ColoredRegistry<L, A>) -> Self {
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

    fn records(&self, input: KeyInput<L, SetKey<L>>) -> Result<(SetKey<L>, &'a Multi<A>), ViewError> {
        let registry: &'a ColoredRegistry<L, A> = self.registry;
        let (rank, key) = expect_found::<L, _>(registry.resolve(input), "hyperedge")?;
        let records = registry.get_at(rank, &key).ok_or_else(|| {
            ViewError::NotFound(format!("hyperedge {} has no records", key_string(key.labels())))
        })?;
        Ok((key, records))
    }

    /// The record addressed by `(elements, multiplicity key)`.
    ///
    /// # Errors
    /// [`ViewError::NotFound`] if the elements are not stored or carry no
    /// record under that key.
    pub fn get(&self, input: impl Into<MultiKeyInput<L>>) -> Result<&'a A, ViewError> {
        let MultiKeyInput { elements, key } = input.into();
        let (set, records) = self.records(elements)?;
        records.get(&key).ok_or_else(|| {
            ViewError::NotFound(format!(
                "hyperedge {} has no record with key {key}",
                key_string(set.labels())
            ))
        })
    }

    /// Every record sharing these elements, ascending by multiplicity key.
    pub fn get_all(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<Vec<&'a A>, ViewError> {
        let (_, records) = self.records(input.into())?;
        Ok(records.values().collect())
    }

    /// The only record sharing these elements.
    ///
    /// # Errors
    /// [`ViewError::Ambiguous`] if several records share them.
    pub fn get_unique(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<&'a A, ViewError> {
        let (set, records) = self.records(input.into())?;
        let mut values = records.values();
        match (values.next(), values.next()) {
            (Some(record), None) => Ok(record),
            (None, _) => Err(ViewError::NotFound(format!(
                "hyperedge {} has no records",
                key_string(set.labels())
            ))),
            (Some(_), Some(_)) => Err(ViewError::Ambiguous {
                key: key_string(set.labels()),
                count: records.len(),
            }),
        }
    }

    /// Rank holding these elements. A bare label resolves against rank 0 only.
    pub fn rank_of(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> Result<Rank, ViewError> {
        expect_found::<L, _>(self.registry.resolve(input.into()), "hyperedge").map(|(rank, _)| rank)
    }

    /// Whether these elements are stored.
    ///
    /// Labels and label collections carry no multiplicity key, so they ask
    /// for key 0, as [`contains_keyed`](Self::contains_keyed) with `(elements, 0)`.
    /// A cell object matches whatever key its elements are stored under.
    pub fn contains(&self, input: impl Into<KeyInput<L, SetKey<L>>>) -> bool {
        match input.into() {
            cell @ KeyInput::Cell(_) => self.registry.resolve(cell).is_found(),
            elements => self.contains_keyed(MultiKeyInput { elements, key: 0 }),
        }
    }

    /// Whether the exact `(elements, multiplicity key)` record exists.
    pub fn contains_keyed(&self, input: impl Into<MultiKeyInput<L>>) -> bool {
        let MultiKeyInput { elements, key } = input.into();
        self.records(elements)
            .is_ok_and(|(_, records)| records.contains_key(&key))
    }

    /// `(elements, key)` pairs whose rank satisfies `relation`, sorted by
    /// elements and then by key.
    pub fn skeleton(&self, rank: Rank, relation: Relation) -> Vec<(SetKey<L>, MultiKey)> {
        self.registry.skeleton_with(rank, relation, |set, records| {
            records.keys().map(move |&m| (set.clone(), m))
        })
    }

    /// Like [`skeleton`](Self::skeleton) without the keys: each label set
    /// appears once per record it holds.
    pub fn skeleton_keys(&self, rank: Rank, relation: Relation) -> Vec<SetKey<L>> {
        self.registry.skeleton_with(rank, relation, |set, records| {
            std::iter::repeat_n(set.clone(), records.len())
        })
    }

    /// Record count per rank (every multiplicity counted), from rank 0.
    pub fn shape(&self) -> Vec<usize> {
        self.registry.shape_by(Multi::len)
    }

    /// Number of hyperedge records, nodes (rank 0) excluded.
    pub fn len(&self) -> usize {
        self.shape().iter().skip(1).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ranks(&self) -> Vec<Rank> {
        self.registry.ranks()
    }

    pub fn max_rank(&self) -> Option<Rank> {
        self.registry.max_rank()
    }

    /// Every `(elements, key)` pair above rank 0: ascending rank, then
    /// elements, then key.
    pub fn iter(&self) -> impl Iterator<Item = (&'a SetKey<L>, MultiKey)> {
        let registry: &'a ColoredRegistry<L, A> = self.registry;
        registry
            .iter()
            .filter(|(rank, _, _)| *rank > 0)
            .flat_map(|(_, set, records)| records.keys().map(move |&m| (set, m)))
    }
}

impl<L: LabelLike, A> fmt::Display for ColoredHyperEdgeView<'_, L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(
            f,
            "ColoredHyperEdgeView",
            self.iter().map(|(set, m)| (LabelTuple(set.labels()), m)),
        )
    }
}

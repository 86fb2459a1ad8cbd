//! `CellView`: two-dimensional cells of a cell complex.
//!
//! A cell is keyed by its boundary, an ordered sequence of labels. Several
//! cells may share one boundary, so each key holds a multiplicity map of
//! records. Exact lookups compare sequences as given; containment answers
//! up to homotopy, i.e. a query matches a stored boundary when it is a
//! rotation of that boundary or of its reversal.

use std::fmt;

use crate::topology::bounds::LabelLike;
use crate::topology::input::KeyInput;
use crate::topology::key::{CanonicalKey, RankedKey, SeqKey};
use crate::topology::rank::{Assigned, MultiKey};
use crate::topology::registry::{Multi, RankedRegistry};
use crate::view_error::ViewError;
use crate::views::render::{LabelTuple, key_string, write_view};

/// Cells keyed by boundary sequence, each holding a multiplicity map.
pub type CellRegistry<L, A> = RankedRegistry<SeqKey<L>, Multi<A>, Assigned>;

#[derive(Clone, Debug)]
pub struct CellView<'a, L: LabelLike, A> {
    registry: &'a CellRegistry<L, A>,
    name: String,
}

impl<'a, L: LabelLike, A> CellView<'a, L, A> {
    pub fn new(registry: &'a CellRegistry<L, A>) -> Self {
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

    /// A boundary is a sequence; a bare label names no cell.
    fn boundary(input: KeyInput<L, SeqKey<L>>) -> Result<SeqKey<L>, ViewError> {
        if input.is_atomic() {
            return Err(ViewError::InvalidKeyShape(
                "input must be a sequence of labels or a cell".to_string(),
            ));
        }
        input.normalize()
    }

    fn records(&self, input: KeyInput<L, SeqKey<L>>) -> Result<(SeqKey<L>, &'a Multi<A>), ViewError> {
        let key = Self::boundary(input)?;
        let registry: &'a CellRegistry<L, A> = self.registry;
        match registry.get(&key) {
            Some(records) => Ok((key, records)),
            None => Err(ViewError::NotFound(format!(
                "cell {} is not in the cell dictionary",
                key_string(key.labels())
            ))),
        }
    }

    /// Every record stored under this exact boundary, in multiplicity order.
    ///
    /// # Errors
    /// [`ViewError::InvalidKeyShape`] for a bare label or an empty sequence,
    /// [`ViewError::NotFound`] if no cell has this boundary.
    pub fn get(&self, input: impl Into<KeyInput<L, SeqKey<L>>>) -> Result<Vec<&'a A>, ViewError> {
        let (_, records) = self.records(input.into())?;
        Ok(records.values().collect())
    }

    /// The only record stored under this boundary.
    ///
    /// # Errors
    /// [`ViewError::Ambiguous`] if several cells share it.
    pub fn get_unique(&self, input: impl Into<KeyInput<L, SeqKey<L>>>) -> Result<&'a A, ViewError> {
        let (key, records) = self.records(input.into())?;
        if records.len() > 1 {
            return Err(ViewError::Ambiguous {
                key: key_string(key.labels()),
                count: records.len(),
            });
        }
        records.values().next().ok_or_else(|| {
            ViewError::NotFound(format!("cell {} has no records", key_string(key.labels())))
        })
    }

    /// Whether some stored cell has this boundary up to rotation and
    /// reversal.
    ///
    /// # Errors
    /// [`ViewError::InvalidKeyShape`] for a bare label.
    pub fn contains(&self, input: impl Into<KeyInput<L, SeqKey<L>>>) -> Result<bool, ViewError> {
        let input = input.into();
        if input.is_atomic() {
            return Self::boundary(input).map(|_| false);
        }
        let Some(query) = input.normalize_query() else {
            return Ok(false);
        };
        Ok(self
            .registry
            .iter()
            .any(|(_, stored, _)| {
                stored.cardinality() == query.cardinality() && query.is_homotopic_to(stored)
            }))
    }

    /// Number of cells, every multiplicity counted.
    pub fn len(&self) -> usize {
        self.registry.iter().map(|(_, _, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every `(boundary, multiplicity key)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&'a SeqKey<L>, MultiKey)> {
        let registry: &'a CellRegistry<L, A> = self.registry;
        registry
            .iter()
            .flat_map(|(_, key, records)| records.keys().map(move |&m| (key, m)))
    }
}

impl<L: LabelLike, A> fmt::Display for CellView<'_, L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(
            f,
            "CellView",
            self.iter().map(|(key, _)| LabelTuple(key.labels())),
        )
    }
}

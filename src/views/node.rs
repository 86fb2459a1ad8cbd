//! `NodeView`: the rank-0 slice of any complex.
//!
//! Nodes are the size-1 cells. A node view reads rank 0 of whichever
//! registry its complex owns. Over a colored registry the stored value sits
//! one level deeper, inside a multiplicity map; nodes never carry more than
//! one record, so the view always reads multiplicity key 0.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use itertools::Either;

use crate::topology::bounds::LabelLike;
use crate::topology::input::KeyInput;
use crate::topology::key::CanonicalKey;
use crate::topology::rank::{Assigned, RankStrategy};
use crate::topology::registry::{Multi, RankedRegistry};
use crate::view_error::ViewError;
use crate::views::CellKind;
use crate::views::render::{LabelTuple, key_string, write_view};

/// Construction parameters for a [`NodeView`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeViewConfig {
    /// Display name.
    pub name: String,
    /// Kind of cell the owning complex is made of. Required.
    pub cell_kind: Option<CellKind>,
}

impl NodeViewConfig {
    pub fn new(cell_kind: CellKind) -> Self {
        Self {
            name: String::new(),
            cell_kind: Some(cell_kind),
        }
    }
}

#[derive(Debug)]
enum NodeSource<'a, K, A> {
    Plain(Option<&'a BTreeMap<K, A>>),
    Colored(Option<&'a BTreeMap<K, Multi<A>>>),
}

impl<K, A> Clone for NodeSource<'_, K, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, A> Copy for NodeSource<'_, K, A> {}

/// View over the nodes (rank 0) of a complex.
#[derive(Debug)]
pub struct NodeView<'a, L: LabelLike, K: CanonicalKey<L>, A> {
    source: NodeSource<'a, K, A>,
    name: String,
    cell_kind: CellKind,
    _labels: PhantomData<L>,
}

impl<L: LabelLike, K: CanonicalKey<L>, A> Clone for NodeView<'_, L, K, A> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            name: self.name.clone(),
            cell_kind: self.cell_kind,
            _labels: PhantomData,
        }
    }
}

fn required_kind(config: &NodeViewConfig) -> Result<CellKind, ViewError> {
    config
        .cell_kind
        .ok_or_else(|| ViewError::InvalidArgument("cell_kind cannot be None".to_string()))
}

impl<'a, L: LabelLike, K: CanonicalKey<L>, A> NodeView<'a, L, K, A> {
    /// Nodes of a registry holding one record per key.
    ///
    /// # Errors
    /// [`ViewError::InvalidArgument`] if `config.cell_kind` is `None`.
    pub fn with_config<S: RankStrategy>(
        registry: &'a RankedRegistry<K, A, S>,
        config: NodeViewConfig,
    ) -> Result<Self, ViewError> {
        let cell_kind = required_kind(&config)?;
        Ok(Self {
            source: NodeSource::Plain(registry.slot(0)),
            name: config.name,
            cell_kind,
            _labels: PhantomData,
        })
    }

    /// Nodes of a colored registry, read at multiplicity key 0.
    pub fn colored_with_config(
        registry: &'a RankedRegistry<K, Multi<A>, Assigned>,
        config: NodeViewConfig,
    ) -> Result<Self, ViewError> {
        let cell_kind = required_kind(&config)?;
        Ok(Self {
            source: NodeSource::Colored(registry.slot(0)),
            name: config.name,
            cell_kind,
            _labels: PhantomData,
        })
    }

    pub fn new<S: RankStrategy>(registry: &'a RankedRegistry<K, A, S>, cell_kind: CellKind) -> Self {
        Self {
            source: NodeSource::Plain(registry.slot(0)),
            name: String::new(),
            cell_kind,
            _labels: PhantomData,
        }
    }

    pub fn colored(registry: &'a RankedRegistry<K, Multi<A>, Assigned>, cell_kind: CellKind) -> Self {
        Self {
            source: NodeSource::Colored(registry.slot(0)),
            name: String::new(),
            cell_kind,
            _labels: PhantomData,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell_kind(&self) -> CellKind {
        self.cell_kind
    }

    pub fn is_colored(&self) -> bool {
        matches!(self.source, NodeSource::Colored(_))
    }

    fn record(&self, key: &K) -> Option<&'a A> {
        match self.source {
            NodeSource::Plain(slot) => slot?.get(key),
            NodeSource::Colored(slot) => slot?.get(key)?.get(&0),
        }
    }

    /// Attributes of a node.
    ///
    /// # Errors
    /// [`ViewError::NotFound`] if the input names no stored node.
    pub fn get(&self, input: impl Into<KeyInput<L, K>>) -> Result<&'a A, ViewError> {
        match input.into().normalize_query() {
            Some(key) if key.cardinality() == 1 => self.record(&key).ok_or_else(|| {
                ViewError::NotFound(format!(
                    "input {} is not in the node set of the complex",
                    key_string(key.labels())
                ))
            }),
            Some(key) => Err(ViewError::NotFound(format!(
                "input {} names {} labels, not a node",
                key_string(key.labels()),
                key.cardinality()
            ))),
            None => Err(ViewError::NotFound(
                "an empty input never names a node".to_string(),
            )),
        }
    }

    /// Whether the input names a stored node. A bare label, a one-label
    /// collection or a node cell are accepted; anything else is `false`.
    pub fn contains(&self, input: impl Into<KeyInput<L, K>>) -> bool {
        let Some(key) = input.into().normalize_query().filter(|key| key.cardinality() == 1) else {
            return false;
        };
        match self.source {
            NodeSource::Plain(slot) => slot.is_some_and(|s| s.contains_key(&key)),
            NodeSource::Colored(slot) => slot.is_some_and(|s| s.contains_key(&key)),
        }
    }

    pub fn len(&self) -> usize {
        match self.source {
            NodeSource::Plain(slot) => slot.map_or(0, BTreeMap::len),
            NodeSource::Colored(slot) => slot.map_or(0, BTreeMap::len),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &'a K> {
        match self.source {
            NodeSource::Plain(slot) => Either::Left(slot.into_iter().flat_map(BTreeMap::keys)),
            NodeSource::Colored(slot) => Either::Right(slot.into_iter().flat_map(BTreeMap::keys)),
        }
    }
}

impl<L: LabelLike, K: CanonicalKey<L>, A> fmt::Display for NodeView<'_, L, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(f, "NodeView", self.iter().map(|key| LabelTuple(key.labels())))
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
//! # topo-views
//!
//! topo-views is the indexing layer of a combinatorial topology library. It
//! provides rank-partitioned registries for the cells of hypergraphs,
//! colored hypergraphs, simplicial complexes, path complexes and cell
//! complexes, and read-only views answering membership, retrieval, rank and
//! skeleton queries over them.
//!
//! ## Features
//! - One canonical identity per cell, whatever shape the caller names it
//!   with: a bare label, a collection of labels or a cell object
//! - Ranks either derived from cardinality (simplices, paths) or assigned by
//!   the complex and resolved through a lazily built index (hyperedges)
//! - Multiplicity: several colored hyperedges or cells sharing one label set
//! - Skeleton queries with deterministic, sorted output
//! - A JSON boundary for dynamically shaped input
//!
//! ## Ownership
//!
//! A complex owns its registries and is the only writer; the `insert*` hooks
//! refuse anything that would break rank partitioning. Views borrow a
//! registry and never mutate it.
//!
//! ## Determinism
//!
//! Per-rank storage is ordered, so iteration, skeletons and diagnostic
//! rendering are reproducible across runs and platforms.
//!
//! ## Usage
//! ```
//! use topo_views::prelude::*;
//!
//! let mut reg = HyperEdgeRegistry::<u32, &str>::new();
//! reg.insert(SetKey::new([1]), 0, "node").unwrap();
//! reg.insert(SetKey::new([1, 2]), 3, "edge").unwrap();
//!
//! let view = HyperEdgeView::new(&reg);
//! assert_eq!(view.rank_of([2, 1]).unwrap(), 3);
//! assert_eq!(view.skeleton(1, Relation::UpEq), vec![SetKey::new([1, 2])]);
//! ```

pub mod debug_invariants;
pub mod topology;
pub mod view_error;
pub mod views;

pub use debug_invariants::DebugInvariants;
pub use view_error::ViewError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::attributes::{AttrMap, AttrValue, attr_map};
    pub use crate::topology::bounds::LabelLike;
    pub use crate::topology::cache::InvalidateCache;
    pub use crate::topology::input::{KeyInput, MultiKeyInput};
    pub use crate::topology::key::{CanonicalKey, CellObject, RankedKey, SeqKey, SetKey};
    pub use crate::topology::rank::{Assigned, Derived, MultiKey, Rank, RankStrategy, Relation};
    pub use crate::topology::registry::{
        ColoredRegistry, HyperEdgeRegistry, Multi, PathRegistry, RankedRegistry, Resolved,
        SimplexRegistry,
    };
    pub use crate::view_error::ViewError;
    pub use crate::views::{
        CellKind, CellRegistry, CellView, ColoredHyperEdgeView, HyperEdgeView, NodeView,
        NodeViewConfig, PathView, SimplexView,
    };
}

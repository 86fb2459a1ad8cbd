//! Top-level module for the indexing machinery behind the views.
//!
//! This module provides the leaf types every view is built from:
//! - canonical cell keys and the boundary normalizer that produces them
//! - ranks, rank strategies and rank relations
//! - the rank-partitioned registry owned by a complex, with its resolver
//! - skeleton queries over that registry
//!
//! Most users construct a registry through the owning complex and read it
//! through one of the facades in [`crate::views`].

pub mod attributes;
pub mod bounds;
pub mod cache;
pub mod input;
pub mod key;
pub mod rank;
pub mod registry;
pub mod skeleton;

pub use cache::InvalidateCache;
pub use input::{KeyInput, MultiKeyInput};
pub use key::{CanonicalKey, CellObject, RankedKey, SeqKey, SetKey};
pub use rank::{Assigned, Derived, MultiKey, Rank, RankStrategy, Relation};
pub use registry::{
    ColoredRegistry, HyperEdgeRegistry, Multi, PathRegistry, RankedRegistry, Resolved,
    SimplexRegistry,
};

#[cfg(test)]
mod tests;

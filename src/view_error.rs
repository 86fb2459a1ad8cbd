//! ViewError: Unified error type for topo-views public APIs
//!
//! Every query in this crate is a pure read over a registry, so failures are
//! deterministic functions of the input and never leave partial state behind.

use thiserror::Error;

use crate::topology::rank::Rank;

/// Unified error type for view and registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The input could not be normalized into a canonical key.
    #[error("Invalid key shape: {0}")]
    InvalidKeyShape(String),
    /// A lookup that must produce a value found nothing.
    #[error("Not found: {0}")]
    NotFound(String),
    /// An argument outside the accepted vocabulary (relation, cell kind, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// `get_unique` found several records sharing one key.
    #[error("Ambiguous lookup: key {key} holds {count} records")]
    Ambiguous { key: String, count: usize },
    /// A key was offered at a rank other than the one it already occupies.
    #[error("Rank conflict: key {key} already occupies rank {existing}, refused at rank {requested}")]
    RankConflict {
        key: String,
        existing: Rank,
        requested: Rank,
    },
}

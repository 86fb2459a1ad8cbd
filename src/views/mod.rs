//! Type-specific facades over rank-partitioned registries.
//!
//! Every view borrows the registry owned by its complex and exposes the same
//! read contract: `get`, `contains`, `skeleton`, `shape`, `len`, iteration
//! and a diagnostic `Display`. Each facade fixes the identity rule (set or
//! sequence key), how ranks are found (searched or derived) and whether
//! several records may share one key.
//!
//! | view | key | rank | multiplicity |
//! |------|-----|------|--------------|
//! | [`HyperEdgeView`] | set | assigned | no |
//! | [`ColoredHyperEdgeView`] | set | assigned | yes |
//! | [`SimplexView`] | set | derived | no |
//! | [`PathView`] | sequence | derived | no |
//! | [`NodeView`] | set or sequence | 0 | optional |
//! | [`CellView`] | sequence (up to rotation) | assigned | yes |

pub mod cell;
pub mod colored;
pub mod hyperedge;
pub mod node;
pub mod path;
pub(crate) mod render;
pub mod simplex;

pub use cell::{CellRegistry, CellView};
pub use colored::ColoredHyperEdgeView;
pub use hyperedge::HyperEdgeView;
pub use node::{NodeView, NodeViewConfig};
pub use path::PathView;
pub use simplex::SimplexView;

use std::fmt;

use crate::topology::bounds::LabelLike;
use crate::topology::key::CanonicalKey;
use crate::topology::rank::Rank;
use crate::topology::registry::Resolved;
use crate::view_error::ViewError;
use crate::views::render::key_string;

/// Turn a resolution into the `(rank, key)` an unconditional lookup needs.
pub(crate) fn expect_found<L, K>(resolved: Resolved<K>, what: &str) -> Result<(Rank, K), ViewError>
where
    L: LabelLike,
    K: CanonicalKey<L>,
{
    match resolved {
        Resolved::Found(rank, key) => Ok((rank, key)),
        Resolved::Missing(key) => Err(ViewError::NotFound(format!(
            "{what} {} is not in the complex",
            key_string(key.labels())
        ))),
        Resolved::Empty => Err(ViewError::NotFound(format!(
            "an empty {what} is never in the complex"
        ))),
    }
}

/// The kind of cell a complex is made of.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CellKind {
    HyperEdge,
    ColoredHyperEdge,
    Simplex,
    Path,
    Cell,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellKind::HyperEdge => "hyperedge",
            CellKind::ColoredHyperEdge => "colored hyperedge",
            CellKind::Simplex => "simplex",
            CellKind::Path => "path",
            CellKind::Cell => "cell",
        };
        f.write_str(s)
    }
}

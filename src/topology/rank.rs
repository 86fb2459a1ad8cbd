//! Ranks, rank-derivation strategies and rank relations.

use std::fmt;
use std::str::FromStr;

use crate::view_error::ViewError;

/// Dimension/order of a cell. Rank 0 is reserved for atomic nodes.
pub type Rank = usize;

/// Integer distinguishing coexisting cells that share a label set and rank.
pub type MultiKey = u32;

/// How a registry learns the rank of a key.
pub trait RankStrategy {
    /// Rank implied by a key of cardinality `len`, if the strategy derives it.
    fn derive(len: usize) -> Option<Rank>;
}

/// Rank is chosen by the inserting complex and searched for on lookup
/// (hyperedges, colored hyperedges).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Assigned;

impl RankStrategy for Assigned {
    #[inline]
    fn derive(_len: usize) -> Option<Rank> {
        None
    }
}

/// Rank is `len - 1` (simplices, paths).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Derived;

impl RankStrategy for Derived {
    #[inline]
    fn derive(len: usize) -> Option<Rank> {
        len.checked_sub(1)
    }
}

/// Relational predicate selecting ranks relative to a target rank.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Relation {
    /// Exactly the target rank.
    #[default]
    Equal,
    /// Strictly above.
    Up,
    /// Strictly below.
    Down,
    /// At or above.
    UpEq,
    /// At or below.
    DownEq,
}

impl Relation {
    /// Whether `candidate` satisfies the relation against `target`.
    #[inline]
    pub fn admits(self, candidate: Rank, target: Rank) -> bool {
        match self {
            Relation::Equal => candidate == target,
            Relation::Up => candidate > target,
            Relation::Down => candidate < target,
            Relation::UpEq => candidate >= target,
            Relation::DownEq => candidate <= target,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Up => "up",
            Relation::Down => "down",
            Relation::UpEq => "upeq",
            Relation::DownEq => "downeq",
        }
    }
}

impl FromStr for Relation {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Relation::Equal),
            "up" | "upper" => Ok(Relation::Up),
            "down" | "lower" => Ok(Relation::Down),
            "upeq" | "uppereq" => Ok(Relation::UpEq),
            "downeq" | "lowereq" => Ok(Relation::DownEq),
            other => Err(ViewError::InvalidArgument(format!(
                "relation must be one of 'equal', 'up', 'upper', 'down', 'lower', \
                 'upeq', 'uppereq', 'downeq', 'lowereq'; got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

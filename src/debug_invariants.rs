//! Invariant checking for registries populated by an external mutator.
//!
//! The query layer never repairs a malformed registry; it only reports the
//! first violation it sees. Each insert checks its own placement in debug
//! builds and whenever `strict-invariants` or `check-invariants` is enabled;
//! the full scan runs on request.

use crate::view_error::ViewError;

/// Structures whose contents must satisfy rank-partitioning invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), ViewError>;

    /// Panic on the first violation.
    fn debug_assert_invariants(&self) {
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] registry: {e}");
        }
    }
}

/// Run a fallible invariant check and panic on error when checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

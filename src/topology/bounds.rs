//! Common bound aliases used across key and view code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They only reduce duplication
//! in `where` clauses.

/// Canonical bound set for vertex labels.
///
/// - `Clone` since labels are copied into canonical keys (strings are fine)
/// - `Eq + Hash` for the key→rank index
/// - `Ord` for canonical set-keys and deterministic skeleton ordering
/// - `Debug` for diagnostic rendering and error messages
pub trait LabelLike: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> LabelLike for T where T: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

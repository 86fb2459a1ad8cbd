//! Cache invalidation for structures that derive lookup tables lazily.

/// Anything holding a lazily built index over its own contents (such as the
/// registry's key→rank table) should implement this.
pub trait InvalidateCache {
    /// Drop every derived table so the next query rebuilds it. Needed only
    /// after writes that bypass the maintaining hooks.
    fn invalidate_cache(&mut self);
}

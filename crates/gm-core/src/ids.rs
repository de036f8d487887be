//! Scheduler-issued target identity.
//!
//! A `TargetId` is a monotonic token handed out by the scheduler when a
//! target is registered.  It is never recycled — not even across a context
//! reset — so a stale token held by the host can never silently alias a
//! later registration.  Ids are `Copy + Ord + Hash` for use as map keys
//! and sorted iteration.

use std::fmt;

/// Identity token for a registered movement target.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(pub u64);

impl TargetId {
    /// Sentinel meaning "no valid target" — equivalent to `u64::MAX`.
    pub const INVALID: TargetId = TargetId(u64::MAX);
}

impl Default for TargetId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetId({})", self.0)
    }
}

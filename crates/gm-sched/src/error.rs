//! Error types for the scheduling crate.

use gm_core::TargetId;
use thiserror::Error;

/// Errors surfaced by [`MovementScheduler`](crate::MovementScheduler).
///
/// Most scheduler entry points deliberately return `bool` ("did anything
/// happen") rather than an error — asking to pause a target that has no
/// motions is a no-op, not a fault.  Only genuinely invalid handles are
/// errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedError {
    /// The id was never issued by this scheduler, or its target has been
    /// unregistered.
    #[error("unknown target {0}")]
    UnknownTarget(TargetId),
}

pub type SchedResult<T> = Result<T, SchedError>;

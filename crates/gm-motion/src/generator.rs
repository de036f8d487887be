//! The motion generator contract.

use gm_core::{Secs, Vec3};

use crate::Motion;

/// Result of advancing a generator by one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// Incremental displacement to apply for this tick.
    Displace(Vec3),
    /// The total duration was fully consumed before this call.
    Done,
}

impl Step {
    /// The displacement carried by this step (`ZERO` for `Done`).
    #[inline]
    pub fn displacement(self) -> Vec3 {
        match self {
            Step::Displace(v) => v,
            Step::Done        => Vec3::ZERO,
        }
    }

    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Step::Done)
    }
}

/// A time-driven producer of displacement vectors for one motion.
///
/// Implementations sample **absolute elapsed time**: each `advance`
/// returns `position(elapsed + dt) − position(elapsed)`, so the sum of
/// all steps over a generator's lifetime equals its designed net
/// displacement no matter how the host slices time.
///
/// The call that crosses the total duration clamps `dt` to the remaining
/// time and still returns the final [`Step::Displace`] chunk;
/// [`time_left`](MotionGenerator::time_left) is exactly `0.0` afterwards,
/// and every later call returns [`Step::Done`].
pub trait MotionGenerator {
    /// Advance internal time by `dt` and return this tick's displacement,
    /// or [`Step::Done`] once the duration was already consumed.
    ///
    /// Calling after `Done` is not an error: it keeps returning `Done`.
    fn advance(&mut self, dt: Secs) -> Step;

    /// Whether this motion runs concurrently with others (stacked) or
    /// must own its target alone until finished (exclusive).  Fixed at
    /// construction.
    fn is_stacked(&self) -> bool;

    /// Remaining time before `advance` starts returning [`Step::Done`].
    fn time_left(&self) -> Secs;

    /// Attempt to absorb `other` into this generator.
    ///
    /// Returns `true` when absorbed — the caller must then discard
    /// `other` without queueing it and without firing its `on_finish`;
    /// this generator is responsible for the combined displacement from
    /// then on.  The scheduler never offers a stacked motion to an
    /// exclusive one or vice versa.
    fn attempt_merge(&mut self, _other: &Motion) -> bool {
        false
    }

    /// Called exactly once when the motion is removed: `premature` is
    /// `false` on natural completion and `true` on forced removal.  Not
    /// called on a context reset, nor for a generator absorbed by a
    /// merge.
    fn on_finish(&mut self, _premature: bool) {}
}

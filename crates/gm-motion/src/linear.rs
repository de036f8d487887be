//! Straight-line movement with uniform velocity.

use gm_core::{Secs, Vec3};

use crate::{Motion, MotionError, MotionGenerator, MotionResult, Step};

/// How close (in seconds) an incoming linear movement's duration must be
/// to this one's remaining time for a merge to be accepted.  Within the
/// window the two motions complete at effectively the same instant, so a
/// single generator can carry both displacements.
pub const MERGE_WINDOW: Secs = 1e-3;

/// Moves a target by `total` over `duration` seconds at constant speed.
///
/// Sampling is fraction-based: each tick emits
/// `total · (fraction(elapsed + dt) − fraction(elapsed))`, which sums to
/// exactly `total` over the motion's lifetime for any tick sizes.
#[derive(Clone, Debug)]
pub struct LinearMovement {
    /// Net displacement produced over the full duration.
    pub total: Vec3,
    /// Total runtime in seconds.  Always positive.
    pub duration: Secs,
    /// Seconds consumed so far.  Saturates at `duration`.
    pub elapsed: Secs,
    stacked: bool,
}

impl LinearMovement {
    /// Movement producing the net displacement `total` over `duration`.
    pub fn new(total: Vec3, duration: Secs, stacked: bool) -> MotionResult<Self> {
        if duration <= 0.0 {
            return Err(MotionError::NonPositiveDuration(duration));
        }
        Ok(Self { total, duration, elapsed: 0.0, stacked })
    }

    /// Movement from `start` to `end` over `duration`.
    pub fn between(start: Vec3, end: Vec3, duration: Secs, stacked: bool) -> MotionResult<Self> {
        Self::new(end - start, duration, stacked)
    }

    /// Fraction of the duration consumed, in `[0.0, 1.0]`.
    #[inline]
    pub fn fraction(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }
}

impl MotionGenerator for LinearMovement {
    fn advance(&mut self, dt: Secs) -> Step {
        debug_assert!(dt >= 0.0, "negative dt");
        if self.elapsed >= self.duration {
            return Step::Done;
        }
        let f0 = self.fraction();
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let f1 = self.fraction();
        Step::Displace(self.total * (f1 - f0))
    }

    #[inline]
    fn is_stacked(&self) -> bool {
        self.stacked
    }

    #[inline]
    fn time_left(&self) -> Secs {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Absorbs a fresh linear movement whose duration matches this one's
    /// remaining time within [`MERGE_WINDOW`].
    ///
    /// The absorbed displacement is scaled up by the already-elapsed
    /// fraction so the remaining output equals both motions' remainders
    /// combined: `total += other.total / (1 − fraction)`.
    fn attempt_merge(&mut self, other: &Motion) -> bool {
        let Motion::Linear(other) = other else {
            return false;
        };
        let left = self.time_left();
        if other.elapsed > 0.0 || left < MERGE_WINDOW {
            return false;
        }
        if (other.duration - left).abs() > MERGE_WINDOW {
            return false;
        }
        self.total += other.total * (1.0 / (1.0 - self.fraction()));
        true
    }
}

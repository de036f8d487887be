//! Full-circle movement: a closed loop back to the start point.

use gm_core::{Secs, Vec3};

use crate::{ArcCore, MotionGenerator, MotionResult, Step};

/// Moves a target around a full circle whose diameter is the
/// `start` → `end` chord, passing through the reference point's side of
/// the chord at the quarter turn.  Net displacement over the complete
/// run is zero.
///
/// Merging and rotation-sense configuration are deliberately not
/// supported.
#[derive(Clone, Debug)]
pub struct FullCircleMovement {
    pub arc: ArcCore,
}

impl FullCircleMovement {
    /// Closed loop through `start` and `end`, completed in `duration`
    /// seconds.
    ///
    /// # Errors
    ///
    /// Same chord/reference validation as
    /// [`CircularArcMovement::new`](crate::CircularArcMovement::new).
    pub fn new(
        start:    Vec3,
        end:      Vec3,
        pivot:    Vec3,
        duration: Secs,
        stacked:  bool,
    ) -> MotionResult<Self> {
        Ok(Self {
            arc: ArcCore::full_circle(start, end, pivot, duration, stacked)?,
        })
    }
}

impl MotionGenerator for FullCircleMovement {
    fn advance(&mut self, dt: Secs) -> Step {
        self.arc.advance(dt)
    }

    fn is_stacked(&self) -> bool {
        self.arc.is_stacked()
    }

    fn time_left(&self) -> Secs {
        self.arc.time_left()
    }
}

//! Elliptical-arc movement.

use gm_core::{Secs, Vec3};

use crate::{ArcCore, MotionError, MotionGenerator, MotionResult, Step};

/// Moves a target along an elliptical arc from `start` to `end`.
///
/// Identical construction to [`CircularArcMovement`][crate::CircularArcMovement]
/// with one extra parameter: `flatten` scales the center's offset from
/// the chord midpoint.  The basis vectors are still solved from the
/// endpoint equation, so for `flatten ≠ 1` they end up with different
/// lengths — an ellipse passing through both endpoints exactly.
/// `flatten = 1` reproduces the circular arc.
#[derive(Clone, Debug)]
pub struct EllipticalArcMovement {
    pub arc: ArcCore,
}

impl EllipticalArcMovement {
    /// Elliptical arc through `start` and `end` with center offset
    /// scaled by `flatten > 0`, completed in `duration` seconds.
    ///
    /// # Errors
    ///
    /// [`MotionError::NonPositiveRatio`] for a non-finite or
    /// non-positive `flatten`, plus the chord/angle/duration validation
    /// shared with the circular arc.
    pub fn new(
        start:     Vec3,
        end:       Vec3,
        pivot:     Vec3,
        angle_deg: f32,
        flatten:   f32,
        duration:  Secs,
        stacked:   bool,
    ) -> MotionResult<Self> {
        if !flatten.is_finite() || flatten <= 0.0 {
            return Err(MotionError::NonPositiveRatio(flatten));
        }
        Ok(Self {
            arc: ArcCore::offset_arc(start, end, pivot, angle_deg, flatten, duration, stacked)?,
        })
    }
}

impl MotionGenerator for EllipticalArcMovement {
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

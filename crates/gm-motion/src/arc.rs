//! Circular-arc movement and the shared arc-sampling core.
//!
//! # Geometry
//!
//! An arc is constructed from a chord (`start` → `end`), a reference
//! point `pivot` picking one of the two half-planes, and the arc angle.
//! The circle center sits on the chord's perpendicular bisector, offset
//! from the midpoint toward the pivot's side by `half_chord / tan(α/2)`.
//! Two basis vectors are derived once:
//!
//! ```text
//! v1 = start − center
//! v2 = (end − center − v1·cos α) / sin α
//! position(θ) = center + v1·cos θ + v2·sin θ       θ(t) = t/duration · α
//! ```
//!
//! `v2` is solved from the endpoint equation rather than rotated from
//! `v1`, so `position(α)` lands on `end` exactly and summed tick
//! displacements conserve the designed net displacement.

use gm_core::{Secs, Vec3};

use crate::{MotionError, MotionGenerator, MotionResult, Step};

/// Smallest accepted arc angle, degrees (exclusive).  Below this the
/// center offset `half_chord / tan(α/2)` grows without bound.
pub const MIN_ARC_DEG: f32 = 10.0;
/// Largest accepted arc angle, degrees (inclusive).
pub const MAX_ARC_DEG: f32 = 180.0;
/// What an exact 180° request is snapped to — `tan(90°)` has no value, so
/// the semicircle case is resolved a hair short of it.  This is the only
/// silent adjustment any constructor performs.
pub const SNAP_ARC_DEG: f32 = 179.99;

// ── ArcCore ───────────────────────────────────────────────────────────────────

/// Validated basis + absolute-angle sampling state shared by the
/// circular, elliptical, and full-circle movements.
#[derive(Clone, Debug)]
pub struct ArcCore {
    /// Center of the sampled conic.
    pub center: Vec3,
    /// Basis vector from center to the start point.
    pub v1: Vec3,
    /// Basis vector a quarter turn into the sweep.
    pub v2: Vec3,
    /// Total angle swept over the full duration, radians.
    pub angle: f32,
    /// Total runtime in seconds.  Always positive.
    pub duration: Secs,
    /// Seconds consumed so far.  Saturates at `duration`.
    pub elapsed: Secs,
    stacked: bool,
}

impl ArcCore {
    /// Arc whose center is offset from the chord midpoint by
    /// `flatten · half_chord / tan(α/2)` toward the pivot's side.
    /// `flatten = 1` gives a circle; other values give an ellipse
    /// through both endpoints.
    pub fn offset_arc(
        start:     Vec3,
        end:       Vec3,
        pivot:     Vec3,
        angle_deg: f32,
        flatten:   f32,
        duration:  Secs,
        stacked:   bool,
    ) -> MotionResult<Self> {
        let angle = checked_angle(angle_deg)?;
        let side = pivot_side(start, end, pivot, duration)?;

        let mid        = Vec3::midpoint(start, end);
        let half_chord = start.distance(end) * 0.5;
        let center     = mid + side * (flatten * half_chord / (angle * 0.5).tan());

        let v1 = start - center;
        let v2 = (end - center - v1 * angle.cos()) * (1.0 / angle.sin());

        Ok(Self { center, v1, v2, angle, duration, elapsed: 0.0, stacked })
    }

    /// Closed loop: center fixed at the chord midpoint, angle fixed at
    /// `2π`.  `v2` points at the pivot's side so the loop passes through
    /// the reference-side point at the quarter turn; net displacement
    /// over the full run is zero.
    pub fn full_circle(
        start:    Vec3,
        end:      Vec3,
        pivot:    Vec3,
        duration: Secs,
        stacked:  bool,
    ) -> MotionResult<Self> {
        pivot_side(start, end, pivot, duration)?;

        let center = Vec3::midpoint(start, end);
        let v1     = start - center;

        // Component of (pivot − center) orthogonal to v1, normalized.
        let toward = pivot - center;
        let perp   = toward - v1 * (toward.dot(v1) / v1.length_squared());
        let side   = perp.normalized();
        if side == Vec3::ZERO {
            return Err(MotionError::CollinearPivot);
        }
        let v2 = side * v1.length();

        Ok(Self {
            center,
            v1,
            v2,
            angle: std::f32::consts::TAU,
            duration,
            elapsed: 0.0,
            stacked,
        })
    }

    #[inline]
    fn theta(&self, t: Secs) -> f32 {
        (t / self.duration) * self.angle
    }

    /// Position on the arc at sweep angle `theta`.
    #[inline]
    pub fn sample(&self, theta: f32) -> Vec3 {
        self.center + self.v1 * theta.cos() + self.v2 * theta.sin()
    }

    pub fn advance(&mut self, dt: Secs) -> Step {
        debug_assert!(dt >= 0.0, "negative dt");
        if self.elapsed >= self.duration {
            return Step::Done;
        }
        let before = self.sample(self.theta(self.elapsed));
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let after = self.sample(self.theta(self.elapsed));
        Step::Displace(after - before)
    }

    #[inline]
    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    #[inline]
    pub fn time_left(&self) -> Secs {
        (self.duration - self.elapsed).max(0.0)
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

/// Range-check an arc angle in degrees and convert to radians, snapping
/// the inclusive 180° endpoint to [`SNAP_ARC_DEG`].
fn checked_angle(angle_deg: f32) -> MotionResult<f32> {
    if !angle_deg.is_finite() || angle_deg <= MIN_ARC_DEG || angle_deg > MAX_ARC_DEG {
        return Err(MotionError::ArcAngleOutOfRange(angle_deg));
    }
    let deg = if angle_deg == MAX_ARC_DEG { SNAP_ARC_DEG } else { angle_deg };
    Ok(deg.to_radians())
}

/// Validate duration and chord geometry; return the unit vector from the
/// pivot's perpendicular foot on the chord line toward the pivot.
fn pivot_side(start: Vec3, end: Vec3, pivot: Vec3, duration: Secs) -> MotionResult<Vec3> {
    if duration <= 0.0 {
        return Err(MotionError::NonPositiveDuration(duration));
    }
    if start.approx_eq(end) {
        return Err(MotionError::DegenerateChord);
    }
    if Vec3::collinear(start, end, pivot) {
        return Err(MotionError::CollinearPivot);
    }

    let chord_dir = (end - start).normalized();
    let foot      = start + chord_dir * (pivot - start).dot(chord_dir);
    let side      = (pivot - foot).normalized();
    if side == Vec3::ZERO {
        return Err(MotionError::CollinearPivot);
    }
    Ok(side)
}

// ── CircularArcMovement ───────────────────────────────────────────────────────

/// Moves a target along a circular arc from `start` to `end`, bulging
/// away from the reference point's side of the chord.
#[derive(Clone, Debug)]
pub struct CircularArcMovement {
    pub arc: ArcCore,
}

impl CircularArcMovement {
    /// Arc through `start` and `end` subtending `angle_deg` ∈ (10°, 180°]
    /// at the center, completed in `duration` seconds.
    ///
    /// # Errors
    ///
    /// [`MotionError::DegenerateChord`] when `start ≈ end`,
    /// [`MotionError::CollinearPivot`] when the three points share a
    /// line, [`MotionError::ArcAngleOutOfRange`] and
    /// [`MotionError::NonPositiveDuration`] for bad scalars.
    pub fn new(
        start:     Vec3,
        end:       Vec3,
        pivot:     Vec3,
        angle_deg: f32,
        duration:  Secs,
        stacked:   bool,
    ) -> MotionResult<Self> {
        Ok(Self {
            arc: ArcCore::offset_arc(start, end, pivot, angle_deg, 1.0, duration, stacked)?,
        })
    }
}

impl MotionGenerator for CircularArcMovement {
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

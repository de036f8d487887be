//! The moved-object abstraction.
//!
//! The scheduler never positions a target absolutely — each tick it hands
//! the target one summed displacement, and where that lands is the
//! target's business.  Hosts bridge this trait to whatever actually moves
//! (an entity transform, a physics body, a UI element).

use gm_core::Vec3;

/// Something the scheduler can move.
pub trait MotionTarget {
    /// Apply one tick's worth of aggregate displacement.
    fn apply_displacement(&mut self, delta: Vec3);

    /// Current position, used for queries and demos.  Not read by the
    /// tick loop itself — movements sample their own clocks.
    fn position(&self) -> Vec3;
}

/// Minimal free point in space.  Handy for tests and headless hosts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointTarget {
    pub pos: Vec3,
}

impl PointTarget {
    #[inline]
    pub const fn at(pos: Vec3) -> Self {
        Self { pos }
    }
}

impl MotionTarget for PointTarget {
    #[inline]
    fn apply_displacement(&mut self, delta: Vec3) {
        self.pos += delta;
    }

    #[inline]
    fn position(&self) -> Vec3 {
        self.pos
    }
}

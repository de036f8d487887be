//! 3-component vector type and the geometric predicates used by movement
//! validation.
//!
//! `Vec3` uses `f32` throughout — displacements come from and go back to
//! host engines that work in single precision, and the generators sample
//! absolute time rather than integrating, so error never accumulates.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Absolute tolerance for the approximate-equality predicates below.
pub const EPSILON: f32 = 1e-5;

/// Scalar approximate equality, scaled so large magnitudes keep working.
#[inline]
fn nearly(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * (1.0 + b.abs())
}

/// A displacement or position in 3-space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for a (near-)zero input.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len <= EPSILON {
            return Vec3::ZERO;
        }
        self * (1.0 / len)
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    /// Point halfway between `a` and `b`.
    #[inline]
    pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
        (a + b) * 0.5
    }

    /// `true` when the two points are within `margin` of each other.
    #[inline]
    pub fn within_margin(self, other: Vec3, margin: f32) -> bool {
        (self - other).length_squared() <= margin * margin
    }

    /// Approximate equality at [`EPSILON`] resolution.
    #[inline]
    pub fn approx_eq(self, other: Vec3) -> bool {
        self.within_margin(other, EPSILON)
    }

    /// Collinearity test for three points: the longest pairwise distance
    /// equals the sum of the other two exactly when the points lie on one
    /// line.  Coincident points count as collinear.
    pub fn collinear(a: Vec3, b: Vec3, c: Vec3) -> bool {
        let ab = a.distance(b);
        let bc = b.distance(c);
        let ac = a.distance(c);
        if ab >= bc && ab >= ac {
            nearly(bc + ac, ab)
        } else if bc >= ab && bc >= ac {
            nearly(ab + ac, bc)
        } else {
            nearly(ab + bc, ac)
        }
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

//! Planar coordinate type.
//!
//! `Point` doubles as position and displacement.  Components are `f64`: a
//! thousand-step spiral accumulates rounding error in every step, and the
//! convergence tests compare distances well below a unit.

use std::ops::{Add, Mul, Sub};

/// A 2-D point (or vector) in simulation units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }

    /// `true` if neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector pointing from `self` to `target`.
    ///
    /// Returns [`Point::ZERO`] when the two points coincide, so a caller
    /// scaling the result by a step length gets a zero move instead of NaN.
    #[inline]
    pub fn unit_towards(self, target: Point) -> Point {
        let direction = target - self;
        let distance = direction.norm();
        if distance > 0.0 {
            Point::new(direction.x / distance, direction.y / distance)
        } else {
            Point::ZERO
        }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

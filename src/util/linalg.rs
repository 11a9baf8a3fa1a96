#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Sub},
};

/// An integer 2D coordinate.
///
/// A [`Point`] is used both for absolute positions (corners, centres) and for direction vectors
/// such as separating axes, in which case it is a displacement rather than a location.
///
/// Note: this follows a coordinate system where y increases downward, which is common in 2D
/// graphics applications.
///
/// # Examples
///
/// ```
/// use hitbox::util::linalg::Point;
///
/// let a = Point { x: 3, y: 4 };
/// let b = Point::from([1, 2]);
/// assert_eq!(a - b, Point { x: 2, y: 2 });
/// assert_eq!(a.dot(b), 11);
/// ```
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
    #[must_use]
    pub fn zero() -> Point {
        Point { x: 0, y: 0 }
    }

    /// Dot product, widened to `i64` so that screen-space coordinates cannot overflow.
    pub fn dot(&self, other: Point) -> i64 {
        // Each product fits in i64; only the sum of two near-extreme products can saturate.
        (i64::from(self.x) * i64::from(other.x))
            .saturating_add(i64::from(self.y) * i64::from(other.y))
    }

    /// Component-wise difference, clamped to the `i32` range.
    #[must_use]
    pub fn saturating_sub(&self, other: Point) -> Point {
        Point {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }

    /// Squared length, exact.
    pub fn len_squared(&self) -> i64 {
        self.dot(*self)
    }

    pub fn as_vec2(&self) -> Vec2 {
        Into::<Vec2>::into(*self)
    }
}

impl Zero for Point {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[i32; 2]> for Point {
    fn from(value: [i32; 2]) -> Self {
        Point {
            x: value[0],
            y: value[1],
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
/// A 2D vector with `f64` coordinates, used for the intermediate results of rotation so that
/// centres of odd-sized rectangles are not truncated before rotating about them.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn len(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Snaps back onto the integer grid.
    pub fn to_point(&self, rounding: RoundingMode) -> Point {
        Point {
            x: gg_float::f64_to_i32(self.x, rounding),
            y: gg_float::f64_to_i32(self.y, rounding),
        }
    }
}

impl From<Point> for Vec2 {
    fn from(value: Point) -> Self {
        Self {
            x: f64::from(value.x),
            y: f64::from(value.y),
        }
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point { x: 1, y: 2 };
        let b = Point { x: 3, y: 4 };
        assert_eq!(a + b, Point { x: 4, y: 6 });
        assert_eq!(b - a, Point { x: 2, y: 2 });
        assert_eq!(
            Point::new(i32::MAX, 0).saturating_sub(Point::new(-10, 5)),
            Point::new(i32::MAX, -5)
        );
    }

    #[test]
    fn point_dot_does_not_overflow() {
        let big = Point {
            x: i32::MAX,
            y: i32::MAX,
        };
        assert_eq!(big.dot(big), 2 * i64::from(i32::MAX) * i64::from(i32::MAX));
        let min = Point {
            x: i32::MIN,
            y: i32::MIN,
        };
        assert_eq!(min.dot(min), i64::MAX);
        assert_eq!(Point::new(3, -4).len_squared(), 25);
    }

    #[test]
    fn point_conversions() {
        assert_eq!(Point::from([5, -6]), Point::new(5, -6));
        assert!(Point::zero().is_zero());
        assert_eq!(format!("{}", Point::new(1, -1)), "(1, -1)");
    }

    #[test]
    fn vec2_helpers() {
        let v = Point::new(3, 4).as_vec2();
        assert!((v.len() - 5.).abs() < EPSILON);
        let d = v - Vec2 { x: 1., y: 1. };
        assert!((d.x - 2.).abs() < EPSILON && (d.y - 3.).abs() < EPSILON);
    }

    #[test]
    fn vec2_to_point_rounding() {
        let v = Vec2 { x: 8.66, y: -4.6 };
        assert_eq!(v.to_point(RoundingMode::Nearest), Point::new(9, -5));
        assert_eq!(v.to_point(RoundingMode::Truncate), Point::new(8, -4));
    }
}

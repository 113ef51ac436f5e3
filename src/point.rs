//! The control point abstraction used by knot insertion.
//!
//! Knot insertion only ever forms affine combinations of neighbouring control
//! points, so any `Copy` type that can blend two of its values works as a
//! control point. Rational (weighted) control points are blended in
//! homogeneous form; see [`crate::rational`].
//!
//! # Example
//!
//! ```
//! use knotwork::{ControlPoint, Point2};
//!
//! let a = Point2::new(0.0, 0.0);
//! let b = Point2::new(4.0, 2.0);
//! assert_eq!(ControlPoint::lerp(a, b, 0.5), Point2::new(2.0, 1.0));
//!
//! // Plain arrays of any dimension are control points too.
//! let h = [1.0, 0.0, 0.0, 1.0].lerp([0.0, 1.0, 0.0, 1.0], 0.25);
//! assert_eq!(h, [0.75, 0.25, 0.0, 1.0]);
//! ```

use crate::primitives::{Point2, Point3};
use num_traits::Float;

/// A point that can take part in a knot-insertion blend.
pub trait ControlPoint<F: Float>: Copy {
    /// Returns `(1 - t) * self + t * other`.
    fn lerp(self, other: Self, t: F) -> Self;
}

impl<F: Float> ControlPoint<F> for Point2<F> {
    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        Point2::lerp(self, other, t)
    }
}

impl<F: Float> ControlPoint<F> for Point3<F> {
    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        Point3::lerp(self, other, t)
    }
}

impl<F: Float, const N: usize> ControlPoint<F> for [F; N] {
    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        let mut out = self;
        for (a, b) in out.iter_mut().zip(other) {
            *a = *a + (b - *a) * t;
        }
        out
    }
}

impl<F: Float> ControlPoint<F> for F {
    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }
}

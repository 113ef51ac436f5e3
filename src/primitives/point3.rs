//! 3D point type.

use num_traits::Float;

/// A 3D control point with x, y, and z coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a point at the origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Affine blend of `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Returns the coordinates scaled by `s`, as used for homogeneous weighting.
    #[inline]
    pub fn scale(self, s: F) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F> From<[F; 3]> for Point3<F> {
    fn from([x, y, z]: [F; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<F> From<Point3<F>> for [F; 3] {
    fn from(p: Point3<F>) -> Self {
        [p.x, p.y, p.z]
    }
}

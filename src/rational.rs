//! Weighted (rational) control points.
//!
//! Knot insertion on a NURBS is carried out on homogeneous control points
//! `(w x, w y, w z, w)`, then projected back. These helpers convert between the
//! two forms; the homogeneous arrays are [`ControlPoint`](crate::ControlPoint)s
//! and go straight into the insertion functions.
//!
//! # Example
//!
//! ```
//! use knotwork::rational::{from_homogeneous, to_homogeneous};
//! use knotwork::{curve_insert_knot, Point3};
//!
//! // A quarter of the unit circle.
//! let w = std::f64::consts::FRAC_1_SQRT_2;
//! let points = [
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mut knots = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let mut homogeneous = to_homogeneous(&points, &[1.0, w, 1.0]).unwrap();
//!
//! curve_insert_knot(0.5, 2, &mut knots, &mut homogeneous).unwrap();
//!
//! let (points, weights) = from_homogeneous(&homogeneous).unwrap();
//! assert_eq!(points.len(), 4);
//! assert!(weights.iter().all(|&w| w > 0.0));
//! ```

use crate::error::{KnotError, KnotResult};
use crate::primitives::{Point2, Point3};
use num_traits::Float;

/// Converts 3D points and weights to homogeneous `[w x, w y, w z, w]`.
///
/// # Errors
///
/// - [`KnotError::ShapeMismatch`] if the slices differ in length.
/// - [`KnotError::NonPositiveWeight`] for a weight that is not strictly positive.
pub fn to_homogeneous<F: Float>(points: &[Point3<F>], weights: &[F]) -> KnotResult<Vec<[F; 4]>> {
    check_weights(points.len(), weights)?;
    Ok(points
        .iter()
        .zip(weights)
        .map(|(p, &w)| {
            let s = p.scale(w);
            [s.x, s.y, s.z, w]
        })
        .collect())
}

/// Projects homogeneous `[w x, w y, w z, w]` back to 3D points and weights.
///
/// # Errors
///
/// Returns [`KnotError::NonPositiveWeight`] if any `w` is not strictly positive.
pub fn from_homogeneous<F: Float>(points: &[[F; 4]]) -> KnotResult<(Vec<Point3<F>>, Vec<F>)> {
    let weights: Vec<F> = points.iter().map(|p| p[3]).collect();
    check_weights(points.len(), &weights)?;
    let projected = points
        .iter()
        .map(|&[x, y, z, w]| Point3::new(x, y, z).scale(w.recip()))
        .collect();
    Ok((projected, weights))
}

/// Converts 2D points and weights to homogeneous `[w x, w y, w]`.
pub fn to_homogeneous_2d<F: Float>(
    points: &[Point2<F>],
    weights: &[F],
) -> KnotResult<Vec<[F; 3]>> {
    check_weights(points.len(), weights)?;
    Ok(points
        .iter()
        .zip(weights)
        .map(|(p, &w)| {
            let s = p.scale(w);
            [s.x, s.y, w]
        })
        .collect())
}

/// Projects homogeneous `[w x, w y, w]` back to 2D points and weights.
pub fn from_homogeneous_2d<F: Float>(points: &[[F; 3]]) -> KnotResult<(Vec<Point2<F>>, Vec<F>)> {
    let weights: Vec<F> = points.iter().map(|p| p[2]).collect();
    check_weights(points.len(), &weights)?;
    let projected = points
        .iter()
        .map(|&[x, y, w]| Point2::new(x, y).scale(w.recip()))
        .collect();
    Ok((projected, weights))
}

fn check_weights<F: Float>(expected: usize, weights: &[F]) -> KnotResult<()> {
    if weights.len() != expected {
        return Err(KnotError::ShapeMismatch {
            expected,
            actual: weights.len(),
        });
    }
    // NaN fails the comparison as well
    match weights.iter().position(|&w| !(w > F::zero())) {
        Some(index) => Err(KnotError::NonPositiveWeight { index }),
        None => Ok(()),
    }
}

//! Knot vector predicates and structural validation.

use crate::error::{KnotError, KnotResult};
use num_traits::Float;

/// Returns `true` if the knots never decrease.
///
/// Empty and single-knot vectors are monotonic. A vector containing NaN is not.
///
/// # Example
///
/// ```
/// use knotwork::is_knot_vector_monotonic;
///
/// assert!(is_knot_vector_monotonic(&[0.0, 0.0, 0.5, 1.0, 1.0]));
/// assert!(!is_knot_vector_monotonic(&[0.0, 0.5, 0.25, 1.0]));
/// ```
pub fn is_knot_vector_monotonic<F: Float>(knots: &[F]) -> bool {
    first_decrease(knots).is_none()
}

/// Returns `true` if the leading `degree + 2` knots equal the trailing
/// `degree + 2` knots within `F::epsilon()`.
///
/// Knot `i` is compared against knot `len - degree - 2 + i`. Vectors shorter
/// than `degree + 2` are never closed.
///
/// The machine epsilon is an absolute tolerance, which is very tight for
/// knots far from unit scale; use [`is_knot_vector_closed_with_tolerance`]
/// to pick a tolerance suited to the parameterisation.
pub fn is_knot_vector_closed<F: Float>(degree: usize, knots: &[F]) -> bool {
    is_knot_vector_closed_with_tolerance(degree, knots, F::epsilon())
}

/// Like [`is_knot_vector_closed`], with an explicit absolute tolerance.
///
/// # Example
///
/// ```
/// use knotwork::is_knot_vector_closed_with_tolerance;
///
/// let knots = [0.0, 0.25, 0.5, 0.0, 0.25, 0.5001];
/// assert!(is_knot_vector_closed_with_tolerance(1, &knots, 1e-3));
/// assert!(!is_knot_vector_closed_with_tolerance(1, &knots, 1e-6));
/// ```
pub fn is_knot_vector_closed_with_tolerance<F: Float>(degree: usize, knots: &[F], eps: F) -> bool {
    let count = degree + 2;
    if knots.len() < count {
        return false;
    }
    let tail = &knots[knots.len() - count..];
    knots[..count]
        .iter()
        .zip(tail)
        .all(|(&head, &tail)| (head - tail).abs() <= eps)
}

/// Checks the structural invariants shared by every curve operation.
///
/// - at least `degree + 1` control points,
/// - `knots.len() == num_control_points + degree + 1`,
/// - the knots never decrease.
pub fn validate_knot_vector<F: Float>(
    degree: usize,
    knots: &[F],
    num_control_points: usize,
) -> KnotResult<()> {
    let expected = expected_knot_count(degree, num_control_points)?;
    if knots.len() != expected {
        return Err(KnotError::KnotCountMismatch {
            expected,
            actual: knots.len(),
        });
    }

    match first_decrease(knots) {
        Some(index) => Err(KnotError::NotMonotonic { index }),
        None => Ok(()),
    }
}

/// Returns `num_control_points + degree + 1` for a feasible curve.
///
/// Fails with [`KnotError::InsufficientControlPoints`] below `degree + 1`
/// control points and with [`KnotError::KnotCountOverflow`] when the count
/// does not fit in a `usize`.
pub(crate) fn expected_knot_count(degree: usize, num_control_points: usize) -> KnotResult<usize> {
    if num_control_points <= degree {
        return Err(KnotError::InsufficientControlPoints {
            degree,
            num_control_points,
        });
    }
    num_control_points
        .checked_add(degree)
        .and_then(|count| count.checked_add(1))
        .ok_or(KnotError::KnotCountOverflow {
            degree,
            num_control_points,
        })
}

/// Index of the first knot that is smaller than (or not comparable to) its predecessor.
fn first_decrease<F: Float>(knots: &[F]) -> Option<usize> {
    if let Some(index) = knots.iter().position(|k| k.is_nan()) {
        return Some(index);
    }
    knots
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}

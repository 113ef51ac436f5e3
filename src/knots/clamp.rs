//! In-place clamping of existing knot vectors.
//!
//! Clamping repeats the first/last interior boundary knot so that the curve
//! interpolates its end control points. All three functions require at least
//! `degree + 1` knots on each side, i.e. `2 * degree + 2` in total, and leave
//! the vector untouched when that does not hold.

use crate::error::{KnotError, KnotResult};
use num_traits::Float;

/// Sets the first `degree` knots to `knots[degree]`.
///
/// # Example
///
/// ```
/// use knotwork::clamp_knot_vector_left;
///
/// let mut knots = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// clamp_knot_vector_left(2, &mut knots).unwrap();
/// assert_eq!(knots, vec![2.0, 2.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn clamp_knot_vector_left<F: Float>(degree: usize, knots: &mut [F]) -> KnotResult<()> {
    check_clampable(degree, knots)?;
    let start = knots[degree];
    knots[..degree].fill(start);
    Ok(())
}

/// Sets the last `degree` knots to `knots[len - degree - 1]`.
pub fn clamp_knot_vector_right<F: Float>(degree: usize, knots: &mut [F]) -> KnotResult<()> {
    check_clampable(degree, knots)?;
    let len = knots.len();
    let end = knots[len - degree - 1];
    knots[len - degree..].fill(end);
    Ok(())
}

/// Clamps both ends of the knot vector.
///
/// Equivalent to [`clamp_knot_vector_left`] followed by
/// [`clamp_knot_vector_right`]. Idempotent.
pub fn clamp_knot_vector<F: Float>(degree: usize, knots: &mut [F]) -> KnotResult<()> {
    check_clampable(degree, knots)?;
    clamp_knot_vector_left(degree, knots)?;
    clamp_knot_vector_right(degree, knots)
}

/// Returns `true` if the first and last `degree + 1` knots are each constant.
pub fn is_knot_vector_clamped<F: Float>(degree: usize, knots: &[F]) -> bool {
    let count = degree + 1;
    if knots.len() < 2 * count {
        return false;
    }
    let head = &knots[..count];
    let tail = &knots[knots.len() - count..];
    head.iter().all(|&k| k == head[0]) && tail.iter().all(|&k| k == tail[0])
}

fn check_clampable<F>(degree: usize, knots: &[F]) -> KnotResult<()> {
    let required = 2 * degree + 2;
    if knots.len() < required {
        return Err(KnotError::InsufficientKnots {
            required,
            actual: knots.len(),
        });
    }
    Ok(())
}

//! Uniform and clamped-uniform knot vector generation.

use super::validate::expected_knot_count;
use crate::error::KnotResult;
use num_traits::Float;

/// Creates a uniform knot vector over `[0, 1]`.
///
/// The vector has exactly `num_control_points + degree + 1` knots, evenly
/// spaced so that `knots[i] = i / (len - 1)`. The first knot is exactly `0`
/// and the last exactly `1`.
///
/// # Errors
///
/// Returns [`KnotError::InsufficientControlPoints`] when
/// `num_control_points < degree + 1`, and [`KnotError::KnotCountOverflow`]
/// when the knot count does not fit in a `usize`.
///
/// # Example
///
/// ```
/// use knotwork::make_uniform_knot_vector;
///
/// let knots: Vec<f64> = make_uniform_knot_vector(1, 4).unwrap();
/// assert_eq!(knots, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
/// ```
pub fn make_uniform_knot_vector<F: Float>(
    degree: usize,
    num_control_points: usize,
) -> KnotResult<Vec<F>> {
    let knot_count = expected_knot_count(degree, num_control_points)?;
    let last = index_to_float::<F>(knot_count - 1);

    Ok((0..knot_count)
        .map(|i| index_to_float::<F>(i) / last)
        .collect())
}

/// Creates a clamped (open) uniform knot vector over `[0, 1]`.
///
/// The first `degree + 1` knots are `0`, the last `degree + 1` knots are `1`,
/// and the interior knots are evenly spaced. A curve built on this vector
/// interpolates its first and last control points.
///
/// # Errors
///
/// Returns [`KnotError::InsufficientControlPoints`] when
/// `num_control_points < degree + 1`, and [`KnotError::KnotCountOverflow`]
/// when the knot count does not fit in a `usize`.
///
/// # Example
///
/// ```
/// use knotwork::make_clamped_uniform_knot_vector;
///
/// let knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 7).unwrap();
/// assert_eq!(
///     knots,
///     vec![0.0, 0.0, 0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 1.0]
/// );
/// ```
pub fn make_clamped_uniform_knot_vector<F: Float>(
    degree: usize,
    num_control_points: usize,
) -> KnotResult<Vec<F>> {
    let knot_count = expected_knot_count(degree, num_control_points)?;
    // Always at least 2 once the feasibility check passed.
    let interior_count = knot_count - 2 * degree;
    let last = index_to_float::<F>(interior_count - 1);

    let mut knots = Vec::with_capacity(knot_count);
    knots.extend(std::iter::repeat(F::zero()).take(degree));
    knots.extend((0..interior_count).map(|i| index_to_float::<F>(i) / last));
    knots.extend(std::iter::repeat(F::one()).take(degree));

    debug_assert_eq!(knots.len(), knot_count);
    Ok(knots)
}

// usize -> f32/f64 never fails, it only rounds.
#[inline]
fn index_to_float<F: Float>(i: usize) -> F {
    F::from(i).unwrap_or_else(F::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnotError;
    use crate::knots::is_knot_vector_monotonic;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_length_and_endpoints() {
        for degree in 0..6 {
            for n in (degree + 1)..(degree + 20) {
                let knots: Vec<f64> = make_uniform_knot_vector(degree, n).unwrap();
                assert_eq!(knots.len(), n + degree + 1);
                assert_eq!(knots[0], 0.0);
                assert_eq!(*knots.last().unwrap(), 1.0);
                assert!(is_knot_vector_monotonic(&knots));
            }
        }
    }

    #[test]
    fn test_uniform_spacing_has_no_drift() {
        // 0.1 is not representable; an accumulating loop would drift here.
        let knots: Vec<f64> = make_uniform_knot_vector(3, 8).unwrap();
        assert_eq!(knots.len(), 12);
        for (i, &k) in knots.iter().enumerate() {
            assert_relative_eq!(k, i as f64 / 11.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_clamped_length_and_boundaries() {
        for degree in 0..6 {
            for n in (degree + 1)..(degree + 20) {
                let knots: Vec<f64> = make_clamped_uniform_knot_vector(degree, n).unwrap();
                assert_eq!(knots.len(), n + degree + 1);
                assert!(knots[..=degree].iter().all(|&k| k == 0.0));
                assert!(knots[knots.len() - degree - 1..].iter().all(|&k| k == 1.0));
                assert!(is_knot_vector_monotonic(&knots));
            }
        }
    }

    #[test]
    fn test_clamped_cubic_seven_points() {
        let knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 7).unwrap();
        assert_eq!(knots.len(), 11);
        assert_eq!(&knots[..4], &[0.0; 4]);
        assert_eq!(&knots[7..], &[1.0; 4]);

        let (a, b, c) = (knots[4], knots[5], knots[6]);
        assert!(0.0 < a && a < b && b < c && c < 1.0);
        assert_relative_eq!(a, 0.25);
        assert_relative_eq!(b, 0.5);
        assert_relative_eq!(c, 0.75);
    }

    #[test]
    fn test_clamped_bezier_case() {
        // n = degree + 1 degenerates to a single Bezier segment.
        let knots: Vec<f32> = make_clamped_uniform_knot_vector(2, 3).unwrap();
        assert_eq!(knots, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_degree_zero() {
        let knots: Vec<f64> = make_clamped_uniform_knot_vector(0, 4).unwrap();
        assert_eq!(knots.len(), 5);
        assert_relative_eq!(knots[2], 0.5);
    }

    #[test]
    fn test_insufficient_control_points() {
        for degree in 1..5 {
            for n in 0..=degree {
                let expected = KnotError::InsufficientControlPoints {
                    degree,
                    num_control_points: n,
                };
                assert_eq!(
                    make_uniform_knot_vector::<f64>(degree, n),
                    Err(expected.clone())
                );
                assert_eq!(make_clamped_uniform_knot_vector::<f64>(degree, n), Err(expected));
            }
        }
        assert!(make_uniform_knot_vector::<f64>(0, 0).is_err());
    }

    #[test]
    fn test_knot_count_overflow() {
        let expected = KnotError::KnotCountOverflow {
            degree: 1,
            num_control_points: usize::MAX,
        };
        assert_eq!(
            make_uniform_knot_vector::<f64>(1, usize::MAX),
            Err(expected.clone())
        );
        assert_eq!(
            make_clamped_uniform_knot_vector::<f64>(1, usize::MAX),
            Err(expected)
        );
        assert!(matches!(
            make_uniform_knot_vector::<f32>(0, usize::MAX),
            Err(KnotError::KnotCountOverflow { .. })
        ));
    }
}

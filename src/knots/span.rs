//! Knot span search.

use crate::error::{KnotError, KnotResult};
use num_traits::Float;

/// Returns the valid parameter domain `(knots[degree], knots[len - degree - 1])`.
///
/// # Errors
///
/// Returns [`KnotError::InsufficientKnots`] when the vector has fewer than
/// `2 * degree + 2` knots.
pub fn knot_domain<F: Float>(degree: usize, knots: &[F]) -> KnotResult<(F, F)> {
    let required = 2 * degree + 2;
    if knots.len() < required {
        return Err(KnotError::InsufficientKnots {
            required,
            actual: knots.len(),
        });
    }
    Ok((knots[degree], knots[knots.len() - degree - 1]))
}

/// Finds the knot span index `k` with `knots[k] <= u < knots[k + 1]`.
///
/// The result always lies in `degree..n`, where `n = knots.len() - degree - 1`
/// is the number of control points. At the upper end of the domain
/// (`u == knots[n]`) the last non-empty span is returned. The knot vector is
/// assumed to be non-decreasing.
///
/// # Errors
///
/// - [`KnotError::ParameterOutOfDomain`] if `u` lies outside [`knot_domain`] or is NaN.
/// - [`KnotError::DegenerateKnotSpan`] if the domain has zero width.
///
/// # Example
///
/// ```
/// use knotwork::find_span;
///
/// let knots = [0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0];
/// assert_eq!(find_span(0.25, 2, &knots).unwrap(), 2);
/// assert_eq!(find_span(0.5, 2, &knots).unwrap(), 3);
/// assert_eq!(find_span(1.0, 2, &knots).unwrap(), 3);
/// ```
pub fn find_span<F: Float>(u: F, degree: usize, knots: &[F]) -> KnotResult<usize> {
    let (min, max) = knot_domain(degree, knots)?;
    if !(u >= min && u <= max) {
        return Err(KnotError::out_of_domain(u, min, max));
    }
    if max <= min {
        return Err(KnotError::DegenerateKnotSpan { index: degree });
    }

    let n = knots.len() - degree - 1;

    // Special case: u at the end of the domain
    if u >= knots[n] {
        return (degree..n)
            .rev()
            .find(|&k| knots[k] < knots[k + 1])
            .ok_or(KnotError::DegenerateKnotSpan { index: degree });
    }

    // Binary search for the first knot strictly greater than u
    let mut low = degree;
    let mut high = n;

    while low < high {
        let mid = (low + high) / 2;
        if u < knots[mid] {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    Ok(low - 1)
}

/// Counts the knots exactly equal to `u`.
pub fn knot_multiplicity<F: Float>(u: F, knots: &[F]) -> usize {
    knots.iter().filter(|&&k| k == u).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knots::{make_clamped_uniform_knot_vector, make_uniform_knot_vector};

    #[test]
    fn test_span_brackets_parameter() {
        let knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 9).unwrap();
        let n = knots.len() - 4;
        for i in 0..=100 {
            let u = i as f64 / 100.0;
            let k = find_span(u, 3, &knots).unwrap();
            assert!((3..n).contains(&k));
            assert!(knots[k] <= u);
            if u < 1.0 {
                assert!(u < knots[k + 1]);
            }
        }
    }

    #[test]
    fn test_span_on_repeated_interior_knot() {
        let knots = [0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 1.0, 1.0];
        // u sits on the double knot, so the span starts after it.
        assert_eq!(find_span(0.5, 2, &knots).unwrap(), 4);
        assert_eq!(find_span(0.4999, 2, &knots).unwrap(), 2);
    }

    #[test]
    fn test_span_unclamped_domain() {
        let knots: Vec<f64> = make_uniform_knot_vector(2, 5).unwrap();
        let (min, max) = knot_domain(2, &knots).unwrap();
        assert_eq!(min, knots[2]);
        assert_eq!(max, knots[5]);
        assert_eq!(find_span(min, 2, &knots).unwrap(), 2);
        assert_eq!(find_span(max, 2, &knots).unwrap(), 4);
        assert!(find_span(0.0, 2, &knots).is_err());
    }

    #[test]
    fn test_span_out_of_domain() {
        let knots = [0.0, 0.0, 1.0, 1.0];
        assert_eq!(
            find_span(1.5, 1, &knots),
            Err(KnotError::ParameterOutOfDomain {
                value: 1.5,
                min: 0.0,
                max: 1.0
            })
        );
        assert!(find_span(-0.1, 1, &knots).is_err());
        assert!(find_span(f64::NAN, 1, &knots).is_err());
    }

    #[test]
    fn test_span_degenerate_domain() {
        let knots = [0.0, 1.0, 1.0, 2.0];
        assert_eq!(
            find_span(1.0, 1, &knots),
            Err(KnotError::DegenerateKnotSpan { index: 1 })
        );
    }

    #[test]
    fn test_knot_domain_too_short() {
        assert_eq!(
            knot_domain(2, &[0.0, 0.5, 1.0]),
            Err(KnotError::InsufficientKnots {
                required: 6,
                actual: 3
            })
        );
    }

    #[test]
    fn test_multiplicity() {
        let knots = [0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 1.0, 1.0];
        assert_eq!(knot_multiplicity(0.0, &knots), 3);
        assert_eq!(knot_multiplicity(0.5, &knots), 2);
        assert_eq!(knot_multiplicity(0.25, &knots), 0);
    }
}

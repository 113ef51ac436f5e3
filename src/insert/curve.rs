//! Knot insertion for curves.

use super::{blend_factors, insertion_span, splice_blended};
use crate::error::{KnotError, KnotResult};
use crate::knots::{is_knot_vector_monotonic, validate_knot_vector};
use crate::point::ControlPoint;
use num_traits::Float;

/// Inserts the knot `u` once into a curve, updating its control points.
///
/// The knot is placed between `knots[span]` and `knots[span + 1]`, where
/// `span` is the knot span containing `u`, and the control points with index
/// in `span - degree + 1..=span` are recomputed. The represented curve is
/// unchanged. Returns `span`.
///
/// # Errors
///
/// - [`KnotError::InsufficientControlPoints`], [`KnotError::KnotCountMismatch`]
///   or [`KnotError::NotMonotonic`] for an invalid curve.
/// - [`KnotError::ParameterOutOfDomain`] if `u` is outside
///   `[knots[degree], knots[n]]`.
/// - [`KnotError::MultiplicityExceeded`] if `u` already appears `degree` times
///   (once for degree 0).
/// - [`KnotError::DegenerateKnotSpan`] if a blend denominator is zero.
///
/// Neither buffer is modified when an error is returned.
///
/// # Example
///
/// ```
/// use knotwork::{curve_insert_knot, Point2};
///
/// let mut knots = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
/// let mut points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(2.0, 0.0),
/// ];
///
/// let span = curve_insert_knot(0.5, 2, &mut knots, &mut points).unwrap();
///
/// assert_eq!(span, 2);
/// assert_eq!(knots, vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0]);
/// assert_eq!(
///     points,
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(0.5, 1.0),
///         Point2::new(1.5, 1.0),
///         Point2::new(2.0, 0.0),
///     ]
/// );
/// ```
pub fn curve_insert_knot<F, P>(
    u: F,
    degree: usize,
    knots: &mut Vec<F>,
    control_points: &mut Vec<P>,
) -> KnotResult<usize>
where
    F: Float,
    P: ControlPoint<F>,
{
    validate_knot_vector(degree, knots, control_points.len())?;
    let span = insertion_span(u, degree, knots, 1)?;
    let alphas = blend_factors(u, degree, span, knots)?;

    splice_blended(control_points, degree, span, &alphas, |&a, &b, t| a.lerp(b, t));
    knots.insert(span + 1, u);

    log::debug!(
        "inserted knot into curve at span {}: {} knots, {} control points",
        span,
        knots.len(),
        control_points.len()
    );
    Ok(span)
}

/// Inserts the knot `u` into a curve `times` times.
///
/// Fails with [`KnotError::MultiplicityExceeded`] before modifying anything if
/// the resulting multiplicity of `u` would exceed `degree`. Returns the
/// span of the last insertion. `times == 0` only validates the curve.
pub fn curve_insert_knot_times<F, P>(
    u: F,
    times: usize,
    degree: usize,
    knots: &mut Vec<F>,
    control_points: &mut Vec<P>,
) -> KnotResult<usize>
where
    F: Float,
    P: ControlPoint<F>,
{
    validate_knot_vector(degree, knots, control_points.len())?;
    let mut span = insertion_span(u, degree, knots, times)?;

    let mut new_knots = knots.clone();
    let mut new_points = control_points.clone();
    for _ in 0..times {
        span = curve_insert_knot(u, degree, &mut new_knots, &mut new_points)?;
    }

    *knots = new_knots;
    *control_points = new_points;
    Ok(span)
}

/// Inserts every knot of `new_knots` into a curve, in order.
///
/// `new_knots` must be non-decreasing. The refinement is all-or-nothing: if
/// any insertion fails, the curve is left as it was.
///
/// # Example
///
/// ```
/// use knotwork::{curve_refine_knots, make_clamped_uniform_knot_vector, Point3};
///
/// let mut knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 4).unwrap();
/// let mut points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(2.0, 1.0, 1.0),
///     Point3::new(3.0, 0.0, 1.0),
/// ];
///
/// curve_refine_knots(&[0.25, 0.5, 0.75], 3, &mut knots, &mut points).unwrap();
/// assert_eq!(knots.len(), 11);
/// assert_eq!(points.len(), 7);
/// ```
pub fn curve_refine_knots<F, P>(
    new_knots: &[F],
    degree: usize,
    knots: &mut Vec<F>,
    control_points: &mut Vec<P>,
) -> KnotResult<()>
where
    F: Float,
    P: ControlPoint<F>,
{
    validate_knot_vector(degree, knots, control_points.len())?;
    if !is_knot_vector_monotonic(new_knots) {
        let index = new_knots
            .windows(2)
            .position(|pair| !(pair[0] <= pair[1]))
            .map_or(0, |i| i + 1);
        return Err(KnotError::NotMonotonic { index });
    }

    let mut refined_knots = knots.clone();
    let mut refined_points = control_points.clone();
    for &u in new_knots {
        curve_insert_knot(u, degree, &mut refined_knots, &mut refined_points)?;
    }

    *knots = refined_knots;
    *control_points = refined_points;
    Ok(())
}

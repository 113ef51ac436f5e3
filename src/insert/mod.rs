//! Knot insertion (Boehm's algorithm) for curves and surfaces.
//!
//! Inserting a knot `u` once into a degree-`p` spline adds one knot and one
//! control point without changing the shape. With `k` the span containing `u`,
//! the new control points are
//!
//! ```text
//! Q[i] = P[i]                              i <= k - p
//! Q[i] = (1 - a[i]) P[i - 1] + a[i] P[i]   k - p + 1 <= i <= k
//! Q[i] = P[i - 1]                          i > k
//!
//! a[i] = (u - U[i]) / (U[i + p] - U[i])
//! ```
//!
//! where `U` is the knot vector before insertion. The blended points are
//! computed from the original points before anything is written back, so no
//! point is read after it has been overwritten.
//!
//! All functions validate their inputs first and leave the caller's buffers
//! untouched when they return an error.

mod curve;
mod surface;

pub use curve::{curve_insert_knot, curve_insert_knot_times, curve_refine_knots};
pub use surface::{surface_insert_knot_u, surface_insert_knot_v};

use crate::error::{KnotError, KnotResult};
use crate::knots::{find_span, knot_multiplicity};
use num_traits::Float;

/// Largest multiplicity insertion may give a knot: `degree`, and 1 for step functions.
fn max_multiplicity(degree: usize) -> usize {
    degree.max(1)
}

/// Locates the span for `u` and checks the insertion keeps the multiplicity valid.
fn insertion_span<F: Float>(u: F, degree: usize, knots: &[F], times: usize) -> KnotResult<usize> {
    let span = find_span(u, degree, knots)?;
    let multiplicity = knot_multiplicity(u, knots).saturating_add(times);
    if multiplicity > max_multiplicity(degree) {
        return Err(KnotError::MultiplicityExceeded {
            multiplicity,
            degree,
        });
    }
    Ok(span)
}

/// Computes `a[i]` for `i` in `span - degree + 1..=span`, on the pre-insertion knots.
fn blend_factors<F: Float>(u: F, degree: usize, span: usize, knots: &[F]) -> KnotResult<Vec<F>> {
    let first = span + 1 - degree;
    (first..=span)
        .map(|i| {
            let denom = knots[i + degree] - knots[i];
            if !(denom > F::zero()) {
                return Err(KnotError::DegenerateKnotSpan { index: i });
            }
            let alpha = (u - knots[i]) / denom;
            log::trace!(
                "blend factor a[{}] = {:?}",
                i,
                alpha.to_f64().unwrap_or(f64::NAN)
            );
            Ok(alpha)
        })
        .collect()
}

/// Replaces `items[span - degree + 1..span]` with the blended items, growing the
/// sequence by one.
///
/// Every blend reads the original items; the sequence is only modified once all
/// blended items exist.
fn splice_blended<F, T, B>(items: &mut Vec<T>, degree: usize, span: usize, alphas: &[F], blend: B)
where
    F: Float,
    T: Clone,
    B: Fn(&T, &T, F) -> T,
{
    if degree == 0 {
        let copy = items[span].clone();
        items.insert(span + 1, copy);
        return;
    }

    let first = span + 1 - degree;
    let blended: Vec<T> = alphas
        .iter()
        .enumerate()
        .map(|(j, &alpha)| {
            let i = first + j;
            blend(&items[i - 1], &items[i], alpha)
        })
        .collect();

    items.splice(first..span, blended);
}

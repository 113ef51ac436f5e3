//! Knot insertion for surfaces.
//!
//! A control grid is stored row-major as `grid[row][col]`. The U direction
//! runs along each row (the column index is the U index) and the V direction
//! runs down the columns (the row index is the V index). Inserting a U knot
//! therefore adds one point to every row; inserting a V knot adds one row.

use super::{blend_factors, insertion_span, splice_blended};
use crate::error::{KnotError, KnotResult};
use crate::knots::validate_knot_vector;
use crate::point::ControlPoint;
use num_traits::Float;

/// Inserts the knot `u` once into the U direction of a surface.
///
/// Every row of `grid` is refined with the same blend factors as
/// [`crate::curve_insert_knot`]. Returns the span containing `u`.
///
/// # Errors
///
/// - [`KnotError::EmptyGrid`] / [`KnotError::RaggedGrid`] for a malformed grid.
/// - The same errors as [`crate::curve_insert_knot`], checked against the row length.
///
/// Neither `knots_u` nor `grid` is modified when an error is returned.
///
/// # Example
///
/// ```
/// use knotwork::{make_clamped_uniform_knot_vector, surface_insert_knot_u, Point3};
///
/// let mut knots_u: Vec<f64> = make_clamped_uniform_knot_vector(1, 2).unwrap();
/// let mut grid = vec![
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
///     vec![Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 1.0)],
/// ];
///
/// surface_insert_knot_u(0.5, 1, &mut knots_u, &mut grid).unwrap();
///
/// assert_eq!(knots_u, vec![0.0, 0.0, 0.5, 1.0, 1.0]);
/// assert_eq!(grid[1][1], Point3::new(0.5, 1.0, 0.5));
/// ```
pub fn surface_insert_knot_u<F, P>(
    u: F,
    degree: usize,
    knots_u: &mut Vec<F>,
    grid: &mut [Vec<P>],
) -> KnotResult<usize>
where
    F: Float,
    P: ControlPoint<F>,
{
    let (_, cols) = grid_shape(grid)?;
    validate_knot_vector(degree, knots_u, cols)?;
    let span = insertion_span(u, degree, knots_u, 1)?;
    let alphas = blend_factors(u, degree, span, knots_u)?;

    for row in grid.iter_mut() {
        splice_blended(row, degree, span, &alphas, |&a, &b, t| a.lerp(b, t));
    }
    knots_u.insert(span + 1, u);

    log::debug!(
        "inserted U knot at span {}: grid is now {}x{}",
        span,
        grid.len(),
        cols + 1
    );
    Ok(span)
}

/// Inserts the knot `v` once into the V direction of a surface.
///
/// A new row is produced; every column is refined with the same blend
/// factors as [`crate::curve_insert_knot`]. Returns the span containing `v`.
///
/// # Errors
///
/// - [`KnotError::EmptyGrid`] / [`KnotError::RaggedGrid`] for a malformed grid.
/// - The same errors as [`crate::curve_insert_knot`], checked against the row count.
///
/// Neither `knots_v` nor `grid` is modified when an error is returned.
pub fn surface_insert_knot_v<F, P>(
    v: F,
    degree: usize,
    knots_v: &mut Vec<F>,
    grid: &mut Vec<Vec<P>>,
) -> KnotResult<usize>
where
    F: Float,
    P: ControlPoint<F>,
{
    let (rows, cols) = grid_shape(grid)?;
    validate_knot_vector(degree, knots_v, rows)?;
    let span = insertion_span(v, degree, knots_v, 1)?;
    let alphas = blend_factors(v, degree, span, knots_v)?;

    splice_blended(grid, degree, span, &alphas, |upper, lower, t| {
        upper
            .iter()
            .zip(lower)
            .map(|(&a, &b)| a.lerp(b, t))
            .collect()
    });
    knots_v.insert(span + 1, v);

    log::debug!(
        "inserted V knot at span {}: grid is now {}x{}",
        span,
        rows + 1,
        cols
    );
    Ok(span)
}

/// Returns `(rows, cols)` of a non-empty rectangular grid.
fn grid_shape<P>(grid: &[Vec<P>]) -> KnotResult<(usize, usize)> {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(KnotError::EmptyGrid);
    }
    if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(KnotError::RaggedGrid {
            row,
            expected: cols,
            actual: r.len(),
        });
    }
    Ok((grid.len(), cols))
}

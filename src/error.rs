//! Error types for knot vector operations.

use num_traits::Float;
use thiserror::Error;

/// Result type for knot vector operations.
pub type KnotResult<T> = Result<T, KnotError>;

/// Errors that can occur while building, clamping, validating or refining knot vectors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnotError {
    /// Too few control points to support the requested degree.
    #[error("degree {degree} needs at least {} control points, got {num_control_points}", .degree + 1)]
    InsufficientControlPoints {
        /// Requested polynomial degree.
        degree: usize,
        /// Number of control points supplied.
        num_control_points: usize,
    },

    /// `num_control_points + degree + 1` does not fit in a `usize`.
    #[error("knot count for degree {degree} with {num_control_points} control points overflows")]
    KnotCountOverflow {
        /// Requested polynomial degree.
        degree: usize,
        /// Number of control points requested.
        num_control_points: usize,
    },

    /// The knot vector is too short for the operation.
    #[error("knot vector needs at least {required} entries, got {actual}")]
    InsufficientKnots {
        /// Minimum number of knots.
        required: usize,
        /// Number of knots supplied.
        actual: usize,
    },

    /// `knots.len()` does not equal `control_points.len() + degree + 1`.
    #[error("expected {expected} knots, got {actual}")]
    KnotCountMismatch {
        /// Knot count implied by the control points and degree.
        expected: usize,
        /// Number of knots supplied.
        actual: usize,
    },

    /// The knot vector decreases (or contains NaN) at `index`.
    #[error("knot vector is not non-decreasing at index {index}")]
    NotMonotonic {
        /// Index of the first offending knot.
        index: usize,
    },

    /// The parameter lies outside the valid knot domain.
    #[error("parameter {value} outside knot domain [{min}, {max}]")]
    ParameterOutOfDomain {
        /// Offending parameter.
        value: f64,
        /// Lower end of the domain.
        min: f64,
        /// Upper end of the domain.
        max: f64,
    },

    /// A knot span used as a divisor has zero width.
    #[error("degenerate knot span at index {index}")]
    DegenerateKnotSpan {
        /// Index of the knot starting the span.
        index: usize,
    },

    /// Inserting the knot would push its multiplicity above `degree` (1 for degree 0).
    #[error("knot multiplicity {multiplicity} exceeds the maximum allowed for degree {degree}")]
    MultiplicityExceeded {
        /// Multiplicity the knot would have after insertion.
        multiplicity: usize,
        /// Degree of the spline.
        degree: usize,
    },

    /// A control point grid has rows of different lengths.
    #[error("control grid row {row} has {actual} points, expected {expected}")]
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A control point grid has no rows or no columns.
    #[error("control grid is empty")]
    EmptyGrid,

    /// Two paired inputs have different lengths.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A rational weight is zero, negative or NaN.
    #[error("weight at index {index} must be positive")]
    NonPositiveWeight {
        /// Index of the offending weight.
        index: usize,
    },
}

impl KnotError {
    pub(crate) fn out_of_domain<F: Float>(value: F, min: F, max: F) -> Self {
        KnotError::ParameterOutOfDomain {
            value: to_f64(value),
            min: to_f64(min),
            max: to_f64(max),
        }
    }
}

#[inline]
fn to_f64<F: Float>(x: F) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

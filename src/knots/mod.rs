//! Knot vector construction, clamping and validation.
//!
//! A knot vector is a non-decreasing `[F]` of length
//! `num_control_points + degree + 1`. The functions here never keep a
//! reference to the vector: generators return a fresh `Vec`, clamping works
//! in place on a caller-owned slice, and predicates only read.
//!
//! None of these functions synchronize internally. Mutating a knot vector
//! shared between threads requires the caller to hold exclusive access.
//!
//! # Example
//!
//! ```
//! use knotwork::knots::{
//!     clamp_knot_vector, is_knot_vector_clamped, is_knot_vector_monotonic,
//!     make_uniform_knot_vector,
//! };
//!
//! let mut knots: Vec<f64> = make_uniform_knot_vector(2, 5).unwrap();
//! assert!(is_knot_vector_monotonic(&knots));
//!
//! clamp_knot_vector(2, &mut knots).unwrap();
//! assert!(is_knot_vector_clamped(2, &knots));
//! ```

mod clamp;
mod generate;
mod span;
mod validate;

pub use clamp::{
    clamp_knot_vector, clamp_knot_vector_left, clamp_knot_vector_right, is_knot_vector_clamped,
};
pub use generate::{make_clamped_uniform_knot_vector, make_uniform_knot_vector};
pub use span::{find_span, knot_domain, knot_multiplicity};
pub use validate::{
    is_knot_vector_closed, is_knot_vector_closed_with_tolerance, is_knot_vector_monotonic,
    validate_knot_vector,
};

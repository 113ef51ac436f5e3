//! knotwork - Knot vector helpers for B-spline and NURBS geometry
//!
//! Small, stateless routines for building and refining the knot vectors that
//! sit under NURBS curves and surfaces: uniform and clamped generation,
//! clamping, validation, span search, and Boehm knot insertion with the
//! matching control point update.
//!
//! Every function is generic over `f32`/`f64` and works on caller-owned
//! buffers. Nothing is synchronized internally; sharing a buffer between
//! threads while mutating it needs external exclusivity.
//!
//! # Example
//!
//! ```
//! use knotwork::{curve_insert_knot, is_knot_vector_monotonic, make_clamped_uniform_knot_vector, Point2};
//!
//! let mut knots: Vec<f64> = make_clamped_uniform_knot_vector(3, 5).unwrap();
//! let mut points: Vec<Point2<f64>> = (0..5).map(|i| Point2::new(i as f64, (i % 2) as f64)).collect();
//!
//! curve_insert_knot(0.3, 3, &mut knots, &mut points).unwrap();
//!
//! assert_eq!(knots.len(), points.len() + 3 + 1);
//! assert!(is_knot_vector_monotonic(&knots));
//! ```

pub mod error;
pub mod insert;
pub mod knots;
pub mod point;
pub mod primitives;
pub mod rational;

pub use error::{KnotError, KnotResult};
pub use insert::{
    curve_insert_knot, curve_insert_knot_times, curve_refine_knots, surface_insert_knot_u,
    surface_insert_knot_v,
};
pub use knots::{
    clamp_knot_vector, clamp_knot_vector_left, clamp_knot_vector_right, find_span,
    is_knot_vector_clamped, is_knot_vector_closed, is_knot_vector_closed_with_tolerance,
    is_knot_vector_monotonic, knot_domain, knot_multiplicity, make_clamped_uniform_knot_vector,
    make_uniform_knot_vector, validate_knot_vector,
};
pub use point::ControlPoint;
pub use primitives::{Point2, Point3};

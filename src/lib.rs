//! Simplify polylines in N dimensions by dropping points.
//!
//! A cheap radial distance prefilter removes points close to their predecessor,
//! then Ramer-Douglas-Peucker reduction keeps only points which deviate from the
//! simplified line by more than a tolerance.
//! Retained points are never moved or reordered, and the first and last points
//! of a path are always kept.
//!
//! [simplify] works directly on `nalgebra` points and [PointN] slices;
//! [Simplifier] works on any record type implementing [Coordinates],
//! measuring distance over a configured set of keys.
pub use nalgebra;

pub mod dimension;
pub mod error;
pub mod geometry;
pub mod simplify;
mod simplifier;

pub use dimension::{Coordinates, Dimension};
pub use error::{ConfigurationError, SimplifyError};
pub use geometry::{PointN, SquaredDistance};
pub use simplifier::Simplifier;
pub use simplify::{SimplifyOptions, Traversal};

pub type Precision = f64;

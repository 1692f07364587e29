//! Simplify linestrings.
//!
//! Linestrings are simplified by dropping points; retained points are never moved
//! and always appear in their original order.
//! Functions ending in `_keep` return the indices of retained points,
//! so that associated per-point data can be carried along.
mod radial;
mod rdp;

pub use radial::{radial_keep, radial_reduce};
pub use rdp::{rdp_keep, rdp_reduce};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SimplifyError;
use crate::geometry::SquaredDistance;
use crate::Precision;

/// How the Ramer-Douglas-Peucker reduction walks its sub-ranges.
///
/// Both produce identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Traversal {
    /// Recurse into each sub-range. Depth can reach the number of retained points.
    #[default]
    Recursive,
    /// Use a heap-allocated work stack; suitable for untrusted or very long input.
    Stack,
}

/// Parameters for a simplification pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimplifyOptions {
    /// Linear distance; squared internally.
    pub tolerance: Precision,
    /// Skip the radial distance prefilter so that Ramer-Douglas-Peucker
    /// decides every retained point.
    pub highest_quality: bool,
    pub traversal: Traversal,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            highest_quality: false,
            traversal: Traversal::default(),
        }
    }
}

impl SimplifyOptions {
    pub fn new(tolerance: Precision) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: Precision) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_highest_quality(mut self, highest_quality: bool) -> Self {
        self.highest_quality = highest_quality;
        self
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Tolerance must be non-negative (infinity is allowed).
    pub fn validate(&self) -> Result<(), SimplifyError> {
        if self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(SimplifyError::InvalidTolerance(self.tolerance))
        }
    }

    pub(crate) fn sq_tolerance(&self) -> Precision {
        self.tolerance * self.tolerance
    }
}

/// Indices of the points retained by [simplify].
///
/// Lines of 2 or fewer points are kept whole.
/// Otherwise the first and last points are always kept.
/// The tolerance is used as given; see [SimplifyOptions::validate].
pub fn simplify_keep<P: SquaredDistance>(points: &[P], options: &SimplifyOptions) -> Vec<usize> {
    if points.len() <= 2 {
        return (0..points.len()).collect();
    }
    let sq_tolerance = options.sq_tolerance();

    if options.highest_quality {
        return rdp::rdp_keep_sq(points, sq_tolerance, options.traversal);
    }

    let prefiltered = radial::radial_keep_sq(points, sq_tolerance);
    log::trace!(
        "radial prefilter kept {} of {} points",
        prefiltered.len(),
        points.len()
    );
    let subset: Vec<&P> = prefiltered.iter().map(|idx| &points[*idx]).collect();
    rdp::rdp_keep_sq(&subset, sq_tolerance, options.traversal)
        .into_iter()
        .map(|idx| prefiltered[idx])
        .collect()
}

/// Simplify a linestring with a radial distance prefilter
/// (unless `highest_quality`) followed by Ramer-Douglas-Peucker reduction.
///
/// `tolerance` is not validated: it is squared, so a negative value acts like its magnitude.
/// [Simplifier](crate::Simplifier) rejects negative and NaN tolerances instead.
///
/// ```
/// use simplify_path::simplify::simplify;
/// use simplify_path::nalgebra::Point2;
///
/// let line = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// ];
/// assert_eq!(simplify(&line, 1.0, false), vec![line[0], line[2]]);
/// ```
pub fn simplify<P: SquaredDistance + Clone>(
    points: &[P],
    tolerance: Precision,
    highest_quality: bool,
) -> Vec<P> {
    let options = SimplifyOptions::new(tolerance).with_highest_quality(highest_quality);
    simplify_keep(points, &options)
        .into_iter()
        .map(|idx| points[idx].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    fn pts2(raw: &[(f64, f64)]) -> Vec<Point2<f64>> {
        raw.iter().map(|(x, y)| Point2::new(*x, *y)).collect()
    }

    #[test]
    fn short_lines_unchanged() {
        let empty: Vec<Point2<f64>> = vec![];
        assert!(simplify(&empty, 1.0, false).is_empty());

        let one = pts2(&[(0.0, 0.0)]);
        assert_eq!(simplify(&one, 1.0, false), one);

        let two = pts2(&[(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(simplify(&two, 100.0, true), two);
    }

    #[test]
    fn collinear_middle_dropped() {
        let points = pts2(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(simplify(&points, 1.0, false), pts2(&[(0.0, 0.0), (2.0, 2.0)]));
        assert_eq!(simplify(&points, 1.0, true), pts2(&[(0.0, 0.0), (2.0, 2.0)]));
    }

    #[test]
    fn wide_tolerance() {
        let points = pts2(&[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)]);
        assert_eq!(
            simplify(&points, 100.0, false),
            pts2(&[(0.0, 0.0), (0.0, 100.0)])
        );
    }

    #[test]
    fn corner_retained() {
        let points = pts2(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(simplify(&points, 0.5, false), points);
    }

    #[test]
    fn spatial() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
        ];
        assert_eq!(simplify(&points, 1.0, false), vec![points[0], points[4]]);
        assert_eq!(simplify(&points, 0.5, false), points);
    }

    #[test]
    fn prefilter_changes_the_result() {
        // the peak at index 2 is within tolerance of index 1, so the prefilter hides it
        let points = pts2(&[(0.0, 0.0), (5.0, 5.0), (5.0, 5.9), (10.0, 0.0)]);
        let opts = SimplifyOptions::new(1.0);
        assert_eq!(simplify_keep(&points, &opts), vec![0, 1, 3]);
        assert_eq!(
            simplify_keep(&points, &opts.with_highest_quality(true)),
            vec![0, 2, 3]
        );
        assert_eq!(
            simplify_keep(
                &points,
                &opts
                    .with_highest_quality(true)
                    .with_traversal(Traversal::Stack)
            ),
            vec![0, 2, 3]
        );
    }

    #[test]
    fn prefilter_is_not_monotone() {
        // at the larger tolerance the prefilter drops index 1 instead of index 2,
        // exposing a point which Ramer-Douglas-Peucker keeps
        let points = pts2(&[(0.0, 0.0), (0.8, 0.9), (0.8, 1.8), (10.0, 0.0)]);
        assert_eq!(simplify_keep(&points, &SimplifyOptions::new(1.0)), vec![0, 3]);
        assert_eq!(
            simplify_keep(&points, &SimplifyOptions::new(1.5)),
            vec![0, 2, 3]
        );
    }

    /// Kept indices, checked to be the same with and without the prefilter.
    fn keep_both<P: SquaredDistance>(points: &[P], tolerance: Precision) -> Vec<usize> {
        let options = SimplifyOptions::new(tolerance);
        let fast = simplify_keep(points, &options);
        let best = simplify_keep(points, &options.with_highest_quality(true));
        assert_eq!(fast, best);
        fast
    }

    #[test]
    fn long_line() {
        let points: Vec<_> = (0..100).map(|i| Point2::new(i as f64, i as f64)).collect();
        assert_eq!(keep_both(&points, 1.0), vec![0, 99]);
    }

    #[test]
    fn segment_clamped_past_end() {
        // the middle point projects beyond the last point
        let points = pts2(&[(1.0, 1.0), (0.0, 0.0), (0.5, 0.0)]);
        assert_eq!(keep_both(&points, 1.0), vec![0, 2]);
        assert_eq!(simplify(&points, 1.0, false), pts2(&[(1.0, 1.0), (0.5, 0.0)]));
    }

    #[test]
    fn zigzag_within_tolerance() {
        let points = pts2(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (0.0, 2.0),
            (1.0, 2.0),
        ]);
        assert_eq!(keep_both(&points, 1.0), vec![0, 5]);
    }

    #[test]
    fn short_sine_wave() {
        let points: Vec<_> = (0..5)
            .map(|i| Point2::new(i as f64, (i as f64).sin()))
            .collect();
        assert_eq!(keep_both(&points, 1.0), vec![0, 2, 4]);
    }

    #[test]
    fn long_sine_wave_high_tolerance() {
        let points: Vec<_> = (0..100)
            .map(|i| Point2::new(i as f64, (i as f64).sin()))
            .collect();
        assert_eq!(keep_both(&points, 10.0), vec![0, 99]);
    }

    #[test]
    fn jagged_head_then_diagonal() {
        let points: Vec<_> = (0..100)
            .map(|i| {
                let x = if i <= 50 && i % 2 != 0 { 0.5 } else { i as f64 };
                let y = if i <= 50 { 0.5 } else { i as f64 };
                Point2::new(x, y)
            })
            .collect();
        assert_eq!(keep_both(&points, 1.0), vec![0, 50, 51, 99]);
    }

    #[test]
    fn spatial_not_on_a_line() {
        let points = vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.5, 0.0),
        ];
        assert_eq!(keep_both(&points, 1.0), vec![0, 2]);

        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.5),
        ];
        assert_eq!(keep_both(&points, 1.0), vec![0, 2]);
    }

    #[test]
    fn negative_tolerance_acts_like_magnitude() {
        let points = pts2(&[(0.0, 0.0), (0.5, 0.4), (1.0, 2.0), (3.0, 0.0)]);
        for hq in [false, true] {
            assert_eq!(simplify(&points, -1.0, hq), simplify(&points, 1.0, hq));
        }
        assert_eq!(rdp_keep(&points, -0.3, Traversal::Stack), vec![0, 2, 3]);
        assert_eq!(
            rdp_keep(&points, -0.3, Traversal::Stack),
            rdp_keep(&points, 0.3, Traversal::Stack)
        );
        assert_eq!(radial_keep(&points, -1.0), radial_keep(&points, 1.0));
    }

    #[test]
    fn options_validate() {
        assert!(SimplifyOptions::default().validate().is_ok());
        assert!(SimplifyOptions::new(0.0).validate().is_ok());
        assert!(SimplifyOptions::new(Precision::INFINITY).validate().is_ok());
        assert_eq!(
            SimplifyOptions::new(-1.0).validate(),
            Err(SimplifyError::InvalidTolerance(-1.0))
        );
        assert!(SimplifyOptions::new(Precision::NAN).validate().is_err());
    }
}

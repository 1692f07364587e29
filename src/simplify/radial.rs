//! Radial distance prefilter.
use crate::geometry::SquaredDistance;
use crate::Precision;

/// Indices of the points kept by the radial distance filter,
/// with tolerance given as a squared distance.
pub(crate) fn radial_keep_sq<P: SquaredDistance>(points: &[P], sq_tolerance: Precision) -> Vec<usize> {
    if points.len() <= 1 {
        return (0..points.len()).collect();
    }

    let mut out = vec![0];
    let mut prev = &points[0];
    for (idx, point) in points.iter().enumerate().skip(1) {
        if point.sq_dist(prev) > sq_tolerance {
            out.push(idx);
            prev = point;
        }
    }

    let last = points.len() - 1;
    if out.last() != Some(&last) {
        out.push(last);
    }
    out
}

/// Indices of points which are further than `tolerance` from the last kept point.
///
/// Single O(n) pass. The first and last points are always kept.
///
/// `tolerance` is not validated: it is squared, so a negative value acts like its magnitude.
pub fn radial_keep<P: SquaredDistance>(points: &[P], tolerance: Precision) -> Vec<usize> {
    radial_keep_sq(points, tolerance * tolerance)
}

/// Drop points which are within `tolerance` of the last kept point.
pub fn radial_reduce<P: SquaredDistance + Clone>(points: &[P], tolerance: Precision) -> Vec<P> {
    radial_keep(points, tolerance)
        .into_iter()
        .map(|idx| points[idx].clone())
        .collect()
}

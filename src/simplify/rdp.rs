//! Ramer-Douglas-Peucker reduction, recursive and with an explicit stack.
use super::Traversal;
use crate::geometry::SquaredDistance;
use crate::Precision;

/// Index of the interior point of `(first, last)` furthest from the chord,
/// if it is further than the tolerance.
///
/// Ties go to the lowest index.
fn furthest<P: SquaredDistance>(
    points: &[P],
    first: usize,
    last: usize,
    sq_tolerance: Precision,
) -> Option<usize> {
    let mut greatest = (None, sq_tolerance);
    for (idx, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let d2 = point.sq_seg_dist(&points[first], &points[last]);
        if d2 > greatest.1 {
            greatest = (Some(idx), d2);
        }
    }
    greatest.0
}

fn rdp_keep_inner<P: SquaredDistance>(
    points: &[P],
    first: usize,
    last: usize,
    sq_tolerance: Precision,
    to_keep: &mut Vec<usize>,
) {
    let Some(idx) = furthest(points, first, last, sq_tolerance) else {
        return;
    };
    if idx - first > 1 {
        rdp_keep_inner(points, first, idx, sq_tolerance, to_keep);
    }
    to_keep.push(idx);
    if last - idx > 1 {
        rdp_keep_inner(points, idx, last, sq_tolerance, to_keep);
    }
}

/// Same output as [rdp_keep_inner], without growing the call stack.
fn rdp_keep_stack<P: SquaredDistance>(
    points: &[P],
    first: usize,
    last: usize,
    sq_tolerance: Precision,
    to_keep: &mut Vec<usize>,
) {
    let mut stack = vec![(first, last)];
    let mut pending = Vec::new();
    while let Some((first, last)) = stack.pop() {
        let Some(idx) = furthest(points, first, last, sq_tolerance) else {
            continue;
        };
        pending.push(idx);
        // right pushed first so the left sub-range is processed first
        if last - idx > 1 {
            stack.push((idx, last));
        }
        if idx - first > 1 {
            stack.push((first, idx));
        }
    }
    // pre-order discovery; emit in path order like the recursive version
    pending.sort_unstable();
    to_keep.append(&mut pending);
}

pub(crate) fn rdp_keep_sq<P: SquaredDistance>(
    points: &[P],
    sq_tolerance: Precision,
    traversal: Traversal,
) -> Vec<usize> {
    if points.len() <= 2 {
        return (0..points.len()).collect();
    }
    let last = points.len() - 1;

    let mut out = vec![0];
    match traversal {
        Traversal::Recursive => rdp_keep_inner(points, 0, last, sq_tolerance, &mut out),
        Traversal::Stack => rdp_keep_stack(points, 0, last, sq_tolerance, &mut out),
    }
    out.push(last);
    out
}

/// Indices of the points kept by Ramer-Douglas-Peucker reduction.
///
/// The first and last points are always kept.
/// Interior points are kept if they are further than `tolerance`
/// from the simplified line around them.
///
/// `tolerance` is not validated: it is squared, so a negative value acts like its magnitude.
pub fn rdp_keep<P: SquaredDistance>(
    points: &[P],
    tolerance: Precision,
    traversal: Traversal,
) -> Vec<usize> {
    rdp_keep_sq(points, tolerance * tolerance, traversal)
}

/// Reduce a linestring using Ramer-Douglas-Peucker.
pub fn rdp_reduce<P: SquaredDistance + Clone>(
    points: &[P],
    tolerance: Precision,
    traversal: Traversal,
) -> Vec<P> {
    rdp_keep(points, tolerance, traversal)
        .into_iter()
        .map(|idx| points[idx].clone())
        .collect()
}

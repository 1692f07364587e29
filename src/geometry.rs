//! Squared point-point and point-segment distances.
//!
//! Statically-sized points (`nalgebra::Point<Precision, D>`) get their arithmetic
//! unrolled by monomorphisation; [PointN] folds over a runtime number of axes.
use nalgebra::{distance_squared, Point};

use crate::Precision;

/// Points which the simplification algorithms can measure.
///
/// Both distances are squared so that no square roots are taken;
/// compare them against a squared tolerance.
pub trait SquaredDistance {
    /// Squared euclidean distance between two points.
    fn sq_dist(&self, other: &Self) -> Precision;

    /// Squared euclidean distance from this point to the closest point
    /// on the segment from `start` to `end`.
    ///
    /// The segment parameter `t` of the projection is resolved as follows:
    /// `t > 1` snaps to `end`, otherwise `t > 0` uses the projection,
    /// otherwise (including `t == 0`) `start` is used.
    /// A zero-length segment falls back to the distance to `start`.
    fn sq_seg_dist(&self, start: &Self, end: &Self) -> Precision;
}

impl<const D: usize> SquaredDistance for Point<Precision, D> {
    fn sq_dist(&self, other: &Self) -> Precision {
        distance_squared(self, other)
    }

    fn sq_seg_dist(&self, start: &Self, end: &Self) -> Precision {
        let direction = end - start;
        if direction.iter().all(|c| *c == 0.0) {
            return distance_squared(self, start);
        }

        let t = (self - start).dot(&direction) / direction.norm_squared();
        if t > 1.0 {
            distance_squared(self, end)
        } else if t > 0.0 {
            distance_squared(self, &(start + direction * t))
        } else {
            distance_squared(self, start)
        }
    }
}

impl<P: SquaredDistance + ?Sized> SquaredDistance for &P {
    fn sq_dist(&self, other: &Self) -> Precision {
        (**self).sq_dist(*other)
    }

    fn sq_seg_dist(&self, start: &Self, end: &Self) -> Precision {
        (**self).sq_seg_dist(*start, *end)
    }
}

/// A point with a runtime number of dimensions, borrowing its coordinates.
///
/// All points measured against each other must have the same length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointN<'a>(&'a [Precision]);

impl<'a> PointN<'a> {
    pub fn new(coords: &'a [Precision]) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &'a [Precision] {
        self.0
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }
}

impl<'a> From<&'a [Precision]> for PointN<'a> {
    fn from(coords: &'a [Precision]) -> Self {
        Self(coords)
    }
}

fn dot(a: impl Iterator<Item = Precision>, b: impl Iterator<Item = Precision>) -> Precision {
    a.zip(b).fold(0.0, |acc, (a, b)| acc + a * b)
}

impl SquaredDistance for PointN<'_> {
    fn sq_dist(&self, other: &Self) -> Precision {
        debug_assert_eq!(self.dim(), other.dim());
        self.0.iter().zip(other.0).fold(0.0, |acc, (a, b)| {
            let d = a - b;
            acc + d * d
        })
    }

    fn sq_seg_dist(&self, start: &Self, end: &Self) -> Precision {
        debug_assert_eq!(self.dim(), start.dim());
        debug_assert_eq!(self.dim(), end.dim());

        let direction = || start.0.iter().zip(end.0).map(|(s, e)| e - s);
        if direction().all(|d| d == 0.0) {
            return self.sq_dist(start);
        }

        let offset = self.0.iter().zip(start.0).map(|(p, s)| p - s);
        let t = dot(offset, direction()) / dot(direction(), direction());

        self.0
            .iter()
            .zip(start.0.iter().zip(end.0))
            .fold(0.0, |acc, (p, (s, e))| {
                let closest = if t > 1.0 {
                    *e
                } else if t > 0.0 {
                    s + (e - s) * t
                } else {
                    *s
                };
                let d = p - closest;
                acc + d * d
            })
    }
}

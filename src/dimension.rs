//! Reading coordinates out of arbitrary point records,
//! and choosing distance routines by dimensionality.
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use nalgebra::{Point, Point2, Point3};
use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SimplifyError;
use crate::geometry::PointN;
use crate::simplify::{simplify_keep, SimplifyOptions};
use crate::Precision;

/// Records which expose a numeric value for some coordinate keys.
///
/// Any other fields of the record are ignored.
pub trait Coordinates<K> {
    /// The value at `key`, or [None] if the record has no such numeric field.
    fn coordinate(&self, key: &K) -> Option<Precision>;
}

impl<K: Hash + Eq, V: ToPrimitive, S: BuildHasher> Coordinates<K> for HashMap<K, V, S> {
    fn coordinate(&self, key: &K) -> Option<Precision> {
        self.get(key).and_then(ToPrimitive::to_f64)
    }
}

impl<K: Ord, V: ToPrimitive> Coordinates<K> for BTreeMap<K, V> {
    fn coordinate(&self, key: &K) -> Option<Precision> {
        self.get(key).and_then(ToPrimitive::to_f64)
    }
}

impl<V: ToPrimitive, const N: usize> Coordinates<usize> for [V; N] {
    fn coordinate(&self, key: &usize) -> Option<Precision> {
        self.get(*key).and_then(ToPrimitive::to_f64)
    }
}

impl<V: ToPrimitive> Coordinates<usize> for Vec<V> {
    fn coordinate(&self, key: &usize) -> Option<Precision> {
        self.get(*key).and_then(ToPrimitive::to_f64)
    }
}

impl<const D: usize> Coordinates<usize> for Point<Precision, D> {
    fn coordinate(&self, key: &usize) -> Option<Precision> {
        self.coords.get(*key).copied()
    }
}

/// Read every configured coordinate of every point, row-major.
pub(crate) fn gather<K: Debug, T: Coordinates<K>>(
    keys: &[K],
    points: &[T],
) -> Result<Vec<Precision>, SimplifyError> {
    let mut coords = Vec::with_capacity(points.len() * keys.len());
    for (index, point) in points.iter().enumerate() {
        for key in keys {
            let value = point
                .coordinate(key)
                .ok_or_else(|| SimplifyError::MissingCoordinate {
                    index,
                    key: format!("{key:?}"),
                })?;
            if !value.is_finite() {
                return Err(SimplifyError::NonFiniteCoordinate {
                    index,
                    key: format!("{key:?}"),
                    value,
                });
            }
            coords.push(value);
        }
    }
    Ok(coords)
}

/// Which distance routines a [Simplifier](crate::Simplifier) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimension {
    /// Two keys; unrolled 2D arithmetic.
    Planar,
    /// Three keys; unrolled 3D arithmetic.
    Spatial,
    /// Any other number of keys; folds over every axis.
    General(usize),
}

impl Dimension {
    pub fn from_len(n_keys: usize) -> Self {
        match n_keys {
            2 => Self::Planar,
            3 => Self::Spatial,
            n => Self::General(n),
        }
    }

    /// Number of coordinate axes.
    pub fn n_axes(&self) -> usize {
        match self {
            Self::Planar => 2,
            Self::Spatial => 3,
            Self::General(n) => *n,
        }
    }

    /// Indices of retained points, given gathered coordinates.
    pub(crate) fn keep(&self, coords: &[Precision], options: &SimplifyOptions) -> Vec<usize> {
        match self {
            Self::Planar => {
                let points: Vec<_> = coords
                    .chunks_exact(2)
                    .map(|c| Point2::new(c[0], c[1]))
                    .collect();
                simplify_keep(&points, options)
            }
            Self::Spatial => {
                let points: Vec<_> = coords
                    .chunks_exact(3)
                    .map(|c| Point3::new(c[0], c[1], c[2]))
                    .collect();
                simplify_keep(&points, options)
            }
            Self::General(n) => {
                let points: Vec<_> = coords.chunks_exact(*n).map(PointN::new).collect();
                simplify_keep(&points, options)
            }
        }
    }
}

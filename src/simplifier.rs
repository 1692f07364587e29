//! Simplification of keyed point records.
use std::fmt::Debug;

use crate::dimension::{gather, Coordinates, Dimension};
use crate::error::{ConfigurationError, SimplifyError};
use crate::simplify::SimplifyOptions;
use crate::Precision;

/// Simplifies paths of arbitrary point records, measuring distance over a fixed set of keys.
///
/// The distance routines are chosen once, from the number of keys, when the simplifier is built.
///
/// ```
/// use std::collections::HashMap;
/// use simplify_path::Simplifier;
///
/// let path: Vec<HashMap<String, f64>> = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]
///     .into_iter()
///     .map(|(x, y)| HashMap::from([("x".to_string(), x), ("y".to_string(), y)]))
///     .collect();
///
/// let simplified = Simplifier::default().simplify(&path, 1.0, false).unwrap();
/// assert_eq!(simplified, vec![path[0].clone(), path[2].clone()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Simplifier<K = String> {
    keys: Vec<K>,
    dimension: Dimension,
}

impl<K: Debug + PartialEq> Simplifier<K> {
    /// Measure points over the given coordinate keys, in order.
    ///
    /// Fails if there are fewer than 2 keys, or any key is repeated.
    pub fn new<I: IntoIterator<Item = K>>(keys: I) -> Result<Self, ConfigurationError> {
        let keys: Vec<K> = keys.into_iter().collect();
        if keys.len() < 2 {
            return Err(ConfigurationError::TooFewDimensions { found: keys.len() });
        }
        if let Some(key) = keys
            .iter()
            .enumerate()
            .find_map(|(idx, key)| keys[..idx].contains(key).then_some(key))
        {
            return Err(ConfigurationError::DuplicateKey {
                key: format!("{key:?}"),
            });
        }

        let dimension = Dimension::from_len(keys.len());
        log::debug!("simplifying over keys {:?} as {:?}", keys, dimension);
        Ok(Self { keys, dimension })
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Indices of the points which survive simplification, in ascending order.
    ///
    /// Paths of 2 or fewer points are kept whole without being inspected.
    /// Otherwise every point must have a finite value for every key.
    pub fn keep_with<T: Coordinates<K>>(
        &self,
        points: &[T],
        options: &SimplifyOptions,
    ) -> Result<Vec<usize>, SimplifyError> {
        if points.len() <= 2 {
            return Ok((0..points.len()).collect());
        }
        options.validate()?;

        let coords = gather(&self.keys, points)?;
        let kept = self.dimension.keep(&coords, options);
        log::debug!(
            "simplified {} points to {} (tolerance {}, highest quality {})",
            points.len(),
            kept.len(),
            options.tolerance,
            options.highest_quality
        );
        Ok(kept)
    }

    /// Simplify a path; the result is made of clones of the retained input points.
    pub fn simplify_with<T: Coordinates<K> + Clone>(
        &self,
        points: &[T],
        options: &SimplifyOptions,
    ) -> Result<Vec<T>, SimplifyError> {
        let kept = self.keep_with(points, options)?;
        Ok(kept.into_iter().map(|idx| points[idx].clone()).collect())
    }

    /// Simplify a path to within a linear `tolerance`.
    ///
    /// Unless `highest_quality` is set, points close to their predecessor are dropped
    /// before the Ramer-Douglas-Peucker pass, which is faster but may miss
    /// points Ramer-Douglas-Peucker alone would keep.
    pub fn simplify<T: Coordinates<K> + Clone>(
        &self,
        points: &[T],
        tolerance: Precision,
        highest_quality: bool,
    ) -> Result<Vec<T>, SimplifyError> {
        let options = SimplifyOptions::new(tolerance).with_highest_quality(highest_quality);
        self.simplify_with(points, &options)
    }
}

impl Default for Simplifier<String> {
    /// Planar points keyed by `"x"` and `"y"`.
    fn default() -> Self {
        Self {
            keys: vec!["x".to_string(), "y".to_string()],
            dimension: Dimension::Planar,
        }
    }
}

impl Simplifier<usize> {
    /// Points indexed by axis, using axes `0..n_axes`.
    pub fn axes(n_axes: usize) -> Result<Self, ConfigurationError> {
        Self::new(0..n_axes)
    }
}

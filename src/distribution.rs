// src/distribution.rs
//! Label-frequency histograms and the distance/deficiency calculus.

use crate::error::{GraphError, Result};
use crate::label_set::LabelSet;

/// An immutable histogram over the label alphabet.
///
/// Totals differ by origin: a global distribution sums to the vertex count,
/// a neighborhood distribution to `degree(v) + 1`. Nothing here normalizes
/// the stored counts; comparisons work on proportions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDistribution {
    counts: Vec<usize>,
    total: usize,
}

impl LabelDistribution {
    /// Builds a distribution from per-label counts.
    pub fn from_counts(counts: Vec<usize>) -> Result<Self> {
        if counts.is_empty() {
            return Err(GraphError::EmptyAlphabet);
        }
        let total = counts.iter().sum();
        Ok(Self { counts, total })
    }

    /// Internal constructor for counts derived from a live graph, whose
    /// alphabet is non-empty by construction.
    pub(crate) fn from_counts_unchecked(counts: Vec<usize>) -> Self {
        debug_assert!(!counts.is_empty(), "alphabet must be non-empty");
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Returns the alphabet size.
    #[must_use]
    pub fn alphabet_len(&self) -> usize {
        self.counts.len()
    }

    /// Returns the raw count for `label`.
    #[must_use]
    pub fn count(&self, label: usize) -> usize {
        self.counts[label]
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the fraction of the total held by `label`.
    ///
    /// Defined as `0.0` when the total is zero, which only arises for the
    /// global distribution of a vertex-free graph.
    #[must_use]
    pub fn proportion(&self, label: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts[label] as f64 / self.total as f64
    }

    /// Total variation distance between the two proportion vectors.
    ///
    /// Computed as the sum over labels of the positive part of
    /// `other.proportion(i) - self.proportion(i)`. Both proportion vectors
    /// sum to 1, so this equals `0.5 * sum(|p_i - q_i|)`: symmetric, zero
    /// for identical shapes, bounded by 1, and monotone in divergence.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.alphabet_len(),
            other.alphabet_len(),
            "distance requires a shared alphabet"
        );
        (0..self.alphabet_len())
            .map(|label| (other.proportion(label) - self.proportion(label)).max(0.0))
            .sum()
    }

    /// Returns the labels this distribution under-represents relative to
    /// `global`.
    ///
    /// Empty exactly when `self.distance(global) <= alpha`. Otherwise the
    /// set holds every label whose global proportion exceeds the local one;
    /// a failing distribution always has at least one such label, since its
    /// distance is a sum of positive shortfalls.
    #[must_use]
    pub fn deficiencies(&self, global: &Self, alpha: f64) -> LabelSet {
        if self.distance(global) <= alpha {
            return LabelSet::new();
        }
        (0..self.alphabet_len())
            .filter(|&label| global.proportion(label) > self.proportion(label))
            .collect()
    }
}

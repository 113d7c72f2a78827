// src/proximity.rs
//! The alpha-proximity privacy oracle.
//!
//! Every evaluation is a full pass over all vertices. The predicate is the
//! privacy oracle itself, never an estimate, so nothing here may be
//! approximated or algebraically short-cut.

use crate::distribution::LabelDistribution;
use crate::graph::LabelledGraph;

/// Builds the graph-wide label distribution (one count per vertex).
///
/// Recomputed per repair attempt rather than cached: labels never change,
/// so recomputation is always correct, and it is cheap next to the
/// per-vertex pass that follows.
#[must_use]
pub fn global_distribution(graph: &LabelledGraph) -> LabelDistribution {
    let mut counts = vec![0; graph.label_count()];
    for &label in graph.labels() {
        counts[label] += 1;
    }
    LabelDistribution::from_counts_unchecked(counts)
}

/// Builds the neighborhood distribution of `v`: its own label plus the
/// label of every current neighbor (total = degree + 1).
///
/// Must be re-derived after any edge touching `v` is added.
#[must_use]
pub fn neighborhood_distribution(graph: &LabelledGraph, v: usize) -> LabelDistribution {
    let mut counts = vec![0; graph.label_count()];
    counts[graph.label(v)] += 1;
    for u in graph.neighbors(v) {
        counts[graph.label(u)] += 1;
    }
    LabelDistribution::from_counts_unchecked(counts)
}

/// Returns the maximum neighborhood-to-global distance over all vertices.
#[must_use]
pub fn max_nad_distance(graph: &LabelledGraph) -> f64 {
    let global = global_distribution(graph);
    (0..graph.vertex_count())
        .map(|v| neighborhood_distribution(graph, v).distance(&global))
        .fold(0.0, f64::max)
}

/// The privacy predicate: `true` iff every vertex's neighborhood label
/// distribution lies within `alpha` of the global distribution.
#[must_use]
pub fn is_alpha_proximal(graph: &LabelledGraph, alpha: f64) -> bool {
    max_nad_distance(graph) <= alpha
}

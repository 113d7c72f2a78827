// src/repair/hopeful.rs
//! Naive repair: insert random edges until the predicate holds.

use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::LabelledGraph;
use crate::proximity;
use crate::repair::RepairReport;

/// Inserts uniformly random absent edges until the graph is alpha-proximal.
///
/// Oblivious to which labels are deficient, so it may add far more edges
/// than the greedy strategy. Kept as the baseline for comparison; every
/// pass re-evaluates the full oracle, so cost is dominated by the number
/// of insertions it takes to stumble into proximity.
pub fn repair<R: Rng>(graph: &mut LabelledGraph, alpha: f64, rng: &mut R) -> Result<RepairReport> {
    super::validate_alpha(alpha)?;

    let mut edges_added = 0;
    let mut iterations = 0;

    while !proximity::is_alpha_proximal(graph, alpha) {
        if graph.add_random_edge(rng).is_none() {
            // Complete and still failing: no repair can exist.
            return Err(GraphError::Unattainable { edges_added });
        }
        edges_added += 1;
        iterations += 1;
    }

    Ok(RepairReport {
        edges_added,
        iterations,
        max_distance: proximity::max_nad_distance(graph),
    })
}

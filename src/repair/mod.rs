// src/repair/mod.rs
//! Edge-insertion repair strategies and their shared surface.

pub mod greedy;
pub mod hopeful;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::LabelledGraph;

/// How violations of the proximity predicate are repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Insert uniformly random edges until the predicate holds.
    Hopeful,
    /// Pair deficient vertices so every inserted edge relieves a recorded
    /// deficiency on both sides of the match.
    #[default]
    Greedy,
}

/// Outcome of a successful repair run.
#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    /// Edges inserted over the whole run.
    pub edges_added: usize,
    /// Outer passes (proximity re-checks that found a violation).
    pub iterations: usize,
    /// The oracle value after repair.
    pub max_distance: f64,
}

/// Repairs `graph` in place until it is alpha-proximal.
///
/// Edges are only ever inserted, never removed, and labels stay untouched.
/// A graph that reaches completeness while still failing the predicate
/// yields [`GraphError::Unattainable`]: alpha is infeasible for this
/// labelling.
pub fn anonymize<R: Rng>(
    graph: &mut LabelledGraph,
    alpha: f64,
    strategy: Strategy,
    rng: &mut R,
) -> Result<RepairReport> {
    match strategy {
        Strategy::Hopeful => hopeful::repair(graph, alpha, rng),
        Strategy::Greedy => greedy::repair(graph, alpha, rng),
    }
}

/// The tolerance must be a finite non-negative value; both strategies
/// reject anything else before touching the graph.
pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(GraphError::InvalidAlpha(alpha));
    }
    Ok(())
}

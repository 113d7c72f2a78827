// src/repair/greedy.rs
//! Deficiency-guided repair.
//!
//! Instead of random insertions, each pass pairs up vertices that still
//! fail the predicate so that one edge relieves a recorded deficiency on
//! both endpoints: the mate needs this vertex's label, and carries a label
//! this vertex needs.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::LabelledGraph;
use crate::label_set::LabelSet;
use crate::proximity;
use crate::repair::RepairReport;

/// One entry of the per-pass work list: a failing vertex and the labels its
/// neighborhood under-represents. Mutated in place as mates are matched,
/// then discarded at the end of the pass.
struct VisitEntry {
    vertex: usize,
    deficiencies: LabelSet,
}

/// Repairs the graph by matching deficient vertices pairwise.
///
/// Trades a more expensive per-pass scan for far fewer inserted edges than
/// the random baseline. A pass that finds no eligible mates falls back to
/// one random edge so the run cannot stall short of completeness.
pub fn repair<R: Rng>(graph: &mut LabelledGraph, alpha: f64, rng: &mut R) -> Result<RepairReport> {
    super::validate_alpha(alpha)?;

    let mut edges_added = 0;
    let mut iterations = 0;

    while !proximity::is_alpha_proximal(graph, alpha) {
        if graph.is_complete() {
            return Err(GraphError::Unattainable { edges_added });
        }
        iterations += 1;

        let inserted = run_iteration(graph, alpha, rng);
        edges_added += inserted;

        if inserted == 0 {
            // A zero-insert pass leaves the graph unchanged; one random
            // edge breaks the deadlock.
            if graph.add_random_edge(rng).is_some() {
                edges_added += 1;
            }
        }
    }

    Ok(RepairReport {
        edges_added,
        iterations,
        max_distance: proximity::max_nad_distance(graph),
    })
}

/// Runs one matching pass and returns the number of edges inserted.
///
/// The pass recomputes the global distribution, collects every vertex with
/// a non-empty deficiency set, shuffles them, and then scans forward from
/// each entry for mates. A mate `u` for vertex `v` and deficient label
/// `lab` must satisfy two conditions: `u`'s recorded set still contains
/// `v`'s label, and `u` itself carries `lab`. On a successful insertion
/// `v`'s label is cleared from the mate's recorded set; `v`'s own set is
/// left alone, since its remaining needs are re-derived at the next pass.
///
/// Matching is first-fit in scan order, deliberately not an optimal
/// matching; candidates already adjacent to `v` are skipped and the scan
/// continues.
pub fn run_iteration<R: Rng>(graph: &mut LabelledGraph, alpha: f64, rng: &mut R) -> usize {
    let global = proximity::global_distribution(graph);

    let mut visits: Vec<VisitEntry> = (0..graph.vertex_count())
        .filter_map(|vertex| {
            let deficiencies =
                proximity::neighborhood_distribution(graph, vertex).deficiencies(&global, alpha);
            if deficiencies.is_empty() {
                None
            } else {
                Some(VisitEntry {
                    vertex,
                    deficiencies,
                })
            }
        })
        .collect();

    // Spreads insertions across the label space instead of concentrating
    // them near the start of vertex enumeration.
    visits.shuffle(rng);

    let mut inserted = 0;

    for i in 0..visits.len() {
        let vertex = visits[i].vertex;
        let vertex_label = graph.label(vertex);

        // Earlier entries may already have cleared some of this entry's
        // bits by matching with it; resolve whatever is still recorded,
        // in ascending label order.
        let needs: Vec<usize> = visits[i].deficiencies.iter().collect();

        for lab in needs {
            for j in (i + 1)..visits.len() {
                let mate = visits[j].vertex;
                if !visits[j].deficiencies.contains(vertex_label) || graph.label(mate) != lab {
                    continue;
                }
                if graph.add_edge(vertex, mate) {
                    visits[j].deficiencies.remove(vertex_label);
                    inserted += 1;
                    break;
                }
            }
        }
    }

    inserted
}

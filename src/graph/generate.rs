// src/graph/generate.rs
//! Synthetic labelled graphs for experiments and tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::LabelledGraph;

/// Relabels the graph so every label covers `n / l` vertices, with the
/// `n % l` leftover slots going to labels picked at random.
///
/// Which vertices receive which label is uniformly shuffled.
pub fn evenly_distribute_labels<R: Rng>(graph: &mut LabelledGraph, rng: &mut R) {
    let n = graph.vertex_count();
    let l = graph.label_count();

    let mut pool = Vec::with_capacity(n);
    for label in 0..l {
        pool.extend(std::iter::repeat(label).take(n / l));
    }

    let mut extras: Vec<usize> = (0..l).collect();
    extras.shuffle(rng);
    pool.extend(extras.into_iter().take(n % l));

    pool.shuffle(rng);
    for (v, label) in pool.into_iter().enumerate() {
        graph.set_label(v, label);
    }
}

/// Builds a G(n, p) graph: each unordered vertex pair is an edge with
/// probability `edge_prob`, and labels are evenly distributed.
pub fn random_graph<R: Rng>(
    n: usize,
    l: usize,
    edge_prob: f64,
    rng: &mut R,
) -> Result<LabelledGraph> {
    if !(0.0..=1.0).contains(&edge_prob) {
        return Err(GraphError::InvalidProbability(edge_prob));
    }

    let mut graph = LabelledGraph::new(n, l)?;
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(edge_prob) {
                graph.add_edge(u, v);
            }
        }
    }
    evenly_distribute_labels(&mut graph, rng);
    Ok(graph)
}

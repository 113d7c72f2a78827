// src/graph/mod.rs
//! Labelled undirected graph storage and mutation primitives.

pub mod generate;
pub mod io;

use std::collections::HashSet;

use rand::Rng;

use crate::error::{GraphError, Result};

/// An undirected graph whose vertices each carry one label from the
/// alphabet `0..l`.
///
/// Vertices are `0..n`; adjacency is a hash set per vertex with both
/// directions stored. Edges are only ever added, never removed.
#[derive(Debug, Clone)]
pub struct LabelledGraph {
    labels: Vec<usize>,
    adjacency: Vec<HashSet<usize>>,
    label_count: usize,
    edge_count: usize,
}

impl LabelledGraph {
    /// Creates a graph with `n` isolated vertices, all carrying label 0.
    pub fn new(n: usize, l: usize) -> Result<Self> {
        if l == 0 {
            return Err(GraphError::EmptyAlphabet);
        }
        Ok(Self {
            labels: vec![0; n],
            adjacency: vec![HashSet::new(); n],
            label_count: l,
            edge_count: 0,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the label alphabet size.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the label of vertex `v`.
    #[must_use]
    pub fn label(&self, v: usize) -> usize {
        self.labels[v]
    }

    /// Assigns a label to vertex `v`.
    pub fn set_label(&mut self, v: usize, label: usize) {
        debug_assert!(label < self.label_count, "label out of alphabet");
        self.labels[v] = label;
    }

    /// Returns all vertex labels, indexed by vertex id.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Iterates over the current neighbors of `v` (unordered).
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[v].iter().copied()
    }

    /// Returns the degree of vertex `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Returns `true` if `u` and `v` are adjacent.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(&v)
    }

    /// Inserts the undirected edge `(u, v)`.
    ///
    /// Returns `true` only when the edge is newly added. Duplicate edges
    /// and self-loops are rejected and leave the graph unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v {
            return false;
        }
        if self.adjacency[u].insert(v) {
            self.adjacency[v].insert(u);
            self.edge_count += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if every vertex pair is adjacent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.edge_count == n * n.saturating_sub(1) / 2
    }

    /// Inserts one uniformly random absent edge via rejection sampling.
    ///
    /// Returns the inserted pair, or `None` when the graph is complete.
    pub fn add_random_edge<R: Rng>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.is_complete() {
            return None;
        }
        let n = self.vertex_count();
        loop {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if self.add_edge(u, v) {
                return Some((u, v));
            }
        }
    }
}

// src/graph/io.rs
//! Plain-text graph file parsing and serialization.
//!
//! The format is a header line `n l`, then exactly `n` vertex lines. Line
//! `v` holds `label(v)` followed by the neighbors of `v`, whitespace
//! separated. An edge may appear on either or both endpoint lines; loading
//! inserts it reciprocally either way.

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::LabelledGraph;

/// Reads a labelled graph from a file.
pub fn read_graph(path: &Path) -> Result<LabelledGraph> {
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_graph(&content)
}

/// Parses a labelled graph from its text representation.
pub fn parse_graph(input: &str) -> Result<LabelledGraph> {
    let mut lines = input.lines();

    let header = lines
        .next()
        .ok_or_else(|| parse_err(1, "missing `n l` header"))?;
    let (n, l) = parse_header(header)?;
    let mut graph = LabelledGraph::new(n, l)?;

    for v in 0..n {
        let line_no = v + 2;
        let line = lines
            .next()
            .ok_or_else(|| parse_err(line_no, format!("missing line for vertex {v}")))?;
        let mut tokens = line.split_whitespace();

        let label_tok = tokens
            .next()
            .ok_or_else(|| parse_err(line_no, format!("missing label for vertex {v}")))?;
        let label = parse_number(line_no, label_tok)?;
        if label >= l {
            return Err(parse_err(
                line_no,
                format!("label {label} outside alphabet 0..{l}"),
            ));
        }
        graph.set_label(v, label);

        for tok in tokens {
            let u = parse_number(line_no, tok)?;
            if u >= n {
                return Err(parse_err(
                    line_no,
                    format!("neighbor {u} outside vertex range 0..{n}"),
                ));
            }
            if u == v {
                return Err(parse_err(line_no, format!("self-loop on vertex {v}")));
            }
            graph.add_edge(v, u);
        }
    }

    for (offset, line) in lines.enumerate() {
        if !line.trim().is_empty() {
            return Err(parse_err(
                n + 2 + offset,
                "trailing content after last vertex line",
            ));
        }
    }

    Ok(graph)
}

/// Formats a graph in the same text format, neighbors sorted ascending so
/// output is deterministic.
#[must_use]
pub fn format_graph(graph: &LabelledGraph) -> String {
    let mut out = format!("{} {}\n", graph.vertex_count(), graph.label_count());
    for v in 0..graph.vertex_count() {
        let mut neighbors: Vec<usize> = graph.neighbors(v).collect();
        neighbors.sort_unstable();

        let mut tokens = vec![graph.label(v).to_string()];
        tokens.extend(neighbors.iter().map(ToString::to_string));
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}

/// Writes a graph to a file.
pub fn write_graph(path: &Path, graph: &LabelledGraph) -> Result<()> {
    fs::write(path, format_graph(graph)).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let [n_tok, l_tok] = tokens[..] else {
        return Err(parse_err(1, "header must be `n l`"));
    };
    let n = parse_number(1, n_tok)?;
    let l = parse_number(1, l_tok)?;
    if n == 0 {
        return Err(parse_err(1, "vertex count must be positive"));
    }
    if l == 0 {
        return Err(parse_err(1, "label alphabet must be non-empty"));
    }
    Ok((n, l))
}

fn parse_number(line: usize, token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| parse_err(line, format!("invalid number `{token}`")))
}

fn parse_err(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_line(input: &str) -> usize {
        match parse_graph(input) {
            Err(GraphError::Parse { line, .. }) => line,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_minimal_graph() {
        let g = parse_graph("2 2\n0 1\n1\n").unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.label_count(), 2);
        assert_eq!(g.label(0), 0);
        assert_eq!(g.label(1), 1);
        assert!(g.has_edge(0, 1));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_edges_added_reciprocally_from_one_side() {
        let g = parse_graph("3 1\n0 2\n0\n0\n").unwrap();
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edge_listings_collapse() {
        // Edge (0, 1) appears on both endpoint lines.
        let g = parse_graph("2 1\n0 1\n0 0\n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_format_sorts_neighbors() {
        let mut g = LabelledGraph::new(3, 2).unwrap();
        g.set_label(1, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 1);
        assert_eq!(format_graph(&g), "3 2\n0 1 2\n1 0\n0 0\n");
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let input = "4 3\n2 1 3\n0 0\n1\n2 0\n";
        let g = parse_graph(input).unwrap();
        let again = parse_graph(&format_graph(&g)).unwrap();

        assert_eq!(again.vertex_count(), g.vertex_count());
        assert_eq!(again.labels(), g.labels());
        assert_eq!(again.edge_count(), g.edge_count());
        for v in 0..g.vertex_count() {
            let mut a: Vec<_> = g.neighbors(v).collect();
            let mut b: Vec<_> = again.neighbors(v).collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "adjacency of vertex {v} must survive");
        }
    }

    #[test]
    fn test_reject_empty_input() {
        assert_eq!(reject_line(""), 1);
    }

    #[test]
    fn test_reject_malformed_header() {
        assert_eq!(reject_line("3\n"), 1);
        assert_eq!(reject_line("3 2 9\n"), 1);
        assert_eq!(reject_line("x 2\n"), 1);
    }

    #[test]
    fn test_reject_zero_vertices_or_labels() {
        assert_eq!(reject_line("0 2\n"), 1);
        assert_eq!(reject_line("2 0\n"), 1);
    }

    #[test]
    fn test_reject_missing_vertex_line() {
        assert_eq!(reject_line("2 1\n0\n"), 3);
    }

    #[test]
    fn test_reject_label_outside_alphabet() {
        assert_eq!(reject_line("2 2\n2\n0\n"), 2);
    }

    #[test]
    fn test_reject_neighbor_out_of_range() {
        assert_eq!(reject_line("2 1\n0 5\n0\n"), 2);
    }

    #[test]
    fn test_reject_self_loop() {
        assert_eq!(reject_line("2 1\n0 0\n0\n"), 2);
    }

    #[test]
    fn test_reject_trailing_content() {
        assert_eq!(reject_line("1 1\n0\n\n0 1\n"), 4);
    }

    #[test]
    fn test_trailing_blank_lines_allowed() {
        assert!(parse_graph("1 1\n0\n\n\n").is_ok());
    }
}

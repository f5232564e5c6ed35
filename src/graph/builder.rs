//! CSR builder: the collaborator that turns loosely-typed graph input (edge-list or
//! adjacency-list, as JSON) into the validated [`CsrGraph`] the core consumes.
//!
//! This module is deliberately thin — it is the "duck-typed graph inputs translate
//! to a tagged variant in the builder" design note, not a spec subject in its own
//! right. The core never re-validates what this module establishes.

use serde::{Deserialize, Serialize};

use super::csr::CsrGraph;
use crate::error::{Error, Result};

/// A single `{u, v, w}` edge as accepted by the edge-list input form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub u: usize,
    pub v: usize,
    pub w: f64,
}

/// A single `{v, w}` adjacency entry as accepted by the adjacency-list input form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdjEntry {
    pub v: usize,
    pub w: f64,
}

/// Tagged union over the two accepted input shapes: edge list and adjacency list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphInput {
    EdgeList {
        n: usize,
        edges: Vec<EdgeSpec>,
        #[serde(default = "default_directed")]
        directed: bool,
    },
    AdjacencyList {
        n: usize,
        adj: Vec<Vec<AdjEntry>>,
        #[serde(default = "default_directed")]
        directed: bool,
    },
}

fn default_directed() -> bool {
    true
}

impl GraphInput {
    /// Parses a `GraphInput` from a JSON document, accepting either input form.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::MalformedGraph(e.to_string()))
    }

    /// Validates and lowers this input into a [`CsrGraph`].
    ///
    /// When `directed` is false, every edge is emitted in both directions — the
    /// core itself is agnostic to directedness and only ever sees a directed CSR.
    pub fn build(self) -> Result<CsrGraph> {
        let (n, directed, edges) = match self {
            GraphInput::EdgeList { n, edges, directed } => {
                let edges = edges.into_iter().map(|e| (e.u, e.v, e.w)).collect();
                (n, directed, edges)
            }
            GraphInput::AdjacencyList { n, adj, directed } => {
                if adj.len() != n {
                    return Err(Error::MalformedGraph(format!(
                        "adjacency list has {} rows but n = {}",
                        adj.len(),
                        n
                    )));
                }
                let mut edges = Vec::new();
                for (u, row) in adj.into_iter().enumerate() {
                    for entry in row {
                        edges.push((u, entry.v, entry.w));
                    }
                }
                (n, directed, edges)
            }
        };

        let mut all_edges = edges.clone();
        if !directed {
            all_edges.extend(edges.into_iter().map(|(u, v, w)| (v, u, w)));
        }

        build_csr(n, all_edges)
    }
}

/// Builds a [`CsrGraph`] directly from an edge triple list, sorting by source
/// vertex to construct `row_ptr` the way any CSR builder does.
pub fn build_csr(n: usize, mut edges: Vec<(usize, usize, f64)>) -> Result<CsrGraph> {
    for &(u, v, _) in &edges {
        if u >= n {
            return Err(Error::InvalidEndpoint(u, n));
        }
        if v >= n {
            return Err(Error::InvalidEndpoint(v, n));
        }
    }
    edges.sort_by_key(|&(u, _, _)| u);

    let m = edges.len();
    let mut row_ptr = vec![0usize; n + 1];
    let mut cols = Vec::with_capacity(m);
    let mut weights = Vec::with_capacity(m);

    let mut edge_iter = edges.into_iter().peekable();
    for u in 0..n {
        row_ptr[u] = cols.len();
        while let Some(&(eu, _, _)) = edge_iter.peek() {
            if eu != u {
                break;
            }
            let (_, v, w) = edge_iter.next().unwrap();
            cols.push(v);
            weights.push(w);
        }
    }
    row_ptr[n] = cols.len();

    CsrGraph::new(n, row_ptr, cols, weights, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edge_list_json() {
        let input = GraphInput::from_json(
            r#"{"n": 3, "edges": [{"u":0,"v":1,"w":2.0},{"u":1,"v":2,"w":3.0}]}"#,
        )
        .unwrap();
        let g = input.build().unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn parses_adjacency_list_json() {
        let input = GraphInput::from_json(
            r#"{"n": 2, "adj": [[{"v":1,"w":1.0}], []], "directed": true}"#,
        )
        .unwrap();
        let g = input.build().unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn undirected_emits_reciprocal_edges() {
        let input = GraphInput::from_json(
            r#"{"n": 2, "edges": [{"u":0,"v":1,"w":5.0}], "directed": false}"#,
        )
        .unwrap();
        let g = input.build().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.out_edges(1).any(|(v, w)| v == 0 && w == 5.0));
    }

    #[test]
    fn rejects_mismatched_adjacency_row_count() {
        let input = GraphInput::from_json(r#"{"n": 2, "adj": [[]]}"#).unwrap();
        assert!(input.build().is_err());
    }
}

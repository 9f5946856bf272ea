use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::disjoint_set::DisjointSet;

/// A weighted, undirected edge between two vertex indices. The endpoints are
/// kept in canonical order (`u < v`) so that any unordered pair has exactly
/// one representation. Weights are non-negative integer kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: u64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: u64) -> Edge {
        assert!(u != v, "Self-loop edge at vertex {}", u);
        if u < v {
            Edge { u, v, weight }
        } else {
            Edge { u: v, v: u, weight }
        }
    }
}

/// Returned when an edge list cannot span all vertices: Kruskal's scan
/// exhausted the edges with fewer than `vertex_count - 1` acceptances.
/// Carries the partial forest found so far instead of passing it off as a
/// complete spanning tree. Cannot occur for complete graphs over one or more
/// vertices.
#[derive(Debug, Clone, Error)]
#[error(
    "graph is disconnected: {} edges leave {components} components over {vertices} vertices",
    forest.len()
)]
pub struct DisconnectedGraph {
    /// The edges accepted before the scan ran out: a minimum spanning forest.
    pub forest: Vec<Edge>,
    /// Total number of vertices in the graph.
    pub vertices: usize,
    /// Number of components remaining after the scan.
    pub components: usize,
}

/// An undirected simple graph over vertices `0..vertex_count`, stored as an
/// edge list. Built once per computation and then only read.
///
/// # Examples
///
/// ```
/// use geo_spanning_tree::Graph;
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 100);
/// graph.add_edge(1, 2, 150);
/// graph.add_edge(0, 2, 200);
/// let tree = graph.minimum_spanning_tree().unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Graph {
        Graph {
            vertex_count,
            edges: vec![],
        }
    }

    /// The complete graph over `vertex_count` vertices: one edge for every
    /// pair `i < j`, weighted by `weight`, `vertex_count * (vertex_count - 1) / 2`
    /// edges in total. Zero or one vertices yield an empty edge list.
    pub fn complete<F>(vertex_count: usize, mut weight: F) -> Graph
    where
        F: FnMut(usize, usize) -> u64,
    {
        let mut graph = Graph::new(vertex_count);
        for i in 0..vertex_count {
            for j in (i + 1)..vertex_count {
                graph.add_edge(i, j, weight(i, j));
            }
        }
        graph
    }

    /// Add an edge between two distinct vertices. The endpoint order given by
    /// the caller does not matter; the edge is stored canonically. Repeated
    /// pairs are accepted as-is — the spanning tree scan skips whichever
    /// copy comes later.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u64) {
        assert!(
            u < self.vertex_count && v < self.vertex_count,
            "Edge ({}, {}) out of bounds for {} vertices",
            u,
            v,
            self.vertex_count
        );
        self.edges.push(Edge::new(u, v, weight));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Kruskal's algorithm: the minimum spanning tree of this graph as
    /// exactly `vertex_count - 1` edges in acceptance order (empty for zero
    /// or one vertices).
    ///
    /// Edges are scanned in ascending weight order; equal weights keep their
    /// insertion order (the sort is stable), which together with the
    /// disjoint-set tie-breaking makes the chosen tree deterministic. An edge
    /// is accepted when its endpoints are in different components; accepting
    /// it merges them, so the component count strictly decreases until the
    /// tree is complete and the scan stops early.
    ///
    /// If the edges run out first, the graph is disconnected and the partial
    /// forest comes back inside [`DisconnectedGraph`].
    pub fn minimum_spanning_tree(&self) -> Result<Vec<Edge>, DisconnectedGraph> {
        if self.vertex_count <= 1 {
            return Ok(vec![]);
        }

        let mut ordered = self.edges.clone();
        ordered.sort_by_key(|edge| edge.weight);

        let mut components = DisjointSet::new(self.vertex_count);
        let mut tree: Vec<Edge> = Vec::with_capacity(self.vertex_count - 1);
        for edge in ordered {
            if components.union(edge.u, edge.v) {
                tree.push(edge);
                if tree.len() == self.vertex_count - 1 {
                    return Ok(tree);
                }
            }
        }

        Err(DisconnectedGraph {
            forest: tree,
            vertices: self.vertex_count,
            components: components.component_count(),
        })
    }
}

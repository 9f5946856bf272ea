mod disjoint_set;
mod distance;
mod graph;

pub use crate::disjoint_set::DisjointSet;
pub use crate::distance::{great_circle_km, Coordinate};
pub use crate::graph::{DisconnectedGraph, Edge, Graph};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supplies a coordinate for a location identifier. This is the seam to the
/// geocoding collaborator: the library never talks to a geocoder itself, it
/// asks a `CoordinateSource` once per identifier while building a
/// [`LocationGraph`] and fails the whole request on the first `None`.
pub trait CoordinateSource {
    fn resolve(&self, location: &str) -> Option<Coordinate>;
}

impl CoordinateSource for HashMap<String, Coordinate> {
    fn resolve(&self, location: &str) -> Option<Coordinate> {
        self.get(location).copied()
    }
}

/// Everything that can go wrong between a list of location names and a
/// spanning tree over them.
#[derive(Debug, Error)]
pub enum MstError {
    /// The request carried no locations at all.
    #[error("no locations provided")]
    NoLocations,
    /// The coordinate source had no answer for this identifier. The whole
    /// request fails; no partial graph is built.
    #[error("no coordinate found for location `{0}`")]
    Unresolved(String),
    #[error(transparent)]
    Disconnected(#[from] DisconnectedGraph),
}

/// A weighted edge labeled with location names instead of vertex indices.
/// This is the wire shape: serialized as `{"from": .., "to": .., "weight": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEdge {
    #[serde(rename = "from")]
    pub source: String,
    #[serde(rename = "to")]
    pub target: String,
    /// Great-circle distance truncated to whole kilometers.
    pub weight: u64,
}

/// The outcome of a spanning-tree computation: the full pairwise edge list
/// and the tree chosen from it, both labeled with location names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Every pairwise edge of the complete graph, in construction order.
    pub complete_edges: Vec<LocationEdge>,
    /// The minimum spanning tree, in acceptance order.
    pub mst_edges: Vec<LocationEdge>,
}

impl MstResult {
    /// Sum of the tree's edge weights in kilometers.
    pub fn total_weight_km(&self) -> u64 {
        self.mst_edges.iter().map(|edge| edge.weight).sum()
    }

    pub fn pretty_print(&self) {
        for edge in &self.mst_edges {
            println!("{} - {} ({} km)", edge.source, edge.target, edge.weight);
        }
        println!("total: {} km", self.total_weight_km());
    }
}

/// An ordered list of named locations with resolved coordinates. The vertex
/// index of each location is its position in insertion order, so the same
/// input list always maps to the same graph. Duplicate names are legal and
/// become distinct vertices.
///
/// # Examples
///
/// ```
/// use geo_spanning_tree::{Coordinate, LocationGraph};
/// let mut graph = LocationGraph::new();
/// graph.add_location(String::from("Paris"), Coordinate::new(48.8566, 2.3522));
/// graph.add_location(String::from("London"), Coordinate::new(51.5074, -0.1278));
/// graph.add_location(String::from("Berlin"), Coordinate::new(52.5200, 13.4050));
/// let result = graph.minimum_spanning_tree().unwrap();
/// assert_eq!(result.mst_edges.len(), 2);
/// ```
pub struct LocationGraph {
    names: Vec<String>,
    coords: Vec<Coordinate>,
}

impl LocationGraph {
    pub fn new() -> LocationGraph {
        LocationGraph {
            names: vec![],
            coords: vec![],
        }
    }

    /// Resolve every name through `source` and build the graph. Returns on
    /// the first identifier the source cannot answer, naming it in the error;
    /// a graph is only ever returned with all coordinates present.
    pub fn resolve<C: CoordinateSource>(
        names: &[String],
        source: &C,
    ) -> Result<LocationGraph, MstError> {
        let mut graph = LocationGraph::new();
        for name in names {
            match source.resolve(name) {
                Some(coordinate) => graph.add_location(name.clone(), coordinate),
                None => return Err(MstError::Unresolved(name.clone())),
            }
        }
        Ok(graph)
    }

    /// Append a location with an already-known coordinate. Its vertex index
    /// is the current length.
    pub fn add_location(&mut self, name: String, coordinate: Coordinate) {
        self.names.push(name);
        self.coords.push(coordinate);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Build the complete graph over the locations, weighted by truncated
    /// great-circle kilometers, and run Kruskal's algorithm on it.
    ///
    /// A single location yields empty edge lists. No locations at all is an
    /// error. Disconnection cannot happen here since the graph is complete,
    /// but the error arm is kept so callers of [`Graph`] directly share the
    /// same taxonomy.
    pub fn minimum_spanning_tree(&self) -> Result<MstResult, MstError> {
        if self.names.is_empty() {
            return Err(MstError::NoLocations);
        }

        let graph = Graph::complete(self.names.len(), |i, j| {
            great_circle_km(self.coords[i], self.coords[j]) as u64
        });
        let tree = graph.minimum_spanning_tree()?;

        Ok(MstResult {
            complete_edges: self.label(graph.edges()),
            mst_edges: self.label(&tree),
        })
    }

    fn label(&self, edges: &[Edge]) -> Vec<LocationEdge> {
        edges
            .iter()
            .map(|edge| LocationEdge {
                source: self.names[edge.u].clone(),
                target: self.names[edge.v].clone(),
                weight: edge.weight,
            })
            .collect()
    }
}

impl Default for LocationGraph {
    fn default() -> LocationGraph {
        LocationGraph::new()
    }
}

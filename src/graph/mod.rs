//! A minimal directed multigraph over a process definition.
//!
//! Vertices and edges are plain indices into the definition's `nodes` and
//! `connections` vectors, so a graph never owns or copies model data. Parallel
//! edges between the same source/target pair are preserved; each connection
//! becomes exactly one edge with the same index.

use crate::error::GenerateError;
use crate::process::{NodeKind, ProcessDefinition};
use ahash::{AHashMap, AHashSet};

pub mod paths;
pub mod shortest;

pub use paths::{GraphPath, PathSearch, SearchLimits, all_simple_paths};
pub use shortest::WeightedGraph;

/// Index of a node in `ProcessDefinition::nodes`.
pub type VertexId = usize;
/// Index of a connection in `ProcessDefinition::connections`.
pub type EdgeId = usize;

/// A directed edge of the multigraph, mirroring one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: VertexId,
    pub target: VertexId,
}

/// Directed multigraph view of a process definition. Cycles are representable;
/// only the path enumerator protects itself against them.
#[derive(Debug, Clone)]
pub struct ProcessGraph {
    vertex_count: usize,
    edges: Vec<GraphEdge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl ProcessGraph {
    /// Builds the multigraph: one vertex per node (isolated nodes included),
    /// one edge per connection.
    pub fn build(definition: &ProcessDefinition) -> Result<Self, GenerateError> {
        let index: AHashMap<&str, VertexId> = definition
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();

        let vertex_count = definition.nodes.len();
        let mut edges = Vec::with_capacity(definition.connections.len());
        let mut outgoing = vec![Vec::new(); vertex_count];

        for connection in &definition.connections {
            let resolve = |node_id: &str| {
                index
                    .get(node_id)
                    .copied()
                    .ok_or_else(|| GenerateError::NodeNotFound {
                        node_id: node_id.to_string(),
                    })
            };
            let source = resolve(&connection.source)?;
            let target = resolve(&connection.target)?;
            outgoing[source].push(edges.len());
            edges.push(GraphEdge { source, target });
        }

        Ok(Self {
            vertex_count,
            edges,
            outgoing,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, edge: EdgeId) -> GraphEdge {
        self.edges[edge]
    }

    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        &self.outgoing[vertex]
    }

    /// A copy of the graph with the given edges removed. Edge ids of the
    /// remaining edges are unchanged, so they keep indexing the same
    /// connections of the definition.
    pub fn without_edges(&self, excluded: &AHashSet<EdgeId>) -> Self {
        let outgoing = self
            .outgoing
            .iter()
            .map(|edges| {
                edges
                    .iter()
                    .copied()
                    .filter(|e| !excluded.contains(e))
                    .collect()
            })
            .collect();
        Self {
            vertex_count: self.vertex_count,
            edges: self.edges.clone(),
            outgoing,
        }
    }
}

/// Vertices of all start nodes, in definition order.
pub fn start_vertices(definition: &ProcessDefinition) -> Vec<VertexId> {
    vertices_of_kind(definition, |kind| *kind == NodeKind::Start)
}

/// Vertices of all end nodes, in definition order.
pub fn end_vertices(definition: &ProcessDefinition) -> Vec<VertexId> {
    vertices_of_kind(definition, |kind| *kind == NodeKind::End)
}

fn vertices_of_kind(
    definition: &ProcessDefinition,
    matches: impl Fn(&NodeKind) -> bool,
) -> Vec<VertexId> {
    definition
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| matches(&n.kind))
        .map(|(i, _)| i)
        .collect()
}

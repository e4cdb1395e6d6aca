//! Simplified weighted graph with single-source shortest paths.
//!
//! Used by the heuristic path generator for its shortest-path segments:
//! parallel connections between the same source/target pair collapse into one
//! representative edge. Per-connection coverage bookkeeping stays with the
//! caller, on the original multigraph.

use super::{EdgeId, ProcessGraph, VertexId};
use ahash::AHashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// An edge of the simplified graph, remembering which connection it
/// represents.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEdge {
    pub source: VertexId,
    pub target: VertexId,
    /// The representative connection (the first one seen for this
    /// source/target pair).
    pub connection: EdgeId,
    pub weight: u64,
}

/// A directed graph with non-negative integer edge weights and no parallel
/// edges.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
    outgoing: Vec<Vec<usize>>,
}

impl WeightedGraph {
    /// Collapses the multigraph into a simple weighted graph. All weights
    /// start at zero; callers assign them per search.
    pub fn simplified(graph: &ProcessGraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut seen_pairs = AHashSet::new();
        let mut edges = Vec::new();
        let mut outgoing = vec![Vec::new(); vertex_count];

        for connection in 0..graph.edge_count() {
            let endpoints = graph.edge(connection);
            if !seen_pairs.insert((endpoints.source, endpoints.target)) {
                continue;
            }
            outgoing[endpoints.source].push(edges.len());
            edges.push(WeightedEdge {
                source: endpoints.source,
                target: endpoints.target,
                connection,
                weight: 0,
            });
        }

        Self {
            vertex_count,
            edges,
            outgoing,
        }
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Reassigns every edge's weight from its representative connection.
    pub fn assign_weights(&mut self, weight_of: impl Fn(EdgeId) -> u64) {
        for edge in &mut self.edges {
            edge.weight = weight_of(edge.connection);
        }
    }

    /// Dijkstra shortest path from `from` to `to`. Returns the edge indices
    /// (into [`Self::edges`]) of a minimum-weight path, or `None` if `to` is
    /// unreachable. An empty vector means `from == to`.
    pub fn shortest_path(&self, from: VertexId, to: VertexId) -> Option<Vec<usize>> {
        let mut dist = vec![u64::MAX; self.vertex_count];
        let mut prev_edge: Vec<Option<usize>> = vec![None; self.vertex_count];
        let mut heap = BinaryHeap::new();
        dist[from] = 0;
        heap.push(Reverse((0u64, from)));

        while let Some(Reverse((d, vertex))) = heap.pop() {
            if d > dist[vertex] {
                continue;
            }
            if vertex == to {
                break;
            }
            for &edge_index in &self.outgoing[vertex] {
                let edge = &self.edges[edge_index];
                let next = d.saturating_add(edge.weight);
                if next < dist[edge.target] {
                    dist[edge.target] = next;
                    prev_edge[edge.target] = Some(edge_index);
                    heap.push(Reverse((next, edge.target)));
                }
            }
        }

        if dist[to] == u64::MAX {
            return None;
        }

        let mut path = Vec::new();
        let mut vertex = to;
        while vertex != from {
            let edge_index = prev_edge[vertex]?;
            path.push(edge_index);
            vertex = self.edges[edge_index].source;
        }
        path.reverse();
        Some(path)
    }
}

//! Bounded enumeration of all simple start-to-end paths.

use super::{EdgeId, ProcessGraph, VertexId};
use ahash::AHashSet;

/// Maximum number of paths to enumerate before giving up.
const DEFAULT_MAX_PATHS: usize = 10_000;
/// Maximum path length (in edges) before giving up.
const DEFAULT_MAX_DEPTH: usize = 1_000;

/// Bounds on the all-simple-paths search. Exceeding either bound means the
/// enumeration would be incomplete, which callers treat as "infeasible".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_paths: usize,
    pub max_depth: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_paths: DEFAULT_MAX_PATHS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A directed path through the multigraph: an ordered vertex sequence and the
/// ordered edges connecting them (`edges.len() + 1 == vertices.len()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

impl GraphPath {
    /// Path length, counted in edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The path's edges as a set, for coverage and domination checks.
    pub fn edge_set(&self) -> AHashSet<EdgeId> {
        self.edges.iter().copied().collect()
    }
}

/// Result of a bounded path enumeration. Infeasibility is a value, not an
/// error: the caller decides whether to fall back to the heuristic search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSearch {
    /// Every simple start-to-end path, in depth-first enumeration order
    /// (outgoing edges explored in ascending edge-id order).
    Complete(Vec<GraphPath>),
    /// The search exceeded its limits; the enumeration would be incomplete.
    Overflow,
}

/// Enumerates all simple paths from `start` to any vertex in `ends`, within
/// the given limits.
pub fn all_simple_paths(
    graph: &ProcessGraph,
    start: VertexId,
    ends: &[VertexId],
    limits: SearchLimits,
) -> PathSearch {
    let mut enumerator = Enumerator {
        graph,
        ends: ends.iter().copied().collect(),
        limits,
        on_path: vec![false; graph.vertex_count()],
        vertices: vec![start],
        edges: Vec::new(),
        found: Vec::new(),
    };
    enumerator.on_path[start] = true;
    match enumerator.visit(start) {
        Ok(()) => PathSearch::Complete(enumerator.found),
        Err(Overflow) => PathSearch::Overflow,
    }
}

struct Overflow;

struct Enumerator<'a> {
    graph: &'a ProcessGraph,
    ends: AHashSet<VertexId>,
    limits: SearchLimits,
    on_path: Vec<bool>,
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
    found: Vec<GraphPath>,
}

impl Enumerator<'_> {
    fn visit(&mut self, current: VertexId) -> Result<(), Overflow> {
        if self.ends.contains(&current) {
            if self.found.len() >= self.limits.max_paths {
                return Err(Overflow);
            }
            self.found.push(GraphPath {
                vertices: self.vertices.clone(),
                edges: self.edges.clone(),
            });
        }

        for &edge in self.graph.outgoing(current) {
            let target = self.graph.edge(edge).target;
            // Simple paths only: never revisit a vertex already on the path.
            if self.on_path[target] {
                continue;
            }
            if self.edges.len() >= self.limits.max_depth {
                return Err(Overflow);
            }
            self.on_path[target] = true;
            self.vertices.push(target);
            self.edges.push(edge);
            let result = self.visit(target);
            self.vertices.pop();
            self.edges.pop();
            self.on_path[target] = false;
            result?;
        }
        Ok(())
    }
}

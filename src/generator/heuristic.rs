//! Heuristic path generation for graphs where exact enumeration is
//! infeasible.
//!
//! Segments are searched on a simplified weighted graph (parallel edges
//! collapsed). For each condition, edges carrying it get weight zero and
//! everything else gets the vertex count, so shortest-path searches are
//! strongly biased towards the condition's edges. Coverage is tracked on the
//! original connections: every connection carrying the condition gets wrapped
//! into a start-to-end path stitched from two shortest-path segments, unless
//! an earlier stitched path already ran over it.

use super::conditions::ConditionIndex;
use crate::error::GenerateError;
use crate::graph::{EdgeId, GraphPath, ProcessGraph, VertexId, WeightedGraph};
use crate::process::ProcessDefinition;
use ahash::AHashSet;

pub fn paths_for_all_conditions(
    definition: &ProcessDefinition,
    graph: &ProcessGraph,
    index: &ConditionIndex,
    start: VertexId,
    ends: &[VertexId],
) -> Result<Vec<GraphPath>, GenerateError> {
    let mut weighted = WeightedGraph::simplified(graph);
    let off_condition_weight = graph.vertex_count() as u64;
    let mut all_paths = Vec::new();

    for condition in index.all_conditions() {
        weighted.assign_weights(|connection| {
            if index.edge_has_condition(connection, condition) {
                0
            } else {
                off_condition_weight
            }
        });

        // Connections still needing coverage, lowest index first. Parallel
        // connections stay distinct here even though the weighted graph
        // collapses them.
        let mut uncovered: Vec<EdgeId> = index.condition_edges(condition).into_iter().collect();
        uncovered.sort_unstable();

        while let Some(&connection) = uncovered.first() {
            let path = stitch_path(definition, graph, &weighted, start, ends, connection)?;
            let covered: AHashSet<EdgeId> = path.edge_set();
            all_paths.push(path);
            // Everything on the stitched path counts as covered, even edges
            // only incidentally included.
            uncovered.retain(|e| !covered.contains(e));
        }
    }

    Ok(all_paths)
}

/// Builds one start-to-end path around the given uncovered connection:
/// shortest weighted path start -> connection source, the connection itself,
/// then the shortest segment from the connection target to the closest
/// reachable end node (fewest edges).
fn stitch_path(
    definition: &ProcessDefinition,
    graph: &ProcessGraph,
    weighted: &WeightedGraph,
    start: VertexId,
    ends: &[VertexId],
    connection: EdgeId,
) -> Result<GraphPath, GenerateError> {
    let source = graph.edge(connection).source;
    let target = graph.edge(connection).target;

    let start_segment = weighted.shortest_path(start, source).ok_or_else(|| {
        GenerateError::NoPathFromStart {
            node: definition.nodes[source].name.clone(),
        }
    })?;

    let mut end_segment: Option<Vec<usize>> = None;
    for &end in ends {
        if let Some(segment) = weighted.shortest_path(target, end) {
            let shorter = end_segment
                .as_ref()
                .is_none_or(|best| segment.len() < best.len());
            if shorter {
                end_segment = Some(segment);
            }
        }
    }
    let end_segment = end_segment.ok_or_else(|| GenerateError::NoPathToEnd {
        node: definition.nodes[target].name.clone(),
    })?;

    let mut edges: Vec<EdgeId> = Vec::new();
    edges.extend(start_segment.iter().map(|&i| weighted.edges()[i].connection));
    edges.push(connection);
    edges.extend(end_segment.iter().map(|&i| weighted.edges()[i].connection));

    let mut vertices = vec![start];
    for &connection in &edges {
        vertices.push(graph.edge(connection).target);
    }

    Ok(GraphPath { vertices, edges })
}

//! Removal of paths whose covered edges are dominated by another path.

use crate::graph::{EdgeId, GraphPath};
use ahash::AHashSet;

/// Drops every path whose edge set is a subset of (or equal to) the edge set
/// of another surviving path.
///
/// When several paths share one edge set, exactly one survives: the one
/// scanned last in the dominating role. The operation is idempotent.
pub fn filter_dominated_paths(paths: Vec<GraphPath>) -> Vec<GraphPath> {
    let edge_sets: Vec<AHashSet<EdgeId>> = paths.iter().map(GraphPath::edge_set).collect();
    let mut obsolete = vec![false; paths.len()];

    for i in 0..paths.len() {
        for j in 0..paths.len() {
            if i == j || obsolete[j] {
                continue;
            }
            if edge_sets[i].is_subset(&edge_sets[j]) {
                obsolete[i] = true;
                break;
            }
        }
    }

    paths
        .into_iter()
        .zip(obsolete)
        .filter(|(_, obsolete)| !obsolete)
        .map(|(path, _)| path)
        .collect()
}

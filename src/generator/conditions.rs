//! Analysis of branch conditions and their conflicts.
//!
//! Two conditions conflict when they label alternative outgoing edges of the
//! same decision node; a path may never take both. All comparisons are ASCII
//! case-insensitive; blank conditions never participate.

use crate::graph::{EdgeId, GraphPath, ProcessGraph};
use crate::process::{NodeKind, ProcessDefinition};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Precomputed condition/conflict data for one process graph.
pub struct ConditionIndex {
    /// Distinct non-blank conditions, original casing, first-seen connection
    /// order.
    conditions: Vec<String>,
    /// Lowercased condition -> lowercased conditions that conflict with it.
    conflicts: AHashMap<String, AHashSet<String>>,
    /// Lowercased condition of each connection, if non-blank.
    edge_conditions: Vec<Option<String>>,
    empty: AHashSet<String>,
}

impl ConditionIndex {
    pub fn build(definition: &ProcessDefinition, graph: &ProcessGraph) -> Self {
        let edge_conditions: Vec<Option<String>> = definition
            .connections
            .iter()
            .map(|c| c.condition_text().map(str::to_lowercase))
            .collect();

        let conditions: Vec<String> = definition
            .connections
            .iter()
            .filter_map(|c| c.condition_text())
            .unique_by(|c| c.to_lowercase())
            .map(str::to_string)
            .collect();

        let mut conflicts: AHashMap<String, AHashSet<String>> = AHashMap::new();
        for (vertex, node) in definition.nodes.iter().enumerate() {
            if node.kind != NodeKind::Decision {
                continue;
            }
            let outgoing: Vec<&String> = graph
                .outgoing(vertex)
                .iter()
                .filter_map(|&e| edge_conditions[e].as_ref())
                .collect();
            for a in &outgoing {
                for b in &outgoing {
                    if a != b {
                        conflicts
                            .entry((*a).clone())
                            .or_default()
                            .insert((*b).clone());
                    }
                }
            }
        }

        Self {
            conditions,
            conflicts,
            edge_conditions,
            empty: AHashSet::new(),
        }
    }

    /// All distinct non-blank conditions of the process, in deterministic
    /// first-seen order.
    pub fn all_conditions(&self) -> &[String] {
        &self.conditions
    }

    /// The conditions that must not be taken together with `condition`
    /// (lowercased). A condition never conflicts with itself.
    pub fn conflicting_conditions(&self, condition: &str) -> &AHashSet<String> {
        self.conflicts
            .get(&condition.to_lowercase())
            .unwrap_or(&self.empty)
    }

    /// Whether the given connection carries `condition` (case-insensitive).
    pub fn edge_has_condition(&self, edge: EdgeId, condition: &str) -> bool {
        self.edge_conditions[edge]
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(condition))
    }

    /// All connections carrying `condition`.
    pub fn condition_edges(&self, condition: &str) -> AHashSet<EdgeId> {
        (0..self.edge_conditions.len())
            .filter(|&e| self.edge_has_condition(e, condition))
            .collect()
    }

    /// All connections whose condition conflicts with `condition`.
    pub fn conflicting_edges(&self, condition: &str) -> AHashSet<EdgeId> {
        let conflicting = self.conflicting_conditions(condition);
        self.edge_conditions
            .iter()
            .enumerate()
            .filter(|(_, c)| c.as_ref().is_some_and(|c| conflicting.contains(c)))
            .map(|(e, _)| e)
            .collect()
    }

    /// The distinct non-blank conditions along a path (lowercased).
    pub fn conditions_of(&self, path: &GraphPath) -> AHashSet<String> {
        path.edges
            .iter()
            .filter_map(|&e| self.edge_conditions[e].clone())
            .collect()
    }

    /// Whether the path takes two mutually exclusive branch conditions.
    pub fn path_has_conflict(&self, path: &GraphPath) -> bool {
        let conditions = self.conditions_of(path);
        conditions.iter().any(|c| {
            self.conflicts
                .get(c)
                .is_some_and(|set| conditions.iter().any(|other| set.contains(other)))
        })
    }
}

//! The test-case generator: orchestrates condition analysis, path search,
//! deduplication and synthesis.

use crate::error::GenerateError;
use crate::graph::{self, EdgeId, PathSearch, ProcessGraph, SearchLimits};
use crate::process::ProcessDefinition;
use crate::specification::TestSpecification;
use crate::synthesis::Synthesizer;
use ahash::AHashSet;

pub mod conditions;
pub mod dedup;
pub mod exact;
pub mod heuristic;

use conditions::ConditionIndex;

/// Which path-search strategy produced the generated test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Exact,
    Heuristic,
}

/// Summary of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub mode: SearchMode,
    pub test_case_count: usize,
    /// Conditions with at least one edge no selected path covers. The run
    /// still succeeds; callers decide whether to warn.
    pub uncovered_conditions: Vec<String>,
}

/// Derives test cases and test procedures from a process definition.
///
/// A generator is a pure, synchronous transformation: it reads the process
/// model and appends freshly created parameters and test cases into a
/// caller-owned [`TestSpecification`], never touching pre-existing entries.
pub struct Generator {
    definition: ProcessDefinition,
    limits: SearchLimits,
}

pub struct GeneratorBuilder {
    definition: ProcessDefinition,
    limits: SearchLimits,
}

impl GeneratorBuilder {
    pub fn new(definition: ProcessDefinition) -> Self {
        Self {
            definition,
            limits: SearchLimits::default(),
        }
    }

    /// Caps the number of paths the exact enumeration may produce before the
    /// run falls back to the heuristic search.
    pub fn max_paths(mut self, max_paths: usize) -> Self {
        self.limits.max_paths = max_paths;
        self
    }

    /// Caps the path length (in edges) the exact enumeration explores before
    /// the run falls back to the heuristic search.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            definition: self.definition,
            limits: self.limits,
        }
    }
}

impl Generator {
    pub fn builder(definition: ProcessDefinition) -> GeneratorBuilder {
        GeneratorBuilder::new(definition)
    }

    /// Runs one generation pass, appending the generated parameters and test
    /// cases to `specification`.
    pub fn generate(
        &self,
        specification: &mut TestSpecification,
    ) -> Result<GenerationReport, GenerateError> {
        let graph = ProcessGraph::build(&self.definition)?;

        let starts = graph::start_vertices(&self.definition);
        let start = match starts.as_slice() {
            [start] => *start,
            _ => {
                return Err(GenerateError::StartNodeCount {
                    found: starts.len(),
                });
            }
        };
        let ends = graph::end_vertices(&self.definition);
        if ends.is_empty() {
            return Err(GenerateError::NoEndNodes);
        }

        let index = ConditionIndex::build(&self.definition, &graph);

        let (paths, mode) =
            match exact::paths_for_all_conditions(&graph, &index, start, &ends, self.limits) {
                PathSearch::Complete(paths) => (paths, SearchMode::Exact),
                PathSearch::Overflow => {
                    let paths = heuristic::paths_for_all_conditions(
                        &self.definition,
                        &graph,
                        &index,
                        start,
                        &ends,
                    )?;
                    (paths, SearchMode::Heuristic)
                }
            };

        let paths = dedup::filter_dominated_paths(paths);

        let covered: AHashSet<EdgeId> = paths.iter().flat_map(|p| p.edges.iter().copied()).collect();
        let uncovered_conditions = index
            .all_conditions()
            .iter()
            .filter(|c| index.condition_edges(c).iter().any(|e| !covered.contains(e)))
            .cloned()
            .collect();

        let mut synthesizer = Synthesizer::new(&self.definition);
        for path in &paths {
            synthesizer.synthesize(path, specification);
        }

        Ok(GenerationReport {
            mode,
            test_case_count: paths.len(),
            uncovered_conditions,
        })
    }
}

//! Tests for the exact generation mode, coverage and deduplication.
mod common;
use common::*;
use testflow::generator::dedup::filter_dominated_paths;
use testflow::graph::GraphPath;
use testflow::prelude::*;

#[test]
fn test_single_decision_yields_one_case_per_branch() {
    let generator = Generator::builder(simple_decision_process()).build();
    let mut specification = TestSpecification::new();
    let report = generator.generate(&mut specification).expect("generation failed");

    assert_eq!(report.mode, SearchMode::Exact);
    assert_eq!(report.test_case_count, 2);
    assert!(report.uncovered_conditions.is_empty());
    assert_eq!(specification.test_cases.len(), 2);

    let mut decision_values: Vec<String> = specification
        .test_cases
        .iter()
        .map(|tc| assigned_value(&specification, tc, "Temperature").expect("no decision value"))
        .collect();
    decision_values.sort();
    assert_eq!(decision_values, vec!["high", "normal"]);

    // The "high" branch leads to the alarm step and its expected outcome.
    let high_case = specification
        .test_cases
        .iter()
        .find(|tc| assigned_value(&specification, tc, "Temperature").as_deref() == Some("high"))
        .expect("no case for the high branch");
    assert_eq!(
        assigned_value(&specification, high_case, "alarm").as_deref(),
        Some("on")
    );
    assert!(high_case.consistent);
}

#[test]
fn test_no_case_mixes_conflicting_branch_values() {
    let generator = Generator::builder(two_decision_process()).build();
    let mut specification = TestSpecification::new();
    let report = generator.generate(&mut specification).expect("generation failed");

    assert_eq!(report.mode, SearchMode::Exact);
    assert!(report.uncovered_conditions.is_empty());
    assert_eq!(specification.test_cases.len(), 3);

    for test_case in &specification.test_cases {
        let values = assignment_values(test_case);
        let has = |v: &str| values.iter().any(|x| x == v);
        assert!(
            !(has("a") && has("b")),
            "case {} mixes alternatives of the first decision",
            test_case.name
        );
        assert!(
            !(has("c") && has("d")),
            "case {} mixes alternatives of the second decision",
            test_case.name
        );
    }

    // Every condition is covered by some case.
    for condition in ["a", "b", "c", "d"] {
        assert!(
            specification
                .test_cases
                .iter()
                .any(|tc| assignment_values(tc).iter().any(|v| v == condition)),
            "condition {condition} not covered by any test case"
        );
    }
}

#[test]
fn test_generation_appends_without_touching_existing_entries() {
    let mut specification = TestSpecification::new();
    specification.add_parameter(TestParameter {
        name: "existing".to_string(),
        kind: ParameterKind::Input,
    });
    specification.test_cases.push(TestCase {
        name: "Manual".to_string(),
        consistent: false,
        assignments: vec![],
        procedure: TestProcedure::default(),
    });

    let generator = Generator::builder(simple_decision_process()).build();
    generator.generate(&mut specification).expect("generation failed");

    assert_eq!(specification.parameters[0].name, "existing");
    assert_eq!(specification.test_cases[0].name, "Manual");
    assert!(!specification.test_cases[0].consistent);
    assert_eq!(specification.test_cases.len(), 3);
    // Generated parameter ids must point past the pre-existing entry.
    for test_case in &specification.test_cases[1..] {
        for assignment in &test_case.assignments {
            assert!(assignment.parameter.0 >= 1);
        }
    }
}

#[test]
fn test_start_node_invariants() {
    let mut two_starts = simple_decision_process();
    two_starts.nodes.push(start("start2"));
    let generator = Generator::builder(two_starts).build();
    let mut specification = TestSpecification::new();
    let err = generator.generate(&mut specification).unwrap_err();
    assert_eq!(err, GenerateError::StartNodeCount { found: 2 });
    assert!(specification.test_cases.is_empty());

    let mut no_ends = simple_decision_process();
    no_ends.nodes.retain(|n| n.kind != NodeKind::End);
    no_ends
        .connections
        .retain(|c| c.target != "end" && c.source != "end");
    let generator = Generator::builder(no_ends).build();
    let err = generator.generate(&mut specification).unwrap_err();
    assert_eq!(err, GenerateError::NoEndNodes);
}

#[test]
fn test_dangling_connection_is_an_error() {
    let mut definition = simple_decision_process();
    definition.connections.push(connect("check", "missing"));
    let generator = Generator::builder(definition).build();
    let err = generator.generate(&mut TestSpecification::new()).unwrap_err();
    assert_eq!(
        err,
        GenerateError::NodeNotFound {
            node_id: "missing".to_string()
        }
    );
}

fn path_with_edges(edges: &[usize]) -> GraphPath {
    GraphPath {
        vertices: vec![],
        edges: edges.to_vec(),
    }
}

#[test]
fn test_dedup_removes_subset_paths_and_is_idempotent() {
    let paths = vec![
        path_with_edges(&[0, 1]),
        path_with_edges(&[0, 1, 2]),
        path_with_edges(&[3]),
    ];
    let filtered = filter_dominated_paths(paths);
    let edge_lists: Vec<&[usize]> = filtered.iter().map(|p| p.edges.as_slice()).collect();
    assert_eq!(edge_lists, vec![&[0, 1, 2][..], &[3][..]]);

    // Re-running on its own output changes nothing.
    let again = filter_dominated_paths(filtered.clone());
    assert_eq!(again, filtered);

    // No surviving pair has one edge set a subset of the other.
    for a in &again {
        for b in &again {
            if a != b {
                assert!(!a.edge_set().is_subset(&b.edge_set()));
            }
        }
    }
}

#[test]
fn test_dedup_keeps_exactly_one_of_equal_paths() {
    let paths = vec![path_with_edges(&[5, 6]), path_with_edges(&[6, 5])];
    let filtered = filter_dominated_paths(paths);
    assert_eq!(filtered.len(), 1);
}

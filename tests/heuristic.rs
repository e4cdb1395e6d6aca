//! Tests for the heuristic fallback path generation.
mod common;
use common::*;
use testflow::prelude::*;

#[test]
fn test_overflow_falls_back_to_heuristic_and_still_covers() {
    // max_paths(0) makes every successful enumeration overflow, forcing the
    // heuristic for the whole run.
    let generator = Generator::builder(simple_decision_process())
        .max_paths(0)
        .build();
    let mut specification = TestSpecification::new();
    let report = generator.generate(&mut specification).expect("generation failed");

    assert_eq!(report.mode, SearchMode::Heuristic);
    assert!(report.uncovered_conditions.is_empty());
    assert_eq!(specification.test_cases.len(), 2);

    let mut decision_values: Vec<String> = specification
        .test_cases
        .iter()
        .map(|tc| assigned_value(&specification, tc, "Temperature").expect("no decision value"))
        .collect();
    decision_values.sort();
    assert_eq!(decision_values, vec!["high", "normal"]);
}

#[test]
fn test_depth_limit_also_triggers_fallback() {
    let generator = Generator::builder(simple_decision_process())
        .max_depth(1)
        .build();
    let mut specification = TestSpecification::new();
    let report = generator.generate(&mut specification).expect("generation failed");

    assert_eq!(report.mode, SearchMode::Heuristic);
    assert_eq!(specification.test_cases.len(), 2);
}

#[test]
fn test_unreachable_end_is_fatal_in_heuristic_mode() {
    // The "a" branch dead-ends in a step with no outgoing connection.
    let definition = ProcessDefinition {
        nodes: vec![
            start("start"),
            decision("d", "Choice"),
            step("dead", "Dead step"),
            step("ok", "Ok step"),
            end("end"),
        ],
        connections: vec![
            connect("start", "d"),
            connect_if("d", "dead", "a"),
            connect_if("d", "ok", "b"),
            connect("ok", "end"),
        ],
    };

    let generator = Generator::builder(definition).max_paths(0).build();
    let mut specification = TestSpecification::new();
    let err = generator.generate(&mut specification).unwrap_err();
    assert_eq!(
        err,
        GenerateError::NoPathToEnd {
            node: "Dead step".to_string()
        }
    );
    assert!(specification.test_cases.is_empty());
    assert!(specification.parameters.is_empty());
}

#[test]
fn test_heuristic_covers_each_parallel_connection() {
    // Two parallel conditioned connections between the same decision and
    // step. The weighted search only keeps one representative per vertex
    // pair, but coverage is tracked on the real connections, so the
    // condition shadowed by the collapse still gets its own stitched path.
    let definition = ProcessDefinition {
        nodes: vec![
            start("start"),
            decision("d", "Mode"),
            step("s", "Handle"),
            end("end"),
        ],
        connections: vec![
            connect("start", "d"),
            connect_if("d", "s", "fast"),
            connect_if("d", "s", "slow"),
            connect("s", "end"),
        ],
    };

    let generator = Generator::builder(definition).max_paths(0).build();
    let mut specification = TestSpecification::new();
    let report = generator.generate(&mut specification).expect("generation failed");

    assert_eq!(report.mode, SearchMode::Heuristic);
    assert!(report.uncovered_conditions.is_empty());
    assert_eq!(specification.test_cases.len(), 2);

    let mut mode_values: Vec<String> = specification
        .test_cases
        .iter()
        .map(|tc| assigned_value(&specification, tc, "Mode").expect("no decision value"))
        .collect();
    mode_values.sort();
    assert_eq!(mode_values, vec!["fast", "slow"]);
}

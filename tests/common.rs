//! Shared process-model builders for the integration tests.
#![allow(dead_code)]

use testflow::prelude::*;

pub fn start(id: &str) -> ProcessNode {
    node(id, "Start", NodeKind::Start)
}

pub fn end(id: &str) -> ProcessNode {
    node(id, "End", NodeKind::End)
}

pub fn decision(id: &str, name: &str) -> ProcessNode {
    node(id, name, NodeKind::Decision)
}

pub fn step(id: &str, name: &str) -> ProcessNode {
    node(
        id,
        name,
        NodeKind::Step {
            expected_outcome: None,
        },
    )
}

pub fn step_with_outcome(id: &str, name: &str, outcome: &str) -> ProcessNode {
    node(
        id,
        name,
        NodeKind::Step {
            expected_outcome: Some(outcome.to_string()),
        },
    )
}

pub fn node(id: &str, name: &str, kind: NodeKind) -> ProcessNode {
    ProcessNode {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        kind,
    }
}

pub fn connect(source: &str, target: &str) -> ProcessConnection {
    ProcessConnection {
        source: source.to_string(),
        target: target.to_string(),
        condition: None,
    }
}

pub fn connect_if(source: &str, target: &str, condition: &str) -> ProcessConnection {
    ProcessConnection {
        source: source.to_string(),
        target: target.to_string(),
        condition: Some(condition.to_string()),
    }
}

/// start -> decision "Temperature" -> (alarm | log) -> end, with conditions
/// "high" and "normal" on the two branches.
pub fn simple_decision_process() -> ProcessDefinition {
    ProcessDefinition {
        nodes: vec![
            start("start"),
            decision("check", "Temperature"),
            step_with_outcome("alarm", "Raise alarm", "alarm=on"),
            step("log", "Log reading"),
            end("end"),
        ],
        connections: vec![
            connect("start", "check"),
            connect_if("check", "alarm", "high"),
            connect_if("check", "log", "normal"),
            connect("alarm", "end"),
            connect("log", "end"),
        ],
    }
}

/// Two decisions in sequence: the first branches on "a"/"b", the second on
/// "c"/"d". Both branches of the first decision rejoin before the second.
pub fn two_decision_process() -> ProcessDefinition {
    ProcessDefinition {
        nodes: vec![
            start("start"),
            decision("d1", "First"),
            step("s1", "Path A"),
            step("s2", "Path B"),
            decision("d2", "Second"),
            step("s3", "Path C"),
            step("s4", "Path D"),
            end("end"),
        ],
        connections: vec![
            connect("start", "d1"),
            connect_if("d1", "s1", "a"),
            connect_if("d1", "s2", "b"),
            connect("s1", "d2"),
            connect("s2", "d2"),
            connect_if("d2", "s3", "c"),
            connect_if("d2", "s4", "d"),
            connect("s3", "end"),
            connect("s4", "end"),
        ],
    }
}

/// The value the named parameter takes in the given test case, if assigned.
pub fn assigned_value(
    specification: &TestSpecification,
    test_case: &TestCase,
    parameter_name: &str,
) -> Option<String> {
    test_case
        .assignments
        .iter()
        .find(|a| specification.parameter(a.parameter).name == parameter_name)
        .map(|a| a.value.clone())
}

/// All assignment values of a test case, in order.
pub fn assignment_values(test_case: &TestCase) -> Vec<String> {
    test_case
        .assignments
        .iter()
        .map(|a| a.value.clone())
        .collect()
}

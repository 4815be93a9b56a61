//! Property 2: structural and annotation invariants of a finished run.
//!
//! - The output is acyclic, uses canonical endpoints and only input edges.
//! - Every connected input vertex appears in the output; isolated ones do not.
//! - Selected edges are tagged `Selected`; every other input edge `Inactive`.
//! - A vertex is tagged `Warning` exactly when it is absent from the output.
//! - Accepted plus rejected steps account for every consumed queue entry.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Annotation, Graph, KruskalStepper, Phase, StepwiseAlgorithm};

use super::helpers::{find_root, index};
use super::types::StepperFixture;

pub(super) fn run_structural_invariants_property(fixture: &StepperFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let mut stepper = KruskalStepper::new(&graph);
    stepper.run_to_completion().map_err(|err| {
        TestCaseError::fail(format!("stepper failed: {err} ({})", fixture.describe()))
    })?;

    check(stepper.phase() == Phase::Finished, || {
        format!("stepper ended in {:?}", stepper.phase())
    })?;
    validate_acyclic_subgraph(fixture, &graph, stepper.output())?;
    validate_annotations(&graph, &stepper)?;

    let stats = stepper.stats();
    check(stats.accepted() == stepper.output().edge_count(), || {
        format!(
            "accepted {} but output holds {} edges",
            stats.accepted(),
            stepper.output().edge_count()
        )
    })?;
    check(
        stats.accepted() + stats.rejected() + stepper.remaining().size() == graph.edge_count(),
        || format!("queue accounting mismatch: {stats:?} ({})", fixture.describe()),
    )?;
    check(stats.reachability_queries() == stats.steps(), || {
        format!("one reachability query per step expected: {stats:?}")
    })
}

fn check(condition: bool, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(message()))
    }
}

fn validate_acyclic_subgraph(
    fixture: &StepperFixture,
    graph: &Graph,
    output: &Graph,
) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    for edge in output.edges() {
        let ends = output
            .endpoints(edge.id())
            .ok_or_else(|| TestCaseError::fail(format!("output edge {edge} has no endpoints")))?;
        check(ends.first() < ends.second(), || {
            format!("edge {edge}: endpoints not canonical")
        })?;
        check(graph.endpoints(edge.id()) == Some(ends), || {
            format!("edge {edge}: endpoints differ from the input graph")
        })?;
        let ra = find_root(&mut parent, index(ends.first()));
        let rb = find_root(&mut parent, index(ends.second()));
        check(ra != rb, || format!("edge {edge} closes a cycle"))?;
        parent[rb] = ra;
    }

    for vertex in graph.vertices() {
        let connected = graph.degree(vertex).is_some_and(|degree| degree > 0);
        check(output.contains_vertex(vertex) == connected, || {
            format!(
                "vertex {vertex}: connected={connected}, in output={} ({})",
                output.contains_vertex(vertex),
                fixture.describe()
            )
        })?;
    }
    Ok(())
}

fn validate_annotations(graph: &Graph, stepper: &KruskalStepper<'_>) -> TestCaseResult {
    let annotations = stepper.annotations();
    for edge in graph.edges() {
        let expected = if stepper.output().contains_edge(edge.id()) {
            Annotation::Selected
        } else {
            Annotation::Inactive
        };
        let actual = annotations.edge(edge.id());
        check(actual == expected, || {
            format!("edge {edge}: tagged {actual:?}, expected {expected:?}")
        })?;
    }
    for vertex in graph.vertices() {
        let expected = if stepper.output().contains_vertex(vertex) {
            Annotation::Selected
        } else {
            Annotation::Warning
        };
        let actual = annotations.node(vertex);
        check(actual == expected, || {
            format!("vertex {vertex}: tagged {actual:?}, expected {expected:?}")
        })?;
    }
    Ok(())
}

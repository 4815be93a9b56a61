//! Property 1: the stepper selects exactly what the oracle selects.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeId, KruskalStepper, StepwiseAlgorithm};

use super::helpers::total_weight_f64;
use super::oracle::sequential_kruskal;
use super::types::StepperFixture;

pub(super) fn run_oracle_equivalence_property(fixture: &StepperFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let mut stepper = KruskalStepper::new(&graph);
    stepper.run_to_completion().map_err(|err| {
        TestCaseError::fail(format!("stepper failed: {err} ({})", fixture.describe()))
    })?;

    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);
    let selected: BTreeSet<EdgeId> = stepper.output().edges().map(|edge| edge.id()).collect();

    if selected != oracle.selected {
        return Err(TestCaseError::fail(format!(
            "selected edges differ: stepper={selected:?}, oracle={:?} ({})",
            oracle.selected,
            fixture.describe(),
        )));
    }

    let weight = total_weight_f64(stepper.output().edges());
    if (weight - oracle.total_weight).abs() > f64::EPSILON {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: stepper={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    let expected_edges = fixture.node_count - oracle.component_count;
    if stepper.output().edge_count() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected_edges} ({})",
            stepper.output().edge_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

//! Property 3: reset replays deterministically.
//!
//! Runs the stepper to completion, captures the per-step outcomes and final
//! state, resets onto the same graph and checks that a second run matches
//! exactly. `setup_next_step` is polled twice before every step to confirm
//! it does not mutate anything.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Annotations, Graph, KruskalStepper, StepOutcome};

use super::types::StepperFixture;

type RunTrace = (Vec<StepOutcome>, Graph, Annotations);

pub(super) fn run_replay_property(fixture: &StepperFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let mut stepper = KruskalStepper::new(&graph);

    let baseline = drive(&mut stepper, fixture)?;
    stepper.reset(&graph);
    if stepper.is_started() || stepper.output().edge_count() != 0 || !stepper.annotations().is_empty() {
        return Err(TestCaseError::fail(format!(
            "reset left state behind ({})",
            fixture.describe()
        )));
    }
    let replay = drive(&mut stepper, fixture)?;

    if baseline.0 != replay.0 {
        return Err(TestCaseError::fail(format!(
            "step outcomes diverged after reset ({})",
            fixture.describe()
        )));
    }
    if baseline.1 != replay.1 || baseline.2 != replay.2 {
        return Err(TestCaseError::fail(format!(
            "final state diverged after reset ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

fn drive(stepper: &mut KruskalStepper<'_>, fixture: &StepperFixture) -> Result<RunTrace, TestCaseError> {
    let fail = |err: crate::StepError| {
        TestCaseError::fail(format!("stepper failed: {err} ({})", fixture.describe()))
    };
    stepper.start().map_err(fail)?;
    let mut outcomes = Vec::new();
    loop {
        let first = stepper.setup_next_step().map_err(fail)?;
        let second = stepper.setup_next_step().map_err(fail)?;
        if first != second {
            return Err(TestCaseError::fail(format!(
                "setup_next_step changed between calls ({})",
                fixture.describe()
            )));
        }
        if !first {
            break;
        }
        outcomes.push(stepper.do_next_step().map_err(fail)?);
    }
    stepper.finish().map_err(fail)?;
    Ok((outcomes, stepper.output().clone(), stepper.annotations().clone()))
}

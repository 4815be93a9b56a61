//! Externally paced driver contract for step-wise algorithms.

/// An algorithm advanced one observable step per call by an external caller.
///
/// Implementors supply the lifecycle calls; [`StepwiseAlgorithm::step`] is the
/// generic driver that sequences them.
pub trait StepwiseAlgorithm {
    /// Value describing what a single step did.
    type Outcome;
    /// Failure raised when the lifecycle is misused.
    type Error;

    /// Whether [`StepwiseAlgorithm::start`] has run since the last reset.
    fn is_started(&self) -> bool;

    /// Prepares the algorithm for stepping.
    ///
    /// # Errors
    /// Implementation-defined.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Returns whether another call to [`StepwiseAlgorithm::do_next_step`]
    /// is due. Must not mutate observable state.
    ///
    /// # Errors
    /// Implementation-defined.
    fn setup_next_step(&self) -> Result<bool, Self::Error>;

    /// Performs one unit of work.
    ///
    /// # Errors
    /// Implementation-defined.
    fn do_next_step(&mut self) -> Result<Self::Outcome, Self::Error>;

    /// Terminal call once no steps remain.
    ///
    /// # Errors
    /// Implementation-defined.
    fn finish(&mut self) -> Result<(), Self::Error>;

    /// Advances by exactly one lifecycle call.
    ///
    /// Starts when not yet started, otherwise performs a step when one is due,
    /// otherwise finishes. Returns `false` once the finishing call has run.
    ///
    /// # Errors
    /// Propagates the error of whichever lifecycle call ran.
    fn step(&mut self) -> Result<bool, Self::Error> {
        if !self.is_started() {
            self.start()?;
            return Ok(true);
        }
        if self.setup_next_step()? {
            self.do_next_step()?;
            return Ok(true);
        }
        self.finish()?;
        Ok(false)
    }

    /// Calls [`StepwiseAlgorithm::step`] until it reports completion and
    /// returns how many calls were made.
    ///
    /// # Errors
    /// Propagates the first failing lifecycle call.
    fn run_to_completion(&mut self) -> Result<usize, Self::Error> {
        let mut calls = 1;
        while self.step()? {
            calls += 1;
        }
        Ok(calls)
    }
}

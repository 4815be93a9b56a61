//! Step-wise Kruskal construction of a minimum spanning forest.
//!
//! [`KruskalStepper`] is an explicit state machine driven one call at a time:
//! `start` queues every edge of the input graph in an [`OrderedTree`],
//! `do_next_step` pops the lightest edge and either accepts it into the output
//! subgraph or rejects it as cycle-forming, and `finish` tags whatever was
//! left over. Cycle detection asks the output subgraph for the reachable set
//! of one endpoint on every step, so each step costs `O(V + E)` on top of the
//! queue removal.
//!
//! Progress is observable through an [`Annotations`] side-table, the output
//! subgraph and the remaining queue. Tags never influence decisions.

mod annotation;
mod driver;

use tracing::{Span, debug, field, info, instrument};

use crate::{
    element::{Edge, EdgeId, Endpoints},
    error::{StepError, StepResult},
    graph::Graph,
    tree::OrderedTree,
};

pub use self::{
    annotation::{Annotation, Annotations},
    driver::StepwiseAlgorithm,
};

/// Lifecycle position of a [`KruskalStepper`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Phase {
    /// Bound to a graph, nothing queued.
    #[default]
    Reset,
    /// Edges queued, no step taken yet.
    Started,
    /// At least one step taken.
    Stepping,
    /// Terminal tags applied.
    Finished,
}

/// Whether a step kept or discarded its edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StepDecision {
    /// The edge joined two components and was added to the output.
    Accepted,
    /// The endpoints were already connected; the edge would close a cycle.
    Rejected,
}

/// What a single [`KruskalStepper::do_next_step`] call did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    edge: Edge,
    endpoints: Endpoints,
    decision: StepDecision,
}

impl StepOutcome {
    /// The edge taken from the queue.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Canonical endpoints of the edge in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> Endpoints { self.endpoints }

    /// Whether the edge was kept.
    #[must_use]
    #[rustfmt::skip]
    pub const fn decision(&self) -> StepDecision { self.decision }

    /// Returns `true` when the edge joined the spanning forest.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.decision == StepDecision::Accepted
    }
}

/// Counters accumulated since the last reset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StepStats {
    steps: usize,
    accepted: usize,
    rejected: usize,
    reachability_queries: usize,
}

impl StepStats {
    /// Completed calls to [`KruskalStepper::do_next_step`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn steps(&self) -> usize { self.steps }

    /// Edges added to the output subgraph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn accepted(&self) -> usize { self.accepted }

    /// Edges discarded as cycle-forming.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rejected(&self) -> usize { self.rejected }

    /// Reachable-set computations issued against the output subgraph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn reachability_queries(&self) -> usize { self.reachability_queries }
}

/// Resumable Kruskal state machine over a borrowed input graph.
///
/// # Examples
/// ```
/// use spanwise_core::{
///     Annotation, Edge, EdgeId, Graph, KruskalStepper, NodeId, StepwiseAlgorithm,
/// };
///
/// let mut graph = Graph::new();
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
/// graph.add_edge(Edge::new(EdgeId::new(0), 1.0), a, b)?;
/// graph.add_edge(Edge::new(EdgeId::new(1), 2.0), b, c)?;
/// graph.add_edge(Edge::new(EdgeId::new(2), 3.0), a, c)?;
///
/// let mut stepper = KruskalStepper::new(&graph);
/// stepper.run_to_completion()?;
///
/// assert_eq!(stepper.output().edge_count(), 2);
/// assert_eq!(stepper.annotations().edge(EdgeId::new(2)), Annotation::Inactive);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct KruskalStepper<'g> {
    graph: &'g Graph,
    queue: OrderedTree<Edge>,
    output: Graph,
    annotations: Annotations,
    phase: Phase,
    stats: StepStats,
}

impl<'g> KruskalStepper<'g> {
    /// Creates a stepper bound to `graph` in the [`Phase::Reset`] state.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            queue: OrderedTree::new(),
            output: Graph::with_config(graph.config()),
            annotations: Annotations::default(),
            phase: Phase::Reset,
            stats: StepStats::default(),
        }
    }

    /// Rebinds the stepper to `graph` and discards all progress.
    ///
    /// The queue, output subgraph, annotations and counters are cleared.
    pub fn reset(&mut self, graph: &'g Graph) {
        self.graph = graph;
        self.queue.make_empty();
        self.output = Graph::with_config(graph.config());
        self.annotations.clear();
        self.phase = Phase::Reset;
        self.stats = StepStats::default();
        debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "stepper reset");
    }

    /// Whether [`KruskalStepper::start`] has run since the last reset.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Reset
    }

    /// Queues every edge of the input graph and highlights the lightest one.
    ///
    /// # Errors
    /// Returns [`StepError::AlreadyStarted`] unless the stepper is in
    /// [`Phase::Reset`], and [`StepError::Tree`] if the queue rejects an edge.
    #[instrument(
        name = "stepper.start",
        err,
        skip(self),
        fields(vertices = self.graph.vertex_count(), edges = self.graph.edge_count()),
    )]
    pub fn start(&mut self) -> StepResult<()> {
        if self.is_started() {
            return Err(StepError::AlreadyStarted);
        }
        let mut queue = OrderedTree::new();
        for edge in self.graph.edges() {
            queue.insert(edge)?;
        }
        self.queue = queue;
        self.phase = Phase::Started;
        self.highlight_next();
        Ok(())
    }

    /// Returns whether another [`KruskalStepper::do_next_step`] is due.
    ///
    /// `false` once the output holds `vertex_count - 1` edges or the queue is
    /// empty, and always `false` after [`KruskalStepper::finish`]. Calling
    /// this repeatedly without stepping returns the same answer.
    ///
    /// # Errors
    /// Returns [`StepError::NotStarted`] before [`KruskalStepper::start`].
    pub fn setup_next_step(&self) -> StepResult<bool> {
        match self.phase {
            Phase::Reset => Err(StepError::NotStarted),
            Phase::Finished => Ok(false),
            Phase::Started | Phase::Stepping => Ok(self.has_pending_work()),
        }
    }

    /// Takes the lightest queued edge and accepts or rejects it.
    ///
    /// # Errors
    /// Returns [`StepError::NotStarted`] or [`StepError::AlreadyFinished`]
    /// when called out of order, [`StepError::Tree`] when the queue is empty,
    /// and [`StepError::DetachedEdge`] if the edge lost its endpoints.
    #[instrument(
        name = "stepper.step",
        err,
        skip(self),
        fields(step = self.stats.steps, edge = field::Empty, weight = field::Empty),
    )]
    pub fn do_next_step(&mut self) -> StepResult<StepOutcome> {
        self.ensure_stepping()?;
        let edge = self.queue.remove_min()?;
        let span = Span::current();
        span.record("edge", field::display(edge.id()));
        span.record("weight", edge.weight());

        let endpoints = self
            .graph
            .endpoints(edge.id())
            .ok_or(StepError::DetachedEdge { edge: edge.id() })?;
        let (first, second) = (endpoints.first(), endpoints.second());

        let decision = if self.connected_in_output(endpoints) {
            self.annotations.mark_edge(edge.id(), Annotation::Inactive);
            self.stats.rejected += 1;
            record_rejected();
            debug!(edge = %edge.id(), first = %first, second = %second, "edge rejected: cycle");
            StepDecision::Rejected
        } else {
            self.output.add_edge(edge, first, second)?;
            self.annotations.mark_node(first, Annotation::Selected);
            self.annotations.mark_node(second, Annotation::Selected);
            self.annotations.mark_edge(edge.id(), Annotation::Selected);
            self.stats.accepted += 1;
            record_accepted();
            debug!(edge = %edge.id(), first = %first, second = %second, "edge accepted");
            StepDecision::Accepted
        };

        self.phase = Phase::Stepping;
        self.stats.steps += 1;
        if self.has_pending_work() {
            self.highlight_next();
        }
        Ok(StepOutcome {
            edge,
            endpoints,
            decision,
        })
    }

    /// Tags leftover queue entries as inactive and uncovered vertices as
    /// warnings.
    ///
    /// The leftover entries stay queued and remain visible through
    /// [`KruskalStepper::remaining`].
    ///
    /// # Errors
    /// Returns [`StepError::NotStarted`] or [`StepError::AlreadyFinished`]
    /// when called out of order.
    #[instrument(
        name = "stepper.finish",
        err,
        skip(self),
        fields(remaining = field::Empty, selected = self.output.edge_count()),
    )]
    pub fn finish(&mut self) -> StepResult<()> {
        self.ensure_stepping()?;
        let leftover: Vec<EdgeId> = self.queue.values().into_iter().map(Edge::id).collect();
        Span::current().record("remaining", leftover.len());
        for edge in leftover {
            self.annotations.mark_edge(edge, Annotation::Inactive);
        }

        let mut warnings = 0_usize;
        for vertex in self.graph.vertices() {
            if !self.output.contains_vertex(vertex) {
                self.annotations.mark_node(vertex, Annotation::Warning);
                warnings += 1;
            }
        }
        self.phase = Phase::Finished;
        info!(
            selected = self.output.edge_count(),
            warnings,
            steps = self.stats.steps,
            "spanning forest complete"
        );
        Ok(())
    }

    /// The input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &'g Graph { self.graph }

    /// The spanning forest built so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn output(&self) -> &Graph { &self.output }

    /// Current tags of vertices and edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn annotations(&self) -> &Annotations { &self.annotations }

    /// Edges still queued, lightest first when traversed in order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn remaining(&self) -> &OrderedTree<Edge> { &self.queue }

    /// Current lifecycle position.
    #[must_use]
    #[rustfmt::skip]
    pub const fn phase(&self) -> Phase { self.phase }

    /// Counters accumulated since the last reset.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> StepStats { self.stats }

    fn ensure_stepping(&self) -> StepResult<()> {
        match self.phase {
            Phase::Reset => Err(StepError::NotStarted),
            Phase::Finished => Err(StepError::AlreadyFinished),
            Phase::Started | Phase::Stepping => Ok(()),
        }
    }

    fn has_pending_work(&self) -> bool {
        let spanning = self.output.edge_count().saturating_add(1) == self.graph.vertex_count();
        !spanning && !self.queue.is_empty()
    }

    fn highlight_next(&mut self) {
        if let Some(next) = self.queue.find_min() {
            self.annotations.mark_edge(next.id(), Annotation::Highlighted);
        }
    }

    /// An endpoint missing from the output counts as not connected.
    fn connected_in_output(&mut self, endpoints: Endpoints) -> bool {
        self.stats.reachability_queries += 1;
        record_reachability_query();
        self.output
            .reachable_set(endpoints.first())
            .is_some_and(|reachable| reachable.contains(&endpoints.second()))
    }
}

impl StepwiseAlgorithm for KruskalStepper<'_> {
    type Outcome = StepOutcome;
    type Error = StepError;

    fn is_started(&self) -> bool {
        Self::is_started(self)
    }

    fn start(&mut self) -> StepResult<()> {
        Self::start(self)
    }

    fn setup_next_step(&self) -> StepResult<bool> {
        Self::setup_next_step(self)
    }

    fn do_next_step(&mut self) -> StepResult<StepOutcome> {
        Self::do_next_step(self)
    }

    fn finish(&mut self) -> StepResult<()> {
        Self::finish(self)
    }
}

#[cfg(feature = "metrics")]
fn record_accepted() {
    metrics::counter!("spanwise_edges_accepted_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_accepted() {}

#[cfg(feature = "metrics")]
fn record_rejected() {
    metrics::counter!("spanwise_edges_rejected_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_rejected() {}

#[cfg(feature = "metrics")]
fn record_reachability_query() {
    metrics::counter!("spanwise_reachability_queries_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_reachability_query() {}

#[cfg(test)]
mod property;

//! Command implementations and argument parsing for the spanwise CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use spanwise_core::{
    Annotation, Annotations, Edge, EdgeId, Graph, GraphBuilder, GraphError, KruskalStepper,
    NodeId, StepError, StepOutcome, StepStats,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::edge_spec::EdgeSpec;

/// Edges of the built-in demo graph as `(id, weight, a, b)`.
///
/// Six vertices `0..6`; vertex 4 stays isolated.
pub const DEMO_EDGES: [(u32, f32, u32, u32); 7] = [
    (0, 7.0, 2, 0),
    (1, 1.0, 3, 1),
    (2, 19.0, 1, 5),
    (3, 3.0, 3, 2),
    (4, 16.0, 2, 5),
    (5, 2.0, 3, 0),
    (6, 9.0, 0, 5),
];
const DEMO_VERTICES: u32 = 6;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Step through Kruskal's minimum spanning forest construction."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a graph from arguments and step through it.
    Run(RunCommand),
    /// Step through the built-in six-vertex graph.
    Demo,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Vertex to add, even without incident edges. Repeatable.
    #[arg(long = "vertex", value_name = "ID")]
    pub vertices: Vec<u32>,

    /// Edge to add as `ID:WEIGHT:A-B`. Repeatable.
    #[arg(long = "edge", value_name = "ID:WEIGHT:A-B")]
    pub edges: Vec<EdgeSpec>,

    /// Vertex ceiling for the graph.
    #[arg(long = "max-vertices", default_value_t = spanwise_core::DEFAULT_MAX_VERTICES)]
    pub max_vertices: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Building the input graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The stepper failed.
    #[error(transparent)]
    Step(#[from] StepError),
}

impl CliError {
    /// Stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(error) => Some(error.code().as_str()),
            Self::Step(error) => Some(error.code().as_str()),
        }
    }
}

/// Everything observed while stepping through one graph.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the graph came from (`demo` or `arguments`).
    pub source: &'static str,
    /// Vertex count of the input graph.
    pub vertices: usize,
    /// Edge count of the input graph.
    pub edges: usize,
    /// Edge arguments the graph silently declined.
    pub skipped: Vec<EdgeId>,
    /// One outcome per executed step, in order.
    pub steps: Vec<StepOutcome>,
    /// Queue contents left when the stepper finished.
    pub remaining: Vec<Edge>,
    /// The spanning forest.
    pub output: Graph,
    /// Final annotation side-table.
    pub annotations: Annotations,
    /// Stepper counters.
    pub stats: StepStats,
}

impl ExecutionSummary {
    /// Sum of the selected edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.output
            .edges()
            .map(|edge| f64::from(edge.weight()))
            .sum()
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built or the stepper fails.
///
/// # Examples
/// ```
/// # use spanwise_cli::cli::{Cli, Command, run_cli};
/// let summary = run_cli(Cli { command: Command::Demo }).expect("demo runs");
/// assert_eq!(summary.output.edge_count(), 4);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(&run)
        }
        Command::Demo => {
            span.record("command", field::display("demo"));
            let (graph, skipped) = build_demo_graph()?;
            execute(&graph, "demo", skipped)
        }
    }
}

pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let (graph, skipped) = build_graph(command)?;
    execute(&graph, "arguments", skipped)
}

/// Builds the input graph. Vertices come first, then edges in argument order.
pub(super) fn build_graph(command: &RunCommand) -> Result<(Graph, Vec<EdgeId>), CliError> {
    let mut graph = GraphBuilder::new()
        .with_max_vertices(command.max_vertices)
        .build()?;
    for &vertex in &command.vertices {
        graph.add_vertex(NodeId::new(vertex))?;
    }
    let mut skipped = Vec::new();
    for spec in &command.edges {
        if !graph.add_edge(spec.edge, spec.first, spec.second)? {
            warn!(edge = %spec.edge.id(), first = %spec.first, second = %spec.second, "edge argument skipped");
            skipped.push(spec.edge.id());
        }
    }
    Ok((graph, skipped))
}

fn build_demo_graph() -> Result<(Graph, Vec<EdgeId>), CliError> {
    let command = RunCommand {
        vertices: (0..DEMO_VERTICES).collect(),
        edges: DEMO_EDGES
            .iter()
            .map(|&(id, weight, a, b)| EdgeSpec {
                edge: Edge::new(EdgeId::new(id), weight),
                first: NodeId::new(a),
                second: NodeId::new(b),
            })
            .collect(),
        max_vertices: spanwise_core::DEFAULT_MAX_VERTICES,
    };
    build_graph(&command)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(graph, skipped),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn execute(
    graph: &Graph,
    source: &'static str,
    skipped: Vec<EdgeId>,
) -> Result<ExecutionSummary, CliError> {
    let mut stepper = KruskalStepper::new(graph);
    stepper.start()?;
    let mut steps = Vec::new();
    while stepper.setup_next_step()? {
        steps.push(stepper.do_next_step()?);
    }
    stepper.finish()?;

    let summary = ExecutionSummary {
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        skipped,
        steps,
        remaining: stepper.remaining().values().into_iter().copied().collect(),
        output: stepper.output().clone(),
        annotations: stepper.annotations().clone(),
        stats: stepper.stats(),
    };
    info!(
        selected = summary.output.edge_count(),
        steps = summary.steps.len(),
        "command completed"
    );
    Ok(summary)
}

/// Renders `summary` to `writer`: one line per step, then the forest.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use spanwise_cli::cli::{Cli, Command, render_summary, run_cli};
/// let summary = run_cli(Cli { command: Command::Demo }).expect("demo runs");
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer).expect("writing to a Vec succeeds");
/// let text = String::from_utf8(buffer).expect("output is UTF-8");
/// assert!(text.contains("step 1: e1 (n1-n3, weight 1) accepted"));
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph ({}): {} vertices, {} edges",
        summary.source, summary.vertices, summary.edges
    )?;
    if !summary.skipped.is_empty() {
        writeln!(writer, "skipped: {}", join(summary.skipped.iter()))?;
    }
    for (index, outcome) in summary.steps.iter().enumerate() {
        let ends = outcome.endpoints();
        let verdict = if outcome.is_accepted() {
            "accepted"
        } else {
            "rejected (cycle)"
        };
        writeln!(
            writer,
            "step {}: {} ({}-{}, weight {}) {verdict}",
            index + 1,
            outcome.edge().id(),
            ends.first(),
            ends.second(),
            outcome.edge().weight(),
        )?;
    }
    let selected: Vec<EdgeId> = summary.output.edges().map(|edge| edge.id()).collect();
    writeln!(writer, "selected: {}", join(selected.iter()))?;
    writeln!(writer, "total weight: {}", summary.total_weight())?;
    if !summary.remaining.is_empty() {
        writeln!(writer, "unexamined: {}", join(summary.remaining.iter()))?;
    }
    let warnings: Vec<NodeId> = summary
        .annotations
        .nodes_with(Annotation::Warning)
        .collect();
    if !warnings.is_empty() {
        writeln!(writer, "unreached: {}", join(warnings.iter()))?;
    }
    Ok(())
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(" ")
}

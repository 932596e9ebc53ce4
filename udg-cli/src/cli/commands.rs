//! Command implementations and argument parsing for the `udg` CLI.

use std::{
    io::{self, Write},
    num::NonZeroUsize,
    thread,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Dispatch, Span, dispatcher, field, info, instrument};
use udg_core::{
    AnalysisParams, AnalysisReport, CancellationToken, ExecutionStrategy, GraphStatistics,
    RadiusParams, SizeHistogram, UdgError, recompute_from,
};

const DEFAULT_VERTICES: usize = 1000;
const DEFAULT_HISTOGRAM_LIMIT: usize = 5;
const WORKER_THREAD_NAME: &str = "udg-analysis";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "udg", about = "Analyse random unit disk graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph and report its statistics.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of vertices to scatter in the unit square.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Connection radius. Overrides the derived `n^-(a/b + epsilon)` radius.
    #[arg(
        long,
        allow_hyphen_values = true,
        conflicts_with_all = ["exponent_numerator", "exponent_denominator", "epsilon"],
    )]
    pub radius: Option<f64>,

    /// Numerator `a` of the radius exponent.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub exponent_numerator: f64,

    /// Denominator `b` of the radius exponent.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub exponent_denominator: f64,

    /// Additive tweak `epsilon` of the radius exponent.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub epsilon: f64,

    /// Seed for vertex generation. Omit for a fresh random graph.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report the number of components with at least this many vertices.
    /// Defaults to the exponent numerator, truncated.
    #[arg(long)]
    pub min_component_size: Option<usize>,

    /// Largest component size listed individually in the histogram.
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_LIMIT)]
    pub histogram_limit: usize,

    /// Backend for the pairwise scans.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

impl Default for RunCommand {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            radius: None,
            exponent_numerator: 1.0,
            exponent_denominator: 1.0,
            epsilon: 0.0,
            seed: None,
            min_component_size: None,
            histogram_limit: DEFAULT_HISTOGRAM_LIMIT,
            strategy: StrategyArg::Auto,
        }
    }
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel when compiled in, sequential otherwise.
    Auto,
    /// Single-threaded scans.
    Sequential,
    /// Rayon-backed scans.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the parameters or failed while analysing.
    #[error(transparent)]
    Core(#[from] UdgError),
    /// The analysis worker thread could not be started.
    #[error("failed to spawn the analysis worker: {source}")]
    Spawn {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The analysis worker panicked before producing a report.
    #[error("the analysis worker panicked")]
    WorkerPanicked,
}

/// Summarises the outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Counters of the analysed graph.
    pub statistics: GraphStatistics,
    /// Radius the graph was built with.
    pub radius: f64,
    /// Threshold used for [`Self::components_at_least`].
    pub min_component_size: usize,
    /// Number of components with at least `min_component_size` vertices.
    pub components_at_least: usize,
    /// Total number of components.
    pub component_count: usize,
    /// Component counts per size.
    pub histogram: SizeHistogram,
}

impl ExecutionSummary {
    fn from_report(
        report: &AnalysisReport,
        radius: f64,
        min_component_size: usize,
        histogram_limit: usize,
    ) -> Self {
        let components = report.analysis().components();
        Self {
            statistics: report.statistics(),
            radius,
            min_component_size,
            components_at_least: components.count_at_least(min_component_size),
            component_count: components.len(),
            histogram: components.size_histogram(histogram_limit),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are invalid or the analysis
/// fails.
///
/// # Examples
/// ```
/// use udg_cli::cli::{Cli, Command, RunCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         vertices: 3,
///         radius: Some(0.0),
///         seed: Some(1),
///         ..RunCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.statistics.vertex_count, 3);
/// assert_eq!(summary.statistics.edge_count, 0);
/// assert_eq!(summary.component_count, 3);
/// # Ok::<(), udg_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        vertices = command.vertices,
        radius = field::Empty,
        strategy = ?command.strategy,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let radius = resolve_radius(&command)?;
    Span::current().record("radius", radius);

    let mut params = AnalysisParams::new(command.vertices, radius)?
        .with_execution_strategy(command.strategy.into());
    if let Some(seed) = command.seed {
        params = params.with_seed(seed);
    }

    let report = analyse_on_worker(params)?;
    let min_component_size = command
        .min_component_size
        .unwrap_or_else(|| default_min_component_size(command.exponent_numerator));
    let summary = ExecutionSummary::from_report(
        &report,
        radius,
        min_component_size,
        command.histogram_limit,
    );

    info!(
        edges = summary.statistics.edge_count,
        components = summary.component_count,
        "command completed"
    );
    Ok(summary)
}

/// Uses the explicit radius or derives it from the exponent parameters.
pub(super) fn resolve_radius(command: &RunCommand) -> Result<f64, UdgError> {
    if let Some(radius) = command.radius {
        return Ok(radius);
    }
    let count = NonZeroUsize::new(command.vertices).ok_or(UdgError::InvalidVertexCount {
        got: command.vertices,
    })?;
    RadiusParams::new(
        command.exponent_numerator,
        command.exponent_denominator,
        command.epsilon,
    )?
    .radius_for(count)
}

/// Integer part of the exponent numerator. Negative and NaN numerators map to
/// zero; the cast saturates.
pub(super) fn default_min_component_size(numerator: f64) -> usize {
    numerator as usize
}

/// Runs the pipeline on a dedicated thread and waits for the report.
///
/// The worker inherits the caller's subscriber and span so its diagnostics
/// nest under the command span.
fn analyse_on_worker(params: AnalysisParams) -> Result<AnalysisReport, CliError> {
    let dispatch = dispatcher::get_default(Dispatch::clone);
    let parent = Span::current();
    let cancel = CancellationToken::new();

    let worker = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_owned())
        .spawn(move || {
            dispatcher::with_default(&dispatch, || {
                parent.in_scope(|| recompute_from(&params, &cancel))
            })
        })
        .map_err(|source| CliError::Spawn { source })?;

    let report = worker.join().map_err(|_| CliError::WorkerPanicked)??;
    Ok(report)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use udg_cli::cli::{Cli, Command, RunCommand, render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         vertices: 1,
///         radius: Some(0.5),
///         histogram_limit: 2,
///         ..RunCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("n = 1\n|E| = 0\n"));
/// assert!(text.ends_with("largest (1): 1\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let statistics = &summary.statistics;
    writeln!(writer, "n = {}", statistics.vertex_count)?;
    writeln!(writer, "|E| = {}", statistics.edge_count)?;
    writeln!(writer, "r = {}", summary.radius)?;
    writeln!(writer, "free edges: {}", statistics.free_edge_count)?;
    writeln!(writer, "intersecting edges: {}", statistics.intersecting_edge_count)?;
    writeln!(writer, "super-free edges: {}", statistics.super_free_edge_count)?;
    writeln!(writer, "components: {}", summary.component_count)?;
    writeln!(
        writer,
        "components with >= {} vertices: {}",
        summary.min_component_size, summary.components_at_least
    )?;
    for (size, count) in summary.histogram.counts() {
        writeln!(writer, "{size}: {count}")?;
    }
    let (largest, count) = summary.histogram.largest();
    writeln!(writer, "largest ({largest}): {count}")?;
    Ok(())
}

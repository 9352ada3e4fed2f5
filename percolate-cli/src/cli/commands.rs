//! Command implementations and argument parsing for the percolate CLI.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use percolate_core::{
    GenerateError, Graph, GraphError, ParseError, largest_component_size, parse_edge_list,
    random_graph, random_weighted_graph, spanning_forest,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

const DEFAULT_VERTEX_COUNT: usize = 10_000;
const DEFAULT_EDGE_COUNT: usize = 20_000;
const DEFAULT_SEED: u64 = 1;
const DEFAULT_MAX_WEIGHT: u32 = 10;

/// Built-in weighted dataset used when the `mst` command's file is missing.
const DEFAULT_DATASET: &str = "4 4\n0 1 1.0\n1 2 2.0\n2 3 3.0\n0 3 10.0\n";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "percolate",
    about = "Analyze connectivity of large random undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Report the largest connected component size of a graph.
    Components(ComponentsCommand),
    /// Report the minimum spanning forest weight of a weighted graph.
    Mst(MstCommand),
    /// Average largest-component sizes across a range of edge counts.
    Sweep(SweepCommand),
    /// Find the edge count at which random graphs become reliably connected.
    Threshold(ThresholdCommand),
}

/// Options accepted by the `components` command.
#[derive(Debug, Args, Clone)]
pub struct ComponentsCommand {
    /// Graph source configuration.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Graph source configuration.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Graph sources shared by the single-graph commands.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Generate a seeded random graph.
    Random(RandomArgs),
    /// Parse an edge-list file.
    File(FileArgs),
}

/// Random generation arguments.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of vertices.
    #[arg(long, default_value_t = DEFAULT_VERTEX_COUNT)]
    pub vertices: usize,

    /// Number of distinct edges.
    #[arg(long, default_value_t = DEFAULT_EDGE_COUNT)]
    pub edges: usize,

    /// Generator seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum integer edge weight; omit for an unweighted graph.
    #[arg(long)]
    pub max_weight: Option<u32>,
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to an edge-list document.
    pub path: PathBuf,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Number of vertices in every generated graph.
    #[arg(long, default_value_t = DEFAULT_VERTEX_COUNT)]
    pub vertices: usize,

    /// First edge count of the inclusive range.
    #[arg(long, default_value_t = 1_000)]
    pub edges_from: usize,

    /// Last edge count of the inclusive range.
    #[arg(long, default_value_t = 20_000)]
    pub edges_to: usize,

    /// Increment between successive edge counts.
    #[arg(long, default_value_t = 1_000)]
    pub edges_step: usize,

    /// Uniquely seeded graphs averaged per edge count.
    #[arg(long, default_value_t = 100)]
    pub reps: usize,

    /// First generator seed; repetitions use consecutive seeds.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Options accepted by the `threshold` command.
#[derive(Debug, Args, Clone)]
pub struct ThresholdCommand {
    /// Number of vertices in every generated graph.
    #[arg(long, default_value_t = DEFAULT_VERTEX_COUNT)]
    pub vertices: usize,

    /// Edge count at which the search begins.
    #[arg(long, default_value_t = 20_000)]
    pub edges_start: usize,

    /// Increment applied after each failed candidate.
    #[arg(long, default_value_t = 1_000)]
    pub edges_step: usize,

    /// Uniquely seeded graphs that must all be fully connected.
    #[arg(long, default_value_t = 100)]
    pub reps: usize,

    /// Probe seed; verification repetitions use the seeds after it.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Random graph generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The sweep range contains no edge counts.
    #[error("edges-from {from} exceeds edges-to {to}")]
    EmptySweepRange {
        /// First edge count of the requested range.
        from: usize,
        /// Last edge count of the requested range.
        to: usize,
    },
    /// A step of zero would never advance the range.
    #[error("edges-step must be at least 1")]
    ZeroStep,
    /// Zero repetitions would average over nothing.
    #[error("reps must be at least 1")]
    ZeroReps,
}

/// One averaged data point of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    /// Edge count the repetitions were generated with.
    pub edge_count: usize,
    /// Mean largest-component size across the repetitions.
    pub average_largest: f64,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum RunSummary {
    /// Largest-component analysis of a single graph.
    Components {
        /// Label describing where the graph came from.
        source: String,
        /// Vertex count of the analyzed graph.
        vertices: usize,
        /// Edge count of the analyzed graph.
        edges: usize,
        /// Size of the largest connected component.
        largest: usize,
    },
    /// Spanning-forest analysis of a single graph.
    Forest {
        /// Label describing where the graph came from.
        source: String,
        /// Vertex count of the analyzed graph.
        vertices: usize,
        /// Edge count of the analyzed graph.
        edges: usize,
        /// Total weight of the accepted edges.
        total_weight: f64,
        /// Number of accepted edges.
        edges_used: usize,
        /// Connected components spanned by the forest.
        component_count: usize,
    },
    /// Averaged sweep over a range of edge counts.
    Sweep {
        /// Vertex count of every generated graph.
        vertices: usize,
        /// Repetitions averaged per edge count.
        reps: usize,
        /// One row per edge count, in ascending order.
        rows: Vec<SweepRow>,
    },
    /// Connectivity-threshold search result.
    Threshold {
        /// Vertex count of every generated graph.
        vertices: usize,
        /// Repetitions verified at the reported edge count.
        reps: usize,
        /// First edge count whose repetitions were all fully connected.
        edges: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation, or validation fails.
///
/// # Examples
/// ```
/// # use percolate_cli::cli::{
/// #     Cli, Command, ComponentsCommand, GraphSource, RandomArgs, RunSummary, run_cli,
/// # };
/// let cli = Cli {
///     command: Command::Components(ComponentsCommand {
///         source: GraphSource::Random(RandomArgs {
///             vertices: 12,
///             edges: 8,
///             seed: 1,
///             max_weight: None,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary, RunSummary::Components { vertices: 12, .. }));
/// # Ok::<(), percolate_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Components(command) => {
            span.record("command", field::display("components"));
            run_components(command)
        }
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(command)
        }
        Command::Sweep(command) => {
            span.record("command", field::display("sweep"));
            run_sweep(command)
        }
        Command::Threshold(command) => {
            span.record("command", field::display("threshold"));
            run_threshold(command)
        }
    }
}

#[instrument(name = "cli.components", err, skip(command), fields(source = field::Empty))]
fn run_components(command: ComponentsCommand) -> Result<RunSummary, CliError> {
    let (graph, source) = match command.source {
        GraphSource::Random(args) => (generate(&args)?, String::from("random")),
        GraphSource::File(args) => (open_edge_list(&args.path)?, display_path(&args.path)),
    };
    Span::current().record("source", field::display(&source));

    let largest = largest_component_size(&graph);
    info!(
        source = source.as_str(),
        largest, "component analysis completed"
    );
    Ok(RunSummary::Components {
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        largest,
    })
}

#[instrument(name = "cli.mst", err, skip(command), fields(source = field::Empty))]
fn run_mst(command: MstCommand) -> Result<RunSummary, CliError> {
    let (graph, source) = match command.source {
        GraphSource::Random(args) => {
            let max_weight = args.max_weight.unwrap_or(DEFAULT_MAX_WEIGHT);
            let graph =
                random_weighted_graph(args.vertices, args.edges, max_weight, args.seed)?;
            (graph, String::from("random"))
        }
        GraphSource::File(args) => open_edge_list_or_default(&args.path)?,
    };
    Span::current().record("source", field::display(&source));

    let forest = spanning_forest(&graph);
    info!(
        source = source.as_str(),
        total_weight = forest.total_weight(),
        edges_used = forest.edge_count(),
        "forest analysis completed"
    );
    Ok(RunSummary::Forest {
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        total_weight: forest.total_weight(),
        edges_used: forest.edge_count(),
        component_count: forest.component_count(),
    })
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(vertices = command.vertices, reps = command.reps),
)]
fn run_sweep(command: SweepCommand) -> Result<RunSummary, CliError> {
    validate_reps_and_step(command.reps, command.edges_step)?;
    if command.edges_from > command.edges_to {
        return Err(CliError::EmptySweepRange {
            from: command.edges_from,
            to: command.edges_to,
        });
    }

    let mut rows = Vec::new();
    let mut edge_count = command.edges_from;
    while edge_count <= command.edges_to {
        let mut total = 0_u64;
        for rep in 0..command.reps {
            let seed = command.seed + rep as u64;
            let graph = random_graph(command.vertices, edge_count, seed)?;
            total += largest_component_size(&graph) as u64;
        }
        let average_largest = total as f64 / command.reps as f64;
        info!(edge_count, average_largest, "sweep row completed");
        rows.push(SweepRow {
            edge_count,
            average_largest,
        });
        edge_count += command.edges_step;
    }

    Ok(RunSummary::Sweep {
        vertices: command.vertices,
        reps: command.reps,
        rows,
    })
}

/// Searches for the smallest probed edge count at which `reps` uniquely
/// seeded graphs are all fully connected.
///
/// Each candidate is probed with a single seed first; only a fully
/// connected probe pays for the verification round, and the first
/// disconnected repetition moves the search on. The search is bounded by
/// the generator's capacity guard: a candidate beyond the complete-graph
/// edge count fails with [`GenerateError::TooManyEdges`].
#[instrument(
    name = "cli.threshold",
    err,
    skip(command),
    fields(vertices = command.vertices, reps = command.reps),
)]
fn run_threshold(command: ThresholdCommand) -> Result<RunSummary, CliError> {
    validate_reps_and_step(command.reps, command.edges_step)?;

    let mut edge_count = command.edges_start;
    loop {
        let probe = random_graph(command.vertices, edge_count, command.seed)?;
        if largest_component_size(&probe) == command.vertices
            && verify_connectivity(&command, edge_count)?
        {
            info!(edge_count, "connectivity threshold found");
            return Ok(RunSummary::Threshold {
                vertices: command.vertices,
                reps: command.reps,
                edges: edge_count,
            });
        }
        edge_count += command.edges_step;
    }
}

fn verify_connectivity(command: &ThresholdCommand, edge_count: usize) -> Result<bool, CliError> {
    for rep in 0..command.reps {
        let seed = command.seed + 1 + rep as u64;
        let graph = random_graph(command.vertices, edge_count, seed)?;
        if largest_component_size(&graph) != command.vertices {
            info!(edge_count, rep, "candidate rejected, advancing edge count");
            return Ok(false);
        }
    }
    Ok(true)
}

fn validate_reps_and_step(reps: usize, step: usize) -> Result<(), CliError> {
    if reps == 0 {
        return Err(CliError::ZeroReps);
    }
    if step == 0 {
        return Err(CliError::ZeroStep);
    }
    Ok(())
}

fn generate(args: &RandomArgs) -> Result<Graph, CliError> {
    let graph = match args.max_weight {
        Some(max_weight) => random_weighted_graph(args.vertices, args.edges, max_weight, args.seed)?,
        None => random_graph(args.vertices, args.edges, args.seed)?,
    };
    Ok(graph)
}

#[instrument(name = "cli.open_edge_list", err, fields(path = %path.display()))]
fn open_edge_list(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_edge_list(BufReader::new(file))?)
}

/// Opens and parses `path`, degrading to the built-in default dataset when
/// the file does not exist. Any other failure, including malformed content
/// in a file that does open, is loud.
fn open_edge_list_or_default(path: &Path) -> Result<(Graph, String), CliError> {
    match File::open(path) {
        Ok(file) => {
            let graph = parse_edge_list(BufReader::new(file))?;
            Ok((graph, display_path(path)))
        }
        Err(source) if source.kind() == ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "edge-list file not found, continuing with the built-in dataset"
            );
            let graph = parse_edge_list(DEFAULT_DATASET.as_bytes())?;
            Ok((graph, String::from("builtin")))
        }
        Err(source) => Err(CliError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use percolate_cli::cli::{RunSummary, render_summary};
/// let summary = RunSummary::Components {
///     source: "random".into(),
///     vertices: 10,
///     edges: 5,
///     largest: 4,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("largest component size: 4"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        RunSummary::Components {
            source,
            vertices,
            edges,
            largest,
        } => {
            writeln!(writer, "source: {source}")?;
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "edges: {edges}")?;
            writeln!(writer, "largest component size: {largest}")?;
        }
        RunSummary::Forest {
            source,
            vertices,
            edges,
            total_weight,
            edges_used,
            component_count,
        } => {
            writeln!(writer, "source: {source}")?;
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "edges: {edges}")?;
            writeln!(writer, "spanning forest weight: {total_weight}")?;
            writeln!(writer, "edges used: {edges_used}")?;
            writeln!(writer, "components: {component_count}")?;
        }
        RunSummary::Sweep {
            vertices,
            reps,
            rows,
        } => {
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "reps per edge count: {reps}")?;
            for row in rows {
                writeln!(
                    writer,
                    "{} edges\taverage largest component {:.2}",
                    row.edge_count, row.average_largest
                )?;
            }
        }
        RunSummary::Threshold {
            vertices,
            reps,
            edges,
        } => {
            writeln!(writer, "vertices: {vertices}")?;
            writeln!(writer, "reps per candidate: {reps}")?;
            writeln!(writer, "edges for reliable full connectivity: {edges}")?;
        }
    }
    Ok(())
}

//! Command-line interface orchestration for percolate.
//!
//! Offers four commands: `components` and `mst` analyze one graph sourced
//! from a seeded generator or an edge-list file, while `sweep` and
//! `threshold` run the statistical experiments over families of random
//! graphs.

mod commands;

pub use commands::{
    Cli, CliError, Command, ComponentsCommand, FileArgs, GraphSource, MstCommand, RandomArgs,
    RunSummary, SweepCommand, SweepRow, ThresholdCommand, render_summary, run_cli,
};

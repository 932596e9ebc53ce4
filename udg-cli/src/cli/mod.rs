//! Command-line interface for the unit disk graph analysis engine.
//!
//! The `run` command generates one random graph, analyses it on a worker
//! thread, and prints the statistics and component-size histogram.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, StrategyArg, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;

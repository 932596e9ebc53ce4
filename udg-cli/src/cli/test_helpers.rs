//! Small helpers shared across CLI tests.

use clap::Parser;

use super::commands::run_command;
use super::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary};

/// Parses `udg run <args>`.
pub(super) fn parse_run(args: &[&str]) -> Result<RunCommand, clap::Error> {
    let cli = Cli::try_parse_from(["udg", "run"].iter().chain(args))?;
    match cli.command {
        Command::Run(run) => Ok(run),
    }
}

pub(super) fn seeded_command(vertices: usize, radius: f64, seed: u64) -> RunCommand {
    RunCommand {
        vertices,
        radius: Some(radius),
        seed: Some(seed),
        ..RunCommand::default()
    }
}

pub(super) fn run_command_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer).expect("rendering into memory must succeed");
    String::from_utf8(buffer).expect("summary must be valid UTF-8")
}

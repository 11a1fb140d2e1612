//! Core library entry for the `kringle` CLI.

pub mod adapters;
pub mod assign;
pub mod cli;
pub mod commands;
pub mod context;
pub mod draw;
pub mod model;
pub mod notify;
pub mod ports;
pub mod store;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Help and version requests are not failures: clap reports them as
/// parse errors, so they are printed here and mapped to `Ok`.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().map_err(|e| format!("Failed to print help: {e}"))?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

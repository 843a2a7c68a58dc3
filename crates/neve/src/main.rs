//! Command-line entry point.

use anyhow::Result;
use neve::{USAGE, parse_args, run};
use std::env;
use std::io::{Write as _, stderr, stdout};

/// Main entry point for the neve CLI tool.
///
/// # Errors
/// Returns an error if argument parsing or the command fails.
fn main() -> Result<()> {
    env_logger::init();

    let invocation = match parse_args(env::args().skip(1).collect()) {
        Ok(invocation) => invocation,
        Err(err) => {
            drop(writeln!(stderr(), "{USAGE}"));
            return Err(err);
        }
    };
    let output = run(&invocation)?;
    writeln!(stdout().lock(), "{output}")?;
    Ok(())
}

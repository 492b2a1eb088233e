//! Command handlers
//!
//! Each handler writes to a caller-supplied writer so tests can capture
//! output without spawning the binary.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::{EvalArgs, KeysArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output;
use crate::session::Session;

/// Types an expression, evaluates it and prints the result
pub fn run_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let mut session = Session::new(config);
    session.evaluate_expression(&args.expression)?;
    print_report(&mut session, config, out)
}

/// Presses the named keys in order and prints the final display
pub fn run_keys<W: Write>(config: &CliConfig, args: &KeysArgs, out: &mut W) -> CliResult<()> {
    let mut session = Session::new(config);
    session.press_all(&args.keys)?;
    print_report(&mut session, config, out)
}

/// Feeds each input line into one session, printing the display per line
///
/// Blank lines are skipped. `quit` or `exit` ends the session early.
pub fn run_repl<R: BufRead, W: Write>(config: &CliConfig, input: R, out: &mut W) -> CliResult<()> {
    let mut session = Session::new(config);
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            debug!("repl exit requested");
            break;
        }
        session.type_text(line)?;
        print_report(&mut session, config, out)?;
    }
    info!("repl finished");
    Ok(())
}

fn print_report<W: Write>(session: &mut Session, config: &CliConfig, out: &mut W) -> CliResult<()> {
    let report = session.take_report();
    writeln!(out, "{}", output::render(&report, config)?)?;
    Ok(())
}

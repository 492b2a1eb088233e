//! keycalc: keystroke calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keycalc eval "3+4*2"                 # prints 11
//! keycalc keys 1 2 Backspace + 5 =     # prints 6
//! keycalc --format json eval "1/0"     # JSON report
//! echo "2+2=" | keycalc repl           # one session over stdin
//! ```

use clap::Parser;
use keycalc_cli::{
    handlers::{run_eval, run_keys, run_repl},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, OutputFormat, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli)?;
    logging::init(&config);
    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args, &mut out),
        Commands::Keys(args) => run_keys(&config, &args, &mut out),
        Commands::Repl => run_repl(&config, std::io::stdin().lock(), &mut out),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    let format: OutputFormat = cli.format.clone().into();

    let mut config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(format)
        .with_strict(cli.strict)
        .with_trace(cli.trace);

    if let Some(path) = &cli.config {
        config = config.load_evaluator(path)?;
    }
    // Command-line digits win over the file
    if let Some(digits) = cli.fraction_digits {
        let evaluator = config
            .evaluator
            .clone()
            .with_fraction_digits(usize::from(digits));
        config = config.with_evaluator(evaluator);
    }
    Ok(config)
}

//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keycalc: keystroke-driven four-function calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress warnings)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format
    #[arg(long, default_value = "text", env = "KEYCALC_FORMAT", global = true)]
    pub format: FormatArg,

    /// Reject unknown keys instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print the display after every key
    #[arg(long, global = true)]
    pub trace: bool,

    /// Evaluator settings file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the fractional digit cap (1-17)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=17))]
    pub fraction_digits: Option<u8>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Type an expression character by character and evaluate it
    Eval(EvalArgs),

    /// Press named keys in order
    Keys(KeysArgs),

    /// Read key lines from stdin into one running session
    Repl,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression to type, e.g. "3+4*2"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Key names (digits, operators, `=`, `Enter`, `Backspace`, `Escape`)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum FormatArg {
    /// Display text only
    #[default]
    Text,
    /// JSON report
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, OutputFormat};

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_eval_command() {
            let cli = Cli::parse_from(["keycalc", "eval", "3+4"]);
            match cli.command {
                Commands::Eval(args) => assert_eq!(args.expression, "3+4"),
                _ => panic!("expected eval"),
            }
        }

        #[test]
        fn test_parse_eval_leading_minus() {
            let cli = Cli::parse_from(["keycalc", "eval", "-5+2"]);
            match cli.command {
                Commands::Eval(args) => assert_eq!(args.expression, "-5+2"),
                _ => panic!("expected eval"),
            }
        }

        #[test]
        fn test_parse_keys_command() {
            let cli = Cli::parse_from(["keycalc", "keys", "9", "-", "Backspace", "="]);
            match cli.command {
                Commands::Keys(args) => assert_eq!(args.keys, ["9", "-", "Backspace", "="]),
                _ => panic!("expected keys"),
            }
        }

        #[test]
        fn test_keys_requires_a_key() {
            assert!(Cli::try_parse_from(["keycalc", "keys"]).is_err());
        }

        #[test]
        fn test_parse_repl_command() {
            let cli = Cli::parse_from(["keycalc", "repl"]);
            assert!(matches!(cli.command, Commands::Repl));
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from([
                "keycalc",
                "-vv",
                "--strict",
                "--trace",
                "--format",
                "json",
                "--fraction-digits",
                "3",
                "eval",
                "1",
            ]);
            assert_eq!(cli.verbose, 2);
            assert!(cli.strict);
            assert!(cli.trace);
            assert!(matches!(cli.format, FormatArg::Json));
            assert_eq!(cli.fraction_digits, Some(3));
        }

        #[test]
        fn test_fraction_digits_range() {
            let parse = |digits: &str| {
                Cli::try_parse_from(["keycalc", "--fraction-digits", digits, "eval", "1"])
            };
            assert!(parse("1").is_ok());
            assert!(parse("17").is_ok());
            assert!(parse("0").is_err());
            assert!(parse("18").is_err());
            assert!(parse("18446744073709551615").is_err());
        }

        #[test]
        fn test_config_path() {
            let cli = Cli::parse_from(["keycalc", "--config", "calc.json", "repl"]);
            assert_eq!(cli.config, Some(PathBuf::from("calc.json")));
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_format_arg_conversion() {
            assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
            assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        }
    }
}

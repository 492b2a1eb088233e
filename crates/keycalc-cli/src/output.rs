//! Report rendering

use console::{style, Style};
use keycalc::core::evaluator::Evaluation;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use crate::session::SessionReport;

/// Renders a report in the configured format, without a trailing newline
pub fn render(report: &SessionReport, config: &CliConfig) -> CliResult<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Text => Ok(render_text(report, config.color.should_color())),
    }
}

fn render_text(report: &SessionReport, colored: bool) -> String {
    let mut lines: Vec<String> = report
        .steps
        .iter()
        .map(|step| {
            let key = style(format!("{:>9}", step.key)).dim().force_styling(colored);
            format!("{key}  {}", step.display)
        })
        .collect();
    lines.push(
        display_style(report.outcome)
            .force_styling(colored)
            .apply_to(&report.display)
            .to_string(),
    );
    lines.join("\n")
}

fn display_style(outcome: Option<Evaluation>) -> Style {
    match outcome {
        Some(Evaluation::Infinity) => Style::new().yellow().bold(),
        Some(Evaluation::Value(_)) => Style::new().green().bold(),
        None => Style::new(),
    }
}

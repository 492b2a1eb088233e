//! Keystroke session
//!
//! A [`Session`] owns one calculator and feeds it keys from the command line
//! or stdin, recording the display after each key when tracing is on.

use keycalc::core::evaluator::Evaluation;
use keycalc::driver::{CalculatorDriver, TextDriver};
use keycalc::web::KeypadAction;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Display state after one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key name as pressed
    pub key: String,
    /// Display text afterwards
    pub display: String,
}

/// Result of a run of keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Final display text
    pub display: String,
    /// Most recent evaluation outcome, if any
    pub outcome: Option<Evaluation>,
    /// Per-key trace (empty unless tracing)
    pub steps: Vec<Step>,
}

/// A running calculator fed from the CLI
#[derive(Debug)]
pub struct Session {
    driver: TextDriver,
    strict: bool,
    trace: bool,
    steps: Vec<Step>,
}

impl Session {
    /// Creates a session from CLI settings
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            driver: TextDriver::with_config(config.evaluator.clone()),
            strict: config.strict,
            trace: config.trace,
            steps: Vec::new(),
        }
    }

    /// Presses one named key
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownKey`] in strict mode when the key has no
    /// calculator action. Otherwise unknown keys are skipped with a warning.
    pub fn press(&mut self, key: &str) -> CliResult<()> {
        if KeypadAction::from_key(key).is_none() {
            if self.strict {
                return Err(CliError::unknown_key(key));
            }
            warn!(key, "ignoring unknown key");
            return Ok(());
        }
        self.driver.press_key(key);
        if self.trace {
            self.steps.push(Step {
                key: key.to_string(),
                display: self.driver.display(),
            });
        }
        Ok(())
    }

    /// Presses each key in order, stopping at the first rejected key
    pub fn press_all<I, K>(&mut self, keys: I) -> CliResult<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter().try_for_each(|key| self.press(key.as_ref()))
    }

    /// Types every non-whitespace character of `text` as a key
    pub fn type_text(&mut self, text: &str) -> CliResult<()> {
        debug!(text, "typing");
        let mut buf = [0u8; 4];
        text.chars()
            .filter(|c| !c.is_whitespace())
            .try_for_each(|c| self.press(c.encode_utf8(&mut buf)))
    }

    /// Types an expression and presses `=` unless it already ends with one
    pub fn evaluate_expression(&mut self, expression: &str) -> CliResult<()> {
        self.type_text(expression)?;
        if !expression.trim_end().ends_with('=') {
            self.press("=")?;
        }
        Ok(())
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> String {
        self.driver.display()
    }

    /// Snapshot of the session, draining the recorded steps
    pub fn take_report(&mut self) -> SessionReport {
        SessionReport {
            display: self.driver.display(),
            outcome: self.driver.last_evaluation(),
            steps: std::mem::take(&mut self.steps),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keycalc::core::{EvaluatorConfig, INFINITY_TEXT};

    fn session() -> Session {
        Session::new(&CliConfig::new())
    }

    #[test]
    fn test_evaluate_expression_appends_equals() {
        let mut s = session();
        s.evaluate_expression("3+4*2").unwrap();
        let report = s.take_report();
        assert_eq!(report.display, "11");
        assert_eq!(report.outcome, Some(Evaluation::Value(11.0)));
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_evaluate_expression_with_trailing_equals() {
        let mut s = session();
        s.evaluate_expression("6/3 =").unwrap();
        assert_eq!(s.display(), "2");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let mut s = session();
        s.evaluate_expression(" 1 + 2 ").unwrap();
        assert_eq!(s.display(), "3");
    }

    #[test]
    fn test_division_by_zero() {
        let mut s = session();
        s.evaluate_expression("5/0").unwrap();
        let report = s.take_report();
        assert_eq!(report.display, INFINITY_TEXT);
        assert_eq!(report.outcome, Some(Evaluation::Infinity));
    }

    #[test]
    fn test_named_keys() {
        let mut s = session();
        s.press_all(["1", "2", "Backspace", "+", "5", "Enter"]).unwrap();
        assert_eq!(s.display(), "6");
        s.press("Escape").unwrap();
        assert_eq!(s.display(), "");
    }

    #[test]
    fn test_unknown_key_skipped_by_default() {
        let mut s = session();
        s.press_all(["4", "Tab", "2"]).unwrap();
        assert_eq!(s.display(), "42");
    }

    #[test]
    fn test_unknown_key_rejected_when_strict() {
        let mut s = Session::new(&CliConfig::new().with_strict(true));
        let err = s.press_all(["4", "Tab", "2"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownKey { ref key } if key == "Tab"));
        assert_eq!(s.display(), "4");
    }

    #[test]
    fn test_trace_records_steps() {
        let mut s = Session::new(&CliConfig::new().with_trace(true));
        s.evaluate_expression("2*3").unwrap();
        let report = s.take_report();
        let keys: Vec<_> = report.steps.iter().map(|st| st.key.as_str()).collect();
        let shown: Vec<_> = report.steps.iter().map(|st| st.display.as_str()).collect();
        assert_eq!(keys, ["2", "*", "3", "="]);
        assert_eq!(shown, ["2", "2 * ", "2 * 3", "6"]);
        assert!(s.take_report().steps.is_empty());
    }

    #[test]
    fn test_session_persists_between_lines() {
        let mut s = session();
        s.type_text("2+2=").unwrap();
        s.type_text("+3=").unwrap();
        assert_eq!(s.display(), "7");
    }

    #[test]
    fn test_evaluator_settings_apply() {
        let config = CliConfig::new()
            .with_evaluator(EvaluatorConfig::new().with_fraction_digits(2));
        let mut s = Session::new(&config);
        s.evaluate_expression("2/3").unwrap();
        assert_eq!(s.display(), "0.67");
    }

    #[test]
    fn test_report_serializes() {
        let mut s = session();
        s.evaluate_expression("1+1").unwrap();
        let json = serde_json::to_value(s.take_report()).unwrap();
        assert_eq!(json["display"], "2");
        assert_eq!(json["outcome"]["kind"], "value");
        assert_eq!(json["outcome"]["value"], 2.0);
    }
}

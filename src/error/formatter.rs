use std::error::Error;
use std::io::IsTerminal;
use std::sync::LazyLock;

use owo_colors::OwoColorize;
use regex::Regex;

use super::DevcnError;

static QUERY_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&])([^=&\s]+)=([^&\s]+)").expect("query pattern is valid"));

/// Formats DevcnError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &DevcnError) -> String {
        let mut output = format!("error[{}]: {}", error.code().as_str(), error);

        if self.verbose {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Cause: {}", error.code().cause()));

            output.push_str("\n  |");
            output.push_str("\n  | Remediation:");
            for line in error.code().remediation().lines() {
                output.push_str(&format!("\n  |   {}", line));
            }

            let source_chain = self.format_source_chain(error);
            if !source_chain.is_empty() {
                output.push_str("\n  |");
                output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
            }

            output.push_str("\n  |");
            output.push_str("\n  = note: use `devcn-ui --help` for more information");
        }

        let masked = Self::mask_query_params(&output);

        if self.use_color {
            self.apply_color(&masked)
        } else {
            masked
        }
    }

    fn format_source_chain(&self, error: &DevcnError) -> String {
        let mut chain = Vec::new();
        let mut current = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }

    /// クエリ文字列の値をマスク: ?token=xxx -> ?token=***
    fn mask_query_params(text: &str) -> String {
        QUERY_PARAM_RE.replace_all(text, "$1$2=***").into_owned()
    }

    fn apply_color(&self, text: &str) -> String {
        text.lines()
            .map(|line| {
                if line.starts_with("error[") {
                    let bracket_end = line.find(']').map(|i| i + 1).unwrap_or(0);
                    let (prefix, rest) = line.split_at(bracket_end);
                    format!("{}{}", prefix.red().bold(), rest.bold())
                } else if line.starts_with("  | Cause:") {
                    line.yellow().to_string()
                } else if line.starts_with("  | Remediation:") {
                    line.green().to_string()
                } else if line.starts_with("  = note:") {
                    line.dimmed().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

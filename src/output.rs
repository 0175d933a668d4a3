use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(success: usize, failure: usize) -> Self {
        match (success, failure) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} succeeded, {} failed", success.green(), f.red()),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} component(s) added", s.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No components to add".to_string(),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_wins_over_success() {
        let summary = CommandSummary::format(2, 1);
        assert!(summary.message.contains("succeeded"));
        assert!(summary.message.contains("failed"));
    }

    #[test]
    fn all_succeeded() {
        let summary = CommandSummary::format(3, 0);
        assert!(summary.message.contains("component(s) added"));
    }

    #[test]
    fn nothing_done() {
        let summary = CommandSummary::format(0, 0);
        assert_eq!(summary.message, "No components to add");
    }
}

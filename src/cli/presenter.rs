//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print the result of one script command to stdout
    pub fn result(&self, command: &str, description: &str) {
        println!("{}: {}", command.bold(), description);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// One-line canvas summary; selected items are marked with `*`
    pub fn format_canvas<'a>(
        &self,
        items: impl IntoIterator<Item = &'a str>,
        selected: &[usize],
    ) -> String {
        let rendered: Vec<String> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if selected.contains(&index) {
                    format!("*{}", item)
                } else {
                    item.to_string()
                }
            })
            .collect();

        if rendered.is_empty() {
            "(empty)".to_string()
        } else {
            rendered.join(" | ")
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

//! Progress indicators

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// One analysis phase backed by an indicatif spinner on stderr.
///
/// On a non-TTY the spinner draws nothing, but the finish line is still
/// emitted via `eprintln!`.
pub struct Step {
    pb: ProgressBar,
    label: String,
}

impl Step {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("  {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(format!("{}...", label));
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { pb, label }
    }

    /// Prints `"  label... done ({summary})"`
    pub fn finish(&self, summary: &str) {
        self.pb.finish_and_clear();
        eprintln!("  {}... {} ({})", self.label, "done".green(), summary);
    }

    /// Prints `"  label... failed"`
    pub fn fail(&self) {
        self.pb.finish_and_clear();
        eprintln!("  {}... {}", self.label, "failed".red());
    }
}

//! JSON output formatting

use anyhow::{Context, Result};
use codemap_core::Report;
use serde::Serialize;

/// Pretty-printed report document
pub fn render<T: Serialize>(report: &Report<T>) -> Result<String> {
    serde_json::to_string_pretty(report)
        .with_context(|| format!("failed to serialize {} report", report.operation))
}

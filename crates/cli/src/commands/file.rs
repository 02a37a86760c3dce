//! `codemap file` - single-file analysis

use crate::output;
use crate::OutputFormat;
use anyhow::Result;
use codemap_core::{FileReport, Operation, ProjectAnalyzer, Report};
use std::path::Path;

pub fn run(base_path: &Path, file_path: &str, format: OutputFormat) -> Result<()> {
    let report = collect(base_path, file_path);
    output::emit(&report, format, output::terminal::format_file)
}

pub fn collect(base_path: &Path, file_path: &str) -> Report<FileReport> {
    match ProjectAnalyzer::open(base_path) {
        Ok(analyzer) => analyzer.file_report(file_path),
        Err(e) => Report::from_error(Operation::AnalyzeFileContent, &e),
    }
}

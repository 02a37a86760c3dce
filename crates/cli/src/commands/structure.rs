//! `codemap structure` - tree, statistics and dependency signals

use crate::output;
use crate::progress::Step;
use crate::OutputFormat;
use anyhow::Result;
use codemap_core::{Operation, ProjectAnalyzer, Report, StructureReport};
use std::path::Path;

pub fn run(base_path: &Path, max_depth: Option<usize>, format: OutputFormat) -> Result<()> {
    let report = collect(base_path, max_depth, format);
    output::emit(&report, format, output::terminal::format_structure)
}

/// Build the report; a root that cannot be opened becomes a failed report
pub fn collect(
    base_path: &Path,
    max_depth: Option<usize>,
    format: OutputFormat,
) -> Report<StructureReport> {
    let analyzer = match ProjectAnalyzer::open(base_path) {
        Ok(analyzer) => analyzer,
        Err(e) => return Report::from_error(Operation::AnalyzeProjectStructure, &e),
    };

    if format != OutputFormat::Terminal {
        return analyzer.structure_report(max_depth);
    }

    let step = Step::new(format!("Scanning {}", analyzer.root().display()));
    let report = analyzer.structure_report(max_depth);
    match &report.result {
        Some(result) => step.finish(&format!(
            "{} files, {} directories",
            result.statistics.total_files, result.statistics.total_directories
        )),
        None => step.fail(),
    }
    report
}

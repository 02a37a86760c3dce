//! `codemap plan` - heuristic implementation plan

use crate::output;
use crate::OutputFormat;
use anyhow::Result;
use codemap_core::{Operation, PlanReport, ProjectAnalyzer, Report};
use std::path::Path;

pub fn run(
    base_path: &Path,
    task_description: &str,
    relevant_files: &[String],
    format: OutputFormat,
) -> Result<()> {
    let report = collect(base_path, task_description, relevant_files);
    output::emit(&report, format, output::terminal::format_plan)
}

pub fn collect(base_path: &Path, task_description: &str, relevant_files: &[String]) -> Report<PlanReport> {
    match ProjectAnalyzer::open(base_path) {
        Ok(analyzer) => analyzer.plan_report(task_description, relevant_files),
        Err(e) => Report::from_error(Operation::GenerateImplementationPlan, &e),
    }
}

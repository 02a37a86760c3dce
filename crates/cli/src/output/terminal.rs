//! Terminal output formatting

use codemap_core::tree::{DenialReason, TruncationReason};
use codemap_core::{FileReport, PlanReport, Report, StructureReport, TreeNode};
use colored::Colorize;

/// Number of largest files shown in the structure summary
const LARGEST_FILES_SHOWN: usize = 5;

pub fn format_structure(report: &Report<StructureReport>) -> String {
    let Some(result) = report.result.as_ref() else {
        return format_failure(report);
    };

    let mut lines = vec![format!("\n{}", "Structure".bold())];
    format_tree(&result.structure, 1, &mut lines);

    let stats = &result.statistics;
    lines.push(format!("\n{}", "Statistics".bold()));
    lines.push(format!(
        "  {} files, {} directories, {}",
        stats.total_files,
        stats.total_directories,
        format_size(stats.total_size_bytes)
    ));
    if stats.truncated {
        lines.push(format!("  {}", "walk budget reached, counts are partial".yellow()));
    }
    for (language, count) in &stats.files_by_language {
        lines.push(format!("  {:<12} {}", language.to_string(), count));
    }
    if !stats.largest_files.is_empty() {
        lines.push(format!("\n{}", "Largest files".bold()));
        for file in stats.largest_files.iter().take(LARGEST_FILES_SHOWN) {
            lines.push(format!("  {:>10}  {}", format_size(file.size), file.path));
        }
    }

    let deps = &result.dependencies;
    lines.push(format!("\n{}", "Dependencies".bold()));
    if deps.package_files.is_empty() {
        lines.push(format!("  {}", "no package manifests".dimmed()));
    } else {
        lines.push(format!("  manifests: {}", deps.package_files.join(", ")));
    }
    lines.push(format!(
        "  {} file(s) with imports",
        deps.import_patterns.len()
    ));

    finish(lines)
}

pub fn format_file(report: &Report<FileReport>) -> String {
    let Some(result) = report.result.as_ref() else {
        return format_failure(report);
    };
    let analysis = &result.analysis;

    let mut lines = vec![
        format!("\n{} {}", analysis.file_path.bold(), format!("({})", analysis.language).dimmed()),
        format!(
            "  {} lines, {} chars, {}",
            analysis.line_count,
            analysis.char_count,
            format_size(analysis.size_bytes as u64)
        ),
    ];

    if !analysis.imports.is_empty() {
        lines.push(format!("\n{}", "Imports".bold()));
        lines.extend(analysis.imports.iter().map(|import| format!("  {}", import)));
    }

    if !analysis.classes.is_empty() {
        lines.push(format!("\n{}", "Classes".bold()));
        for class in &analysis.classes {
            lines.push(format!("  {}:{}  {}", "class".cyan(), class.line, class.name));
            for method in &class.methods {
                lines.push(format!("      .{}", method));
            }
        }
    }

    if !analysis.functions.is_empty() {
        lines.push(format!("\n{}", "Functions".bold()));
        for function in &analysis.functions {
            let keyword = if function.is_async { "async fn" } else { "fn" };
            lines.push(format!(
                "  {}:{}  {}({})",
                keyword.cyan(),
                function.line,
                function.name,
                function.args.join(", ")
            ));
        }
    }

    finish(lines)
}

pub fn format_plan(report: &Report<PlanReport>) -> String {
    let Some(result) = report.result.as_ref() else {
        return format_failure(report);
    };
    let plan = &result.plan;

    let complexity = match plan.estimated_complexity {
        codemap_core::Complexity::Low => plan.estimated_complexity.to_string().green(),
        codemap_core::Complexity::Medium => plan.estimated_complexity.to_string().yellow(),
        codemap_core::Complexity::High => plan.estimated_complexity.to_string().red(),
    };

    let mut lines = vec![
        format!("\n{} {}", "Task:".bold(), plan.task),
        format!("  complexity: {}", complexity),
    ];

    push_section(&mut lines, "Approach", &plan.suggested_approach);

    lines.push(format!("\n{}", "Steps".bold()));
    for step in &plan.steps {
        lines.push(format!("  {}. {}: {}", step.step, step.action.bold(), step.description));
    }

    push_section(&mut lines, "Files to modify", &plan.files_to_modify);
    push_section(&mut lines, "Potential issues", &plan.potential_issues);
    push_section(&mut lines, "Testing", &plan.testing_strategy);

    if !result.file_contexts.is_empty() {
        lines.push(format!("\n{}", "File context".bold()));
        for analysis in &result.file_contexts {
            lines.push(format!(
                "  {} ({}, {} lines, {} functions, {} classes)",
                analysis.file_path,
                analysis.language,
                analysis.line_count,
                analysis.functions.len(),
                analysis.classes.len()
            ));
        }
    }

    finish(lines)
}

pub fn format_failure<T>(report: &Report<T>) -> String {
    format!(
        "  ❌ {} {}\n",
        format!("{}:", report.operation).bold(),
        report.error.as_deref().unwrap_or("unknown error")
    )
}

fn format_tree(node: &TreeNode, indent: usize, lines: &mut Vec<String>) {
    let TreeNode::Directory { children } = node else {
        return;
    };
    let pad = "  ".repeat(indent);

    for (name, child) in children {
        let line = match child {
            TreeNode::File { size } => format!("{}{} {}", pad, name, format_size(*size).dimmed()),
            TreeNode::Directory { .. } => format!("{}{}/", pad, name.blue()),
            TreeNode::Truncated { reason } => {
                let note = match reason {
                    TruncationReason::MaxDepthReached => "…",
                    TruncationReason::SymlinkCycle => "(symlink cycle)",
                };
                format!("{}{}/ {}", pad, name.blue(), note.dimmed())
            }
            TreeNode::Denied { error } => {
                let note = match error {
                    DenialReason::PermissionDenied => "permission denied",
                    DenialReason::Unreadable => "unreadable",
                };
                format!("{}{}/ {}", pad, name.blue(), note.red())
            }
        };
        lines.push(line);
        format_tree(child, indent + 1, lines);
    }
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(format!("\n{}", title.bold()));
    lines.extend(items.iter().map(|item| format!("  • {}", item)));
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

//! Codemap Core - Project Analysis Engine
//!
//! This crate provides the read-only analysis behind Codemap:
//! - Depth-limited directory snapshots and whole-tree file statistics
//! - Manifest fingerprinting and per-language import extraction
//! - Structural analysis via Tree-sitter (Python) and regex scans (Dart)
//! - Keyword-driven implementation plans for task descriptions

pub mod config;
pub mod dependencies;
pub mod discovery;
pub mod file_analysis;
pub mod imports;
pub mod language;
pub mod parser;
pub mod plan;
pub mod project;
pub mod report;
pub mod statistics;
pub mod tree;

pub use config::CodemapConfig;
pub use dependencies::{extract_dependencies, DependencyReport};
pub use discovery::{discover_source_files, walk_project};
pub use file_analysis::FileAnalysis;
pub use imports::extract_imports;
pub use language::Language;
pub use parser::{ClassRecord, FunctionRecord, LanguageParser, ParseError, ParserDispatcher};
pub use plan::{generate_plan, Complexity, ImplementationPlan, PlanStep};
pub use project::{AnalysisError, ProjectAnalyzer};
pub use report::{FileReport, Operation, PlanReport, Report, StructureReport};
pub use statistics::{aggregate_statistics, FileStatistics};
pub use tree::{build_tree, TreeNode};

/// Codemap version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

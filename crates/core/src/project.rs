//! Project analyzer: the three top-level operations over one scope root

use crate::config::CodemapConfig;
use crate::dependencies::extract_dependencies;
use crate::file_analysis::{analyze_path, FileAnalysis};
use crate::parser::ParserDispatcher;
use crate::plan::generate_plan;
use crate::report::{FileReport, Operation, PlanReport, Report, StructureReport};
use crate::statistics::aggregate_statistics_with;
use crate::tree::TreeBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid project root {}: {source}", .path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only analyzer anchored at a resolved project root
pub struct ProjectAnalyzer {
    root: PathBuf,
    config: CodemapConfig,
    dispatcher: ParserDispatcher,
}

impl ProjectAnalyzer {
    /// Resolve `root` and load `.codemap.toml` from it or its ancestors
    pub fn open(root: &Path) -> anyhow::Result<Self> {
        let root = resolve_root(root)?;
        let config = CodemapConfig::find_and_load(&root)?;
        Ok(Self::from_parts(root, config))
    }

    /// Resolve `root` and use an explicit configuration
    pub fn with_config(root: &Path, config: CodemapConfig) -> Result<Self, AnalysisError> {
        Ok(Self::from_parts(resolve_root(root)?, config))
    }

    fn from_parts(root: PathBuf, config: CodemapConfig) -> Self {
        Self {
            root,
            config,
            dispatcher: ParserDispatcher::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &CodemapConfig {
        &self.config
    }

    /// Tree snapshot, statistics and dependency signals for the whole root.
    ///
    /// `max_depth` overrides the configured tree depth.
    pub fn analyze_project_structure(&self, max_depth: Option<usize>) -> StructureReport {
        let max_depth = max_depth.unwrap_or(self.config.structure.max_depth);
        log::info!(
            "analyzing structure of {} (max depth {})",
            self.root.display(),
            max_depth
        );

        let builder = TreeBuilder::new(max_depth, self.config.structure.allowed_hidden.clone());
        let stats = &self.config.statistics;

        StructureReport {
            structure: builder.build(&self.root),
            statistics: aggregate_statistics_with(&self.root, stats.largest_files, stats.max_entries),
            dependencies: extract_dependencies(&self.root),
        }
    }

    /// Analyze one file given relative to the root.
    ///
    /// Paths that do not resolve to an existing entry under the root
    /// (missing, `..` escapes, absolute paths elsewhere) are `NotFound`.
    pub fn analyze_file_content(&self, file_path: &str) -> Result<FileAnalysis, AnalysisError> {
        let full_path = match self.root.join(file_path).canonicalize() {
            Ok(path) if path.starts_with(&self.root) => path,
            Ok(path) => {
                log::debug!("{} resolves outside the project root", path.display());
                return Err(AnalysisError::NotFound(file_path.to_string()));
            }
            Err(_) => return Err(AnalysisError::NotFound(file_path.to_string())),
        };

        analyze_path(&full_path, file_path, &self.dispatcher).map_err(|source| {
            AnalysisError::Io {
                path: full_path.clone(),
                source,
            }
        })
    }

    /// Plan for `task`, plus analyses of whichever relevant files could be analyzed
    pub fn generate_implementation_plan(&self, task: &str, relevant_files: &[String]) -> PlanReport {
        log::info!("generating plan for {} relevant file(s)", relevant_files.len());

        let file_contexts = relevant_files
            .iter()
            .filter_map(|file| match self.analyze_file_content(file) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    log::debug!("excluding {} from plan context: {}", file, e);
                    None
                }
            })
            .collect();

        PlanReport {
            plan: generate_plan(task, relevant_files),
            file_contexts,
        }
    }

    // ── Boundary wrappers ────────────────────────────────────────

    pub fn structure_report(&self, max_depth: Option<usize>) -> Report<StructureReport> {
        Report::ok(
            Operation::AnalyzeProjectStructure,
            self.analyze_project_structure(max_depth),
        )
    }

    pub fn file_report(&self, file_path: &str) -> Report<FileReport> {
        match self.analyze_file_content(file_path) {
            Ok(analysis) => Report::ok(Operation::AnalyzeFileContent, FileReport { analysis }),
            Err(e @ AnalysisError::NotFound(_)) => {
                Report::failed(Operation::AnalyzeFileContent, e.to_string())
            }
            Err(e) => Report::from_error(Operation::AnalyzeFileContent, &e),
        }
    }

    pub fn plan_report(&self, task: &str, relevant_files: &[String]) -> Report<PlanReport> {
        Report::ok(
            Operation::GenerateImplementationPlan,
            self.generate_implementation_plan(task, relevant_files),
        )
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf, AnalysisError> {
    let resolved = root
        .canonicalize()
        .map_err(|source| AnalysisError::InvalidRoot {
            path: root.to_path_buf(),
            source,
        })?;

    if !resolved.is_dir() {
        return Err(AnalysisError::InvalidRoot {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        });
    }
    Ok(resolved)
}

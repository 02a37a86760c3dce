//! Structured reports returned across the engine boundary

use crate::dependencies::DependencyReport;
use crate::file_analysis::FileAnalysis;
use crate::plan::ImplementationPlan;
use crate::statistics::FileStatistics;
use crate::tree::TreeNode;
use serde::Serialize;

/// The three top-level operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AnalyzeProjectStructure,
    AnalyzeFileContent,
    GenerateImplementationPlan,
}

impl Operation {
    /// Prefix for error messages of a failed run
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Operation::AnalyzeProjectStructure => "Failed to analyze project structure",
            Operation::AnalyzeFileContent => "Failed to analyze file",
            Operation::GenerateImplementationPlan => "Failed to generate plan",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::AnalyzeProjectStructure => write!(f, "analyze_project_structure"),
            Operation::AnalyzeFileContent => write!(f, "analyze_file_content"),
            Operation::GenerateImplementationPlan => write!(f, "generate_implementation_plan"),
        }
    }
}

/// Success flag, operation name, and either a payload or an error message
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub success: bool,
    pub operation: Operation,
    #[serde(flatten)]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Report<T> {
    pub fn ok(operation: Operation, result: T) -> Self {
        Self {
            success: true,
            operation,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(operation: Operation, error: impl Into<String>) -> Self {
        Self {
            success: false,
            operation,
            result: None,
            error: Some(error.into()),
        }
    }

    /// Failure whose message is `"<operation prefix>: <error>"`
    pub fn from_error(operation: Operation, error: &dyn std::fmt::Display) -> Self {
        Self::failed(
            operation,
            format!("{}: {}", operation.failure_prefix(), error),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StructureReport {
    pub structure: TreeNode,
    pub statistics: FileStatistics,
    pub dependencies: DependencyReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub analysis: FileAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub plan: ImplementationPlan,
    /// Analyses of the relevant files that could be analyzed
    pub file_contexts: Vec<FileAnalysis>,
}

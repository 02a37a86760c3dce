//! Language tags keyed by file extension

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Closed classification of a file by its extension.
///
/// Every component that needs language-sensitive behavior (statistics
/// histogram, import extraction, structural analysis) dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Dart,
    JavaScript,
    TypeScript,
    Java,
    Kotlin,
    Swift,
    Cpp,
    C,
    Header,
    Json,
    Yaml,
    Markdown,
    Text,
    /// Extension present but not in the table
    Other,
    /// No extension at all (single-file analysis only)
    Unknown,
}

impl Language {
    /// Look up an extension (without the leading dot). Case-insensitive.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "py" => Language::Python,
            "dart" => Language::Dart,
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "java" => Language::Java,
            "kt" => Language::Kotlin,
            "swift" => Language::Swift,
            "cpp" => Language::Cpp,
            "c" => Language::C,
            "h" | "hpp" => Language::Header,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "md" => Language::Markdown,
            "txt" => Language::Text,
            _ => Language::Other,
        }
    }

    /// Tag used when bucketing files during a tree walk.
    ///
    /// Files without an extension land in [`Language::Other`].
    pub fn for_statistics(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Language::Other, Language::from_extension)
    }

    /// Tag reported for an explicitly requested file.
    ///
    /// Files without an extension are [`Language::Unknown`].
    pub fn for_file(path: &Path) -> Self {
        match path.extension() {
            Some(ext) => Language::from_extension(&ext.to_string_lossy()),
            None => Language::Unknown,
        }
    }

    /// Whether files of this language are scanned for import statements
    pub fn has_import_syntax(self) -> bool {
        matches!(
            self,
            Language::Dart | Language::Python | Language::JavaScript | Language::TypeScript
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Dart => "dart",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Swift => "swift",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Header => "header",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Text => "text",
            Language::Other => "other",
            Language::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Structural analyzers that extract function and class declarations

pub mod dart;
pub mod python;

use crate::language::Language;
use serde::Serialize;
use thiserror::Error;

/// Error types for structural parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse source: {0}")]
    ParseFailed(String),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}

/// A function or method definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    /// 1-based line of the defining statement
    pub line: usize,
    /// Parameter names in declaration order
    pub args: Vec<String>,
    pub is_async: bool,
}

/// A class definition and the methods declared directly in its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub name: String,
    pub line: usize,
    pub methods: Vec<String>,
}

/// Declarations found in one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStructure {
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
}

/// Trait for language-specific structural analyzers
pub trait LanguageParser: Send + Sync {
    /// The language this parser handles
    fn language(&self) -> Language;

    /// Extract declarations from source text
    fn parse_source(&self, source: &str) -> Result<FileStructure, ParseError>;
}

/// Routes source text to the structural analyzer for its language
pub struct ParserDispatcher {
    parsers: Vec<Box<dyn LanguageParser>>,
}

impl ParserDispatcher {
    /// Create a dispatcher with the built-in analyzers
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Box::new(python::PythonParser::new()),
                Box::new(dart::DartParser::new()),
            ],
        }
    }

    /// Create a dispatcher with custom parsers
    pub fn with_parsers(parsers: Vec<Box<dyn LanguageParser>>) -> Self {
        Self { parsers }
    }

    pub fn find_parser(&self, language: Language) -> Option<&dyn LanguageParser> {
        self.parsers
            .iter()
            .find(|parser| parser.language() == language)
            .map(|boxed| &**boxed)
    }

    /// Extract declarations, degrading to an empty structure when the language
    /// has no analyzer or the source cannot be parsed.
    pub fn analyze(&self, language: Language, source: &str) -> FileStructure {
        let Some(parser) = self.find_parser(language) else {
            return FileStructure::default();
        };

        match parser.parse_source(source) {
            Ok(structure) => structure,
            Err(e) => {
                log::debug!("{} structural pass failed: {}", language, e);
                FileStructure::default()
            }
        }
    }

    /// Languages that get a structural pass
    pub fn supported_languages(&self) -> Vec<Language> {
        self.parsers.iter().map(|p| p.language()).collect()
    }
}

impl Default for ParserDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

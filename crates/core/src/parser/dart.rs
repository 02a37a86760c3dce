//! Dart structural analyzer using regex scans
//!
//! Two independent scans over the raw text: class headers and function
//! signatures followed by an opening brace. Matches inside comments and
//! string literals are not filtered, and braces are not balanced, so class
//! method lists stay empty.

use super::{ClassRecord, FileStructure, FunctionRecord, LanguageParser, ParseError};
use crate::language::Language;
use regex::Regex;
use std::sync::OnceLock;

fn class_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"class\s+(\w+)(?:\s+extends\s+\w+)?(?:\s+implements\s+[\w,\s]+)?\s*\{").unwrap()
    })
}

/// Groups: 1 = name, 2 = parameter list, 3 = async marker
fn function_signature() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:static\s+)?(?:Future\s*<[^>]*>|[A-Za-z_][A-Za-z0-9_<>]*)\s+(\w+)\s*\(([^)]*)\)\s*(async\s*)?\{",
        )
        .unwrap()
    })
}

/// Dart structural analyzer
pub struct DartParser;

impl DartParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for DartParser {
    fn language(&self) -> Language {
        Language::Dart
    }

    fn parse_source(&self, source: &str) -> Result<FileStructure, ParseError> {
        let classes = class_header()
            .captures_iter(source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(ClassRecord {
                    name: caps.get(1)?.as_str().to_string(),
                    line: line_at(source, whole.start()),
                    methods: Vec::new(),
                })
            })
            .collect();

        let functions = function_signature()
            .captures_iter(source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(FunctionRecord {
                    name: caps.get(1)?.as_str().to_string(),
                    line: line_at(source, whole.start()),
                    args: caps
                        .get(2)
                        .map(|m| parameter_names(m.as_str()))
                        .unwrap_or_default(),
                    is_async: caps.get(3).is_some(),
                })
            })
            .collect();

        Ok(FileStructure { functions, classes })
    }
}

/// 1-based line of byte offset `offset`
fn line_at(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

/// Best-effort parameter names: last identifier of each comma-separated
/// declaration, with defaults, brackets and `this.`/`super.` dropped.
fn parameter_names(list: &str) -> Vec<String> {
    list.split(',')
        .filter_map(|raw| {
            let decl = raw
                .trim()
                .trim_start_matches(&['{', '['][..])
                .trim_end_matches(&['}', ']'][..]);
            let decl = decl.split(|c| c == '=' || c == ':').next()?.trim();
            let name = decl.split_whitespace().last()?;
            let name = name
                .strip_prefix("this.")
                .or_else(|| name.strip_prefix("super."))
                .unwrap_or(name);
            is_identifier(name).then(|| name.to_string())
        })
        .collect()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

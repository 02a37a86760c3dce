//! Pattern-based import extraction
//!
//! One independent regex per language family, applied to raw file text:
//! - Dart: `import 'package:x/y.dart';`
//! - Python: `import x` / `from x import y`
//! - JavaScript/TypeScript: `import ... from "x"`
//!
//! This is a best-effort signal, not a parser. Read and decode failures
//! produce an empty list.

use crate::language::Language;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn dart_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"import\s+['"]([^'"]+)['"]"#).unwrap())
}

fn python_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:from\s+(\S+)\s+import|import\s+(\S+))").unwrap())
}

fn es_module_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"import.*?from\s+['"]([^'"]+)['"]"#).unwrap())
}

/// Extract import targets from a file on disk, dispatching on its extension.
pub fn extract_imports(path: &Path) -> Vec<String> {
    let language = Language::for_statistics(path);
    if !language.has_import_syntax() {
        return Vec::new();
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::debug!("cannot read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match String::from_utf8(bytes) {
        Ok(source) => extract_imports_from_source(language, &source),
        Err(_) => {
            log::debug!("{} is not valid UTF-8, no imports extracted", path.display());
            Vec::new()
        }
    }
}

/// Extract import targets from source text, in source order, duplicates kept.
pub fn extract_imports_from_source(language: Language, source: &str) -> Vec<String> {
    match language {
        Language::Dart => first_group(dart_import(), source),
        Language::Python => python_import()
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect(),
        Language::JavaScript | Language::TypeScript => first_group(es_module_import(), source),
        _ => Vec::new(),
    }
}

fn first_group(re: &Regex, source: &str) -> Vec<String> {
    re.captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

//! Single-file metadata and structure

use crate::imports::extract_imports_from_source;
use crate::language::Language;
use crate::parser::{ClassRecord, FunctionRecord, ParserDispatcher};
use serde::Serialize;
use std::path::Path;

/// Everything extracted from one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAnalysis {
    /// Path as requested by the caller
    pub file_path: String,
    pub language: Language,
    pub line_count: usize,
    pub char_count: usize,
    pub size_bytes: usize,
    pub imports: Vec<String>,
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
    /// Reserved; always 0
    pub complexity_score: u32,
}

/// Decoded file text plus whether decoding was lossless
struct DecodedSource {
    text: String,
    lossless: bool,
}

fn decode(bytes: Vec<u8>) -> DecodedSource {
    match String::from_utf8(bytes) {
        Ok(text) => DecodedSource {
            text,
            lossless: true,
        },
        Err(e) => DecodedSource {
            text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            lossless: false,
        },
    }
}

/// Analyze file bytes already read from disk.
///
/// Undecodable bytes are replaced, never fatal. Imports are only extracted
/// from cleanly decoded text; the structural pass runs on whatever decoded.
pub fn analyze_bytes(
    file_path: &str,
    language: Language,
    bytes: Vec<u8>,
    dispatcher: &ParserDispatcher,
) -> FileAnalysis {
    let size_bytes = bytes.len();
    let source = decode(bytes);
    if !source.lossless {
        log::debug!("{} contains invalid UTF-8, bytes replaced", file_path);
    }

    let imports = if source.lossless {
        extract_imports_from_source(language, &source.text)
    } else {
        Vec::new()
    };
    let structure = dispatcher.analyze(language, &source.text);

    FileAnalysis {
        file_path: file_path.to_string(),
        language,
        line_count: count_lines(&source.text),
        char_count: source.text.chars().count(),
        size_bytes,
        imports,
        functions: structure.functions,
        classes: structure.classes,
        complexity_score: 0,
    }
}

/// Lines under universal-newline rules: `\n`, `\r\n` and a lone `\r` each
/// end a line, and a trailing terminator does not start a new one.
fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    let mut chars = text.chars().peekable();
    let mut open = false;

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                lines += 1;
                open = false;
            }
            '\n' => {
                lines += 1;
                open = false;
            }
            _ => open = true,
        }
    }

    if open {
        lines += 1;
    }
    lines
}

/// Read and analyze `path`, reporting it as `file_path`
pub fn analyze_path(
    path: &Path,
    file_path: &str,
    dispatcher: &ParserDispatcher,
) -> std::io::Result<FileAnalysis> {
    let bytes = std::fs::read(path)?;
    Ok(analyze_bytes(
        file_path,
        Language::for_file(path),
        bytes,
        dispatcher,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(name: &str, text: &[u8]) -> FileAnalysis {
        let language = Language::for_file(Path::new(name));
        analyze_bytes(name, language, text.to_vec(), &ParserDispatcher::new())
    }

    #[test]
    fn test_counts_follow_lines_convention() {
        assert_eq!(analyze("a.txt", b"").line_count, 0);
        assert_eq!(analyze("a.txt", b"one\ntwo").line_count, 2);
        assert_eq!(analyze("a.txt", b"one\ntwo\n").line_count, 2);
        assert_eq!(analyze("a.txt", b"one\r\ntwo\r\n").line_count, 2);
        assert_eq!(analyze("a.txt", b"\n\n").line_count, 2);
    }

    #[test]
    fn test_bare_carriage_returns_end_lines() {
        assert_eq!(analyze("a.txt", b"one\rtwo\rthree\r").line_count, 3);
        assert_eq!(analyze("a.txt", b"one\rtwo\r\nthree").line_count, 3);
    }

    #[test]
    fn test_char_and_byte_counts_differ_for_multibyte() {
        let analysis = analyze("a.md", "héllo".as_bytes());
        assert_eq!(analysis.char_count, 5);
        assert_eq!(analysis.size_bytes, 6);
        assert_eq!(analysis.language, Language::Markdown);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let analysis = analyze("bad.py", b"import os\n\xff\xfe\ndef f(x):\n    pass\n");
        assert_eq!(analysis.line_count, 4);
        assert!(analysis.imports.is_empty());
        assert_eq!(analysis.complexity_score, 0);
    }

    #[test]
    fn test_size_is_on_disk_bytes_for_invalid_utf8() {
        let analysis = analyze("bin.txt", b"ab\xff\xfe\xfd\n");
        assert_eq!(analysis.size_bytes, 6);
        assert_eq!(analysis.line_count, 1);
    }

    #[test]
    fn test_python_structure_and_imports() {
        let analysis = analyze("m.py", b"import os\n\nclass A:\n    def run(self):\n        pass\n");
        assert_eq!(analysis.imports, vec!["os"]);
        assert_eq!(analysis.classes.len(), 1);
        assert_eq!(analysis.classes[0].methods, vec!["run"]);
        assert_eq!(analysis.functions[0].args, vec!["self"]);
    }

    #[test]
    fn test_unanalyzed_language_has_empty_structure() {
        let analysis = analyze("Main.java", b"class Main { void run() {} }\n");
        assert_eq!(analysis.language, Language::Java);
        assert!(analysis.functions.is_empty());
        assert!(analysis.classes.is_empty());
    }
}

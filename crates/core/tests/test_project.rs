//! Integration tests for the three top-level operations

use codemap_core::{AnalysisError, CodemapConfig, Complexity, Language, ProjectAnalyzer};
use tempfile::TempDir;

fn analyzer(tmp: &TempDir) -> ProjectAnalyzer {
    ProjectAnalyzer::with_config(tmp.path(), CodemapConfig::default()).unwrap()
}

fn flutter_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("lib/screens")).unwrap();
    std::fs::write(root.join("pubspec.yaml"), "name: app\n").unwrap();
    std::fs::write(
        root.join("lib/main.dart"),
        "import 'package:flutter/material.dart';\n\nvoid main() {\n  runApp(App());\n}\n",
    )
    .unwrap();
    std::fs::write(
        root.join("lib/screens/home.dart"),
        "import 'package:flutter/widgets.dart';\n\nclass Home extends StatelessWidget {\n}\n",
    )
    .unwrap();
    std::fs::write(root.join("lib/screens/notes.txt"), "todo").unwrap();
    tmp
}

// ── analyze_project_structure ────────────────────────────────────

#[test]
fn test_structure_composes_tree_stats_and_dependencies() {
    let tmp = flutter_project();
    let report = analyzer(&tmp).analyze_project_structure(None);

    assert!(report.structure.get("lib/screens").is_some());
    assert_eq!(report.statistics.total_files, 4);
    assert_eq!(report.statistics.total_directories, 2);
    assert_eq!(report.dependencies.package_files, vec!["pubspec.yaml"]);
    assert_eq!(report.dependencies.import_patterns.len(), 2);
}

#[test]
fn test_structure_depth_override() {
    let tmp = flutter_project();
    let report = analyzer(&tmp).analyze_project_structure(Some(1));

    let json = serde_json::to_value(&report.structure).unwrap();
    assert_eq!(json["children"]["lib"]["type"], "truncated");
    // statistics ignore the tree depth
    assert_eq!(report.statistics.total_files, 4);
}

#[test]
fn test_structure_report_envelope() {
    let tmp = flutter_project();
    let report = analyzer(&tmp).structure_report(None);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["operation"], "analyze_project_structure");
    assert!(json.get("structure").is_some());
    assert!(json.get("statistics").is_some());
    assert_eq!(json["dependencies"]["package_files"][0], "pubspec.yaml");
    assert!(json.get("error").is_none());
}

#[test]
fn test_invalid_root() {
    let tmp = TempDir::new().unwrap();
    let result = ProjectAnalyzer::with_config(&tmp.path().join("nope"), CodemapConfig::default());
    assert!(matches!(result, Err(AnalysisError::InvalidRoot { .. })));
}

// ── analyze_file_content ─────────────────────────────────────────

#[test]
fn test_missing_file_is_not_found() {
    let tmp = flutter_project();
    let result = analyzer(&tmp).analyze_file_content("lib/missing.dart");
    assert!(matches!(result, Err(AnalysisError::NotFound(_))));

    let report = analyzer(&tmp).file_report("lib/missing.dart");
    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("File not found: lib/missing.dart"));
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("analysis").is_none());
    assert_eq!(json["operation"], "analyze_file_content");
}

#[test]
fn test_paths_outside_root_are_not_found() {
    let outer = TempDir::new().unwrap();
    let project = outer.path().join("proj");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("inside.txt"), "ok\n").unwrap();
    let secret = outer.path().join("secret.txt");
    std::fs::write(&secret, "hunter2\n").unwrap();

    let analyzer = ProjectAnalyzer::with_config(&project, CodemapConfig::default()).unwrap();

    let result = analyzer.analyze_file_content("../secret.txt");
    assert!(matches!(result, Err(AnalysisError::NotFound(ref p)) if p == "../secret.txt"));

    let absolute = secret.to_string_lossy().into_owned();
    let result = analyzer.analyze_file_content(&absolute);
    assert!(matches!(result, Err(AnalysisError::NotFound(_))));

    let report = analyzer.file_report("../secret.txt");
    assert_eq!(report.error.as_deref(), Some("File not found: ../secret.txt"));

    // `..` that lands back inside the root is fine
    let analysis = analyzer.analyze_file_content("../proj/inside.txt").unwrap();
    assert_eq!(analysis.line_count, 1);
}

#[test]
fn test_empty_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("empty.py"), "").unwrap();

    let analysis = analyzer(&tmp).analyze_file_content("empty.py").unwrap();
    assert_eq!(analysis.line_count, 0);
    assert_eq!(analysis.char_count, 0);
    assert!(analysis.functions.is_empty());
    assert!(analysis.classes.is_empty());
}

#[test]
fn test_line_count_round_trip() {
    let tmp = TempDir::new().unwrap();
    let lines: Vec<String> = (0..7).map(|i| format!("line {}", i)).collect();
    std::fs::write(tmp.path().join("trailing.txt"), lines.join("\n") + "\n").unwrap();
    std::fs::write(tmp.path().join("bare.txt"), lines.join("\n")).unwrap();

    let a = analyzer(&tmp);
    assert_eq!(a.analyze_file_content("trailing.txt").unwrap().line_count, 7);
    assert_eq!(a.analyze_file_content("bare.txt").unwrap().line_count, 7);
}

#[test]
fn test_dart_file_analysis() {
    let tmp = flutter_project();
    let analysis = analyzer(&tmp).analyze_file_content("lib/main.dart").unwrap();

    assert_eq!(analysis.file_path, "lib/main.dart");
    assert_eq!(analysis.language, Language::Dart);
    assert_eq!(analysis.imports, vec!["package:flutter/material.dart"]);
    assert_eq!(analysis.functions.len(), 1);
    assert_eq!(analysis.functions[0].name, "main");
    assert_eq!(analysis.functions[0].line, 3);
    assert_eq!(analysis.complexity_score, 0);
}

#[test]
fn test_python_syntax_error_keeps_generic_metrics() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("bad.py"), "import os\ndef broken(:\n").unwrap();

    let analysis = analyzer(&tmp).analyze_file_content("bad.py").unwrap();
    assert_eq!(analysis.line_count, 2);
    assert_eq!(analysis.imports, vec!["os"]);
    assert!(analysis.functions.is_empty());
}

#[test]
fn test_file_without_extension_is_unknown() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("LICENSE"), "MIT\n").unwrap();

    let analysis = analyzer(&tmp).analyze_file_content("LICENSE").unwrap();
    assert_eq!(analysis.language, Language::Unknown);
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["language"], "unknown");
}

// ── generate_implementation_plan ─────────────────────────────────

#[test]
fn test_plan_collects_analyzable_contexts_only() {
    let tmp = flutter_project();
    let files = vec![
        "lib/main.dart".to_string(),
        "lib/ghost.dart".to_string(),
        "lib/screens/home.dart".to_string(),
    ];

    let report = analyzer(&tmp).generate_implementation_plan("Update the home screen text", &files);

    assert_eq!(report.plan.estimated_complexity, Complexity::Low);
    assert_eq!(report.plan.files_to_modify, files);
    let contexts: Vec<&str> = report
        .file_contexts
        .iter()
        .map(|c| c.file_path.as_str())
        .collect();
    assert_eq!(contexts, vec!["lib/main.dart", "lib/screens/home.dart"]);
}

#[test]
fn test_plan_is_deterministic() {
    let tmp = flutter_project();
    let a = analyzer(&tmp);
    let files = vec!["lib/main.dart".to_string()];

    let first = serde_json::to_string(&a.plan_report("Add API integration", &files)).unwrap();
    let second = serde_json::to_string(&a.plan_report("Add API integration", &files)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_plan_report_shape() {
    let tmp = TempDir::new().unwrap();
    let report = analyzer(&tmp).plan_report("Build a dashboard", &[]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["operation"], "generate_implementation_plan");
    assert_eq!(json["plan"]["estimated_complexity"], "medium");
    assert_eq!(json["plan"]["steps"].as_array().unwrap().len(), 6);
    assert_eq!(json["file_contexts"].as_array().unwrap().len(), 0);
}

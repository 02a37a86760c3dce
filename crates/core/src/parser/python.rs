//! Python structural analyzer using Tree-sitter

use super::{ClassRecord, FileStructure, FunctionRecord, LanguageParser, ParseError};
use crate::language::Language;
use std::collections::VecDeque;
use tree_sitter::{Node, Parser, Tree};

/// Python structural analyzer
pub struct PythonParser {
    language: tree_sitter::Language,
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> Result<Parser, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::TreeSitter(e.to_string()))?;
        Ok(parser)
    }

    fn parse_tree(&self, source: &str) -> Result<Tree, ParseError> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::ParseFailed("Failed to parse Python source".to_string()))?;

        // Tree-sitter recovers from errors; a file Python itself would reject
        // must not yield partial declarations.
        if tree.root_node().has_error() {
            return Err(ParseError::Syntax("invalid Python syntax".to_string()));
        }
        Ok(tree)
    }

    /// Breadth-first walk over every node, recording definitions at any depth
    fn extract_structure(&self, tree: &Tree, source: &str) -> FileStructure {
        let mut structure = FileStructure::default();
        let mut queue: VecDeque<Node> = VecDeque::new();
        queue.push_back(tree.root_node());

        while let Some(node) = queue.pop_front() {
            match node.kind() {
                "function_definition" => {
                    if let Some(function) = self.extract_function(&node, source) {
                        structure.functions.push(function);
                    }
                }
                "class_definition" => {
                    if let Some(class) = self.extract_class(&node, source) {
                        structure.classes.push(class);
                    }
                }
                _ => {}
            }

            let mut cursor = node.walk();
            queue.extend(node.named_children(&mut cursor));
        }

        structure
    }

    fn extract_function(&self, node: &Node, source: &str) -> Option<FunctionRecord> {
        let name = node_name(node, source)?;
        let is_async = node.child(0).is_some_and(|first| first.kind() == "async");

        Some(FunctionRecord {
            name,
            line: node.start_position().row + 1,
            args: self.extract_parameters(node, source),
            is_async,
        })
    }

    fn extract_class(&self, node: &Node, source: &str) -> Option<ClassRecord> {
        let name = node_name(node, source)?;

        let mut methods = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for statement in body.named_children(&mut cursor) {
                let definition = match statement.kind() {
                    "function_definition" => Some(statement),
                    "decorated_definition" => statement
                        .child_by_field_name("definition")
                        .filter(|d| d.kind() == "function_definition"),
                    _ => None,
                };
                if let Some(method) = definition.and_then(|d| node_name(&d, source)) {
                    methods.push(method);
                }
            }
        }

        Some(ClassRecord {
            name,
            line: node.start_position().row + 1,
            methods,
        })
    }

    /// Named parameters in declaration order; `*args` and `**kwargs` are skipped
    fn extract_parameters(&self, node: &Node, source: &str) -> Vec<String> {
        let Some(params) = node.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut cursor = params.walk();
        let names: Vec<String> = params
            .named_children(&mut cursor)
            .filter_map(|param| parameter_name(&param, source))
            .collect();
        names
    }
}

fn node_name(node: &Node, source: &str) -> Option<String> {
    let name_node = node.child_by_field_name("name")?;
    Some(name_node.utf8_text(source.as_bytes()).ok()?.to_string())
}

fn parameter_name(param: &Node, source: &str) -> Option<String> {
    let ident = match param.kind() {
        "identifier" => *param,
        "default_parameter" | "typed_default_parameter" => param.child_by_field_name("name")?,
        "typed_parameter" => param.named_child(0)?,
        _ => return None,
    };

    if ident.kind() != "identifier" {
        return None;
    }
    Some(ident.utf8_text(source.as_bytes()).ok()?.to_string())
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for PythonParser {
    fn language(&self) -> Language {
        Language::Python
    }

    fn parse_source(&self, source: &str) -> Result<FileStructure, ParseError> {
        let tree = self.parse_tree(source)?;
        Ok(self.extract_structure(&tree, source))
    }
}

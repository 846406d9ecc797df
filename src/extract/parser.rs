//! Tree-sitter parser integration for C++ headers.
//!
//! Wraps the tree-sitter-cpp grammar and provides the small set of node
//! helpers the extraction walk is built from.

use crate::errors::ExtractError;
use tree_sitter::{Node, Parser, Tree};

/// A parsed C++ translation unit plus the source it was parsed from.
///
/// Tree-sitter nodes only carry byte ranges, so the source tags along for
/// text extraction.
pub struct CppAst {
    pub tree: Tree,
    pub source: String,
}

/// Parse C++ source code into a syntax tree.
///
/// Tree-sitter is error-tolerant: partially invalid input still yields a
/// tree with error nodes, and extraction proceeds best-effort over it. An
/// `Err` here means the parser produced no tree at all.
pub fn parse_source(content: &str) -> Result<CppAst, ExtractError> {
    let mut parser = Parser::new();

    parser
        .set_language(&tree_sitter_cpp::LANGUAGE.into())
        .map_err(|e| ExtractError::Parse(format!("failed to load C++ grammar: {e}")))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| ExtractError::Parse("parser produced no syntax tree".to_string()))?;

    Ok(CppAst {
        tree,
        source: content.to_string(),
    })
}

/// Check if a parse tree contains error nodes.
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Get the source text for a node.
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Collect a node's children into a vector.
///
/// Tree-sitter's child iterator borrows a cursor; collecting up front keeps
/// the call sites free of cursor plumbing.
pub fn child_nodes<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Find the first child whose kind matches any of the given kinds.
pub fn find_child<'tree>(node: &Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| kinds.contains(&c.kind()));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_class() {
        let source = "class Widget { public: int x; };";
        let ast = parse_source(source).unwrap();
        assert!(!has_parse_errors(&ast.tree));
        assert_eq!(ast.tree.root_node().kind(), "translation_unit");
    }

    #[test]
    fn test_parse_tolerates_partial_input() {
        // Error-tolerant parsing still yields a tree
        let source = "class Widget { public: int";
        let ast = parse_source(source).unwrap();
        assert!(has_parse_errors(&ast.tree));
    }

    #[test]
    fn test_node_text_roundtrip() {
        let source = "int x;";
        let ast = parse_source(source).unwrap();
        let root = ast.tree.root_node();
        assert_eq!(node_text(&root, &ast.source), source);
    }

    #[test]
    fn test_find_child_by_kind() {
        let source = "class Widget {};";
        let ast = parse_source(source).unwrap();
        let root = ast.tree.root_node();
        let class = find_child(&root, &["class_specifier"]);
        assert!(class.is_some());
        let name = find_child(&class.unwrap(), &["type_identifier"]).unwrap();
        assert_eq!(node_text(&name, &ast.source), "Widget");
    }

    #[test]
    fn test_child_nodes_preserves_order() {
        let source = "int a; int b;";
        let ast = parse_source(source).unwrap();
        let children = child_nodes(&ast.tree.root_node());
        assert_eq!(children.len(), 2);
    }
}

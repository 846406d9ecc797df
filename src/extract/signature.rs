//! Canonical type signature rendering.
//!
//! Flattens a type subtree into a whitespace-normalized string: exactly one
//! space between adjacent alphanumeric tokens (`unsigned long`), none around
//! punctuation (`std::vector<int>&`). The result is the unit exchanged with
//! the type mapper; no alias resolution happens here.

use super::parser::{child_nodes, node_text};
use tree_sitter::Node;

/// Render a type subtree as its canonical signature.
///
/// Leaves render as trimmed source text. Composite nodes concatenate their
/// children in order, halting at the first `{` so brace initializers never
/// leak into signatures. Comment, initializer-list, and argument-list
/// children are skipped.
pub fn render_type(node: &Node, source: &str) -> String {
    if node.kind() == "comment" {
        return String::new();
    }

    if node.child_count() == 0 {
        return node_text(node, source).trim().to_string();
    }

    let mut rendered = String::new();
    let mut prev_ends_alnum = false;

    for child in child_nodes(node) {
        if matches!(child.kind(), "comment" | "initializer_list" | "argument_list") {
            continue;
        }
        if node_text(&child, source) == "{" {
            break;
        }

        let text = render_type(&child, source);
        if text.is_empty() {
            continue;
        }

        if !rendered.is_empty() && prev_ends_alnum && starts_alnum(&text) {
            rendered.push(' ');
        }
        prev_ends_alnum = ends_alnum(&text);
        rendered.push_str(&text);
    }

    rendered
}

fn starts_alnum(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_alphanumeric())
}

fn ends_alnum(text: &str) -> bool {
    text.chars().next_back().is_some_and(|c| c.is_alphanumeric())
}

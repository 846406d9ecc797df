//! Depth-first class lookup with namespace scope tracking.
//!
//! Namespaces nest arbitrarily; the current path is threaded through the
//! walk and snapshotted into the descriptor when the target class is found.
//! A name mismatch never prunes a subtree; the target may be declared
//! deeper inside.

use super::members::classify_members;
use super::parser::{child_nodes, find_child, node_text};
use crate::core::ClassDescriptor;
use tree_sitter::Node;

/// Find a class or struct named `target` anywhere under `root` and extract
/// its members.
///
/// Returns `None` when no declaration matches; this is a normal absent
/// result, not an error. When identically-named classes exist in several
/// scopes, the first depth-first match wins.
pub fn locate(root: &Node, source: &str, target: &str) -> Option<ClassDescriptor> {
    let mut namespace = Vec::new();
    find_class(root, source, target, &mut namespace)
}

fn find_class(
    node: &Node,
    source: &str,
    target: &str,
    namespace: &mut Vec<String>,
) -> Option<ClassDescriptor> {
    if matches!(node.kind(), "class_specifier" | "struct_specifier") {
        if let Some(class) = parse_class(node, source, target, namespace) {
            return Some(class);
        }
    }

    if node.kind() == "namespace_definition" {
        let name = find_child(node, &["namespace_identifier"]);
        let body = find_child(node, &["declaration_list"]);

        if let (Some(name), Some(body)) = (name, body) {
            namespace.push(node_text(&name, source).to_string());
            log::debug!("entering namespace {}", namespace.join("::"));

            let found = child_nodes(&body)
                .iter()
                .find_map(|child| find_class(child, source, target, namespace));

            namespace.pop();
            return found;
        }
        // Malformed or anonymous namespaces fall through to the plain walk.
    }

    child_nodes(node)
        .iter()
        .find_map(|child| find_class(child, source, target, namespace))
}

/// Extract the descriptor from a class node whose declared name matches the
/// target; `None` otherwise (including bodyless forward declarations).
fn parse_class(
    node: &Node,
    source: &str,
    target: &str,
    namespace: &[String],
) -> Option<ClassDescriptor> {
    let name_node = find_child(node, &["type_identifier"])?;
    let body = find_child(node, &["field_declaration_list"])?;

    let name = node_text(&name_node, source);
    if name != target {
        return None;
    }

    log::debug!("located class {name} in {:?}", namespace);

    let mut class = ClassDescriptor::new(name, namespace.to_vec());
    classify_members(&body, source, &mut class);
    Some(class)
}

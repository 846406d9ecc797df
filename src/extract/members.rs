//! Member classification for a located class body.
//!
//! Walks the body in document order with an access-level cursor and sorts
//! every public declaration into exactly one of the seven descriptor
//! collections. Dispatch precedence: enum, inline-bodied method, declared
//! method/constructor, property/event wrapper, constant, else skip.
//! Unrecognized shapes are dropped silently; they never abort extraction.

use super::parser::{child_nodes, find_child, node_text};
use super::signature::render_type;
use crate::core::{
    ClassDescriptor, ConstantDescriptor, EnumDescriptor, EventDescriptor, MethodDescriptor,
    Parameter, PropertyDescriptor, ANONYMOUS_ENUM,
};
use tree_sitter::Node;

/// Wrapper type names recognized as property markers. Both spellings stay
/// supported across the naming migration.
const PROPERTY_MARKERS: &[&str] = &["Property", "property"];

/// Wrapper type names recognized as event markers.
const EVENT_MARKERS: &[&str] = &["Event", "event"];

/// Node kinds accepted as a parameter's type.
const PARAMETER_TYPE_KINDS: &[&str] = &[
    "primitive_type",
    "type_identifier",
    "qualified_identifier",
    "template_type",
];

/// Node kinds accepted as a constant's base type.
const CONSTANT_TYPE_KINDS: &[&str] = &[
    "primitive_type",
    "type_identifier",
    "qualified_identifier",
    "sized_type_specifier",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    /// Read the access level out of an `access_specifier` node's text.
    fn from_specifier(text: &str) -> Option<Self> {
        if text.contains("public") {
            Some(Self::Public)
        } else if text.contains("private") {
            Some(Self::Private)
        } else if text.contains("protected") {
            Some(Self::Protected)
        } else {
            None
        }
    }
}

/// Populate the descriptor's member collections from a class body node.
///
/// Class default access is private; every `access_specifier` encountered in
/// document order updates the level for the declarations that follow it.
pub(crate) fn classify_members(body: &Node, source: &str, class: &mut ClassDescriptor) {
    let mut access = Access::Private;
    walk(body, source, &mut access, class);

    if class.constructors.is_empty() {
        class
            .constructors
            .push(MethodDescriptor::default_constructor(&class.name));
    }
}

fn walk(node: &Node, source: &str, access: &mut Access, class: &mut ClassDescriptor) {
    if node.kind() == "access_specifier" {
        if let Some(level) = Access::from_specifier(node_text(node, source)) {
            *access = level;
        }
    } else {
        classify_declaration(node, source, *access, class);
    }

    for child in child_nodes(node) {
        walk(&child, source, access, class);
    }
}

fn classify_declaration(node: &Node, source: &str, access: Access, class: &mut ClassDescriptor) {
    if !matches!(
        node.kind(),
        "field_declaration" | "function_definition" | "enum_specifier"
    ) {
        return;
    }

    if access != Access::Public {
        return;
    }

    match node.kind() {
        "enum_specifier" => {
            class.enums.push(extract_enum(node, source));
        }
        "function_definition" => {
            let Some(declarator) = find_child(node, &["function_declarator"]) else {
                return;
            };
            let Some(method) = parse_method(node, &declarator, source, &class.name, true) else {
                return;
            };
            if method.name == class.name {
                class.constructors.push(method);
            } else {
                class.sync_methods.push(method);
            }
        }
        "field_declaration" => classify_field(node, source, class),
        _ => {}
    }
}

/// A `field_declaration` is a method declaration, a property/event wrapper,
/// a constant, or noise, checked in that order.
fn classify_field(node: &Node, source: &str, class: &mut ClassDescriptor) {
    if let Some(declarator) = find_child(node, &["function_declarator"]) {
        let Some(method) = parse_method(node, &declarator, source, &class.name, false) else {
            return;
        };
        if method.name == class.name {
            class.constructors.push(method);
        } else if method.is_async {
            class.async_methods.push(method);
        } else {
            class.sync_methods.push(method);
        }
        return;
    }

    let type_node = find_child(node, &["template_type"]);
    let name_node = find_child(node, &["field_identifier"]);

    if let (Some(type_node), Some(name_node)) = (type_node, name_node.as_ref()) {
        let marker = find_child(&type_node, &["type_identifier"])
            .map(|n| node_text(&n, source).to_string());
        let args = find_child(&type_node, &["template_argument_list"]);
        let member_name = node_text(name_node, source).to_string();

        if let Some(marker) = marker {
            if PROPERTY_MARKERS.contains(&marker.as_str()) {
                let type_name = args
                    .and_then(|a| find_child(&a, &["type_descriptor"]))
                    .map(|d| render_type(&d, source))
                    .unwrap_or_else(|| "unknown".to_string());
                class.properties.push(PropertyDescriptor {
                    name: member_name,
                    type_name,
                });
                return;
            }

            if EVENT_MARKERS.contains(&marker.as_str()) {
                let arg_types = args
                    .map(|a| {
                        child_nodes(&a)
                            .iter()
                            .filter(|c| c.kind() == "type_descriptor")
                            .map(|c| render_type(c, source))
                            .collect()
                    })
                    .unwrap_or_default();
                class.events.push(EventDescriptor {
                    name: member_name,
                    arg_types,
                });
                return;
            }
        }
    }

    if let Some(name_node) = name_node {
        if let Some(constant) = parse_constant(node, &name_node, source) {
            class.constants.push(constant);
        } else {
            log::debug!(
                "skipping unrecognized member shape: {}",
                node_text(node, source).trim()
            );
        }
    }
}

fn extract_enum(node: &Node, source: &str) -> EnumDescriptor {
    let mut is_scoped = false;
    let mut name = None;
    let mut enumerators = None;

    for child in child_nodes(node) {
        let text = node_text(&child, source);
        if text == "class" || text == "struct" {
            is_scoped = true;
        } else if child.kind() == "type_identifier" {
            name = Some(text.to_string());
        } else if child.kind() == "enumerator_list" {
            enumerators = Some(child);
        }
    }

    let values = enumerators
        .map(|list| {
            child_nodes(&list)
                .iter()
                .filter(|c| c.kind() == "enumerator")
                .filter_map(|c| find_child(c, &["identifier"]))
                .map(|id| node_text(&id, source).to_string())
                .collect()
        })
        .unwrap_or_default();

    EnumDescriptor {
        name: name.unwrap_or_else(|| ANONYMOUS_ENUM.to_string()),
        values,
        is_scoped,
    }
}

/// Parse a method from a `function_definition` (inline) or a
/// `field_declaration` (out-of-line). Returns `None` for destructors,
/// operators, and declarators with no name or parameter list.
fn parse_method(
    node: &Node,
    declarator: &Node,
    source: &str,
    class_name: &str,
    is_inline: bool,
) -> Option<MethodDescriptor> {
    let name_kinds: &[&str] = if is_inline {
        &["field_identifier", "identifier"]
    } else {
        &["field_identifier"]
    };
    let name_node = find_child(declarator, name_kinds)?;
    let params_node = find_child(declarator, &["parameter_list"])?;

    let name = node_text(&name_node, source).to_string();
    if name.starts_with('~') || name.starts_with("operator") {
        return None;
    }

    let is_constructor = name == class_name;

    let return_type = if is_constructor {
        String::new()
    } else {
        let skip: &[&str] = if is_inline {
            // Body and bare qualifiers are not the return type
            &["function_declarator", "compound_statement", "type_qualifier"]
        } else {
            &["attribute_declaration", "field_identifier", "function_declarator", ";"]
        };
        child_nodes(node)
            .iter()
            .find(|c| !skip.contains(&c.kind()))
            .map(|c| render_type(c, source))
            .unwrap_or_else(|| "void".to_string())
    };

    // Async is an attribute on out-of-line declarations; inline bodies are
    // always synchronous.
    let is_async = !is_inline
        && child_nodes(node)
            .iter()
            .filter(|c| c.kind() == "attribute_declaration")
            .any(|c| node_text(c, source).contains("async"));

    Some(MethodDescriptor {
        name,
        return_type,
        parameters: parse_parameters(&params_node, source),
        is_async,
    })
}

/// Parse a `parameter_list` into (type, name) pairs.
///
/// A parameter whose type does not resolve to an accepted shape is omitted
/// entirely rather than given a guessed type. Names fall back to a nested
/// identifier inside reference/pointer declarators, then to `arg`.
fn parse_parameters(param_list: &Node, source: &str) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    for param in child_nodes(param_list) {
        if param.kind() != "parameter_declaration" {
            continue;
        }

        let Some(type_node) = find_child(&param, PARAMETER_TYPE_KINDS) else {
            log::debug!(
                "omitting parameter with unresolvable type: {}",
                node_text(&param, source).trim()
            );
            continue;
        };

        let mut name = "arg".to_string();
        for kind in ["identifier", "reference_declarator", "pointer_declarator"] {
            if let Some(found) = find_child(&param, &[kind]) {
                if kind == "identifier" {
                    name = node_text(&found, source).to_string();
                } else if let Some(inner) = find_child(&found, &["identifier"]) {
                    name = node_text(&inner, source).to_string();
                }
                break;
            }
        }

        parameters.push(Parameter::new(render_type(&type_node, source), name));
    }

    parameters
}

/// Recognize a `const`/`constexpr` data member. The static flag is set only
/// when a `static` token is also present.
fn parse_constant(node: &Node, name_node: &Node, source: &str) -> Option<ConstantDescriptor> {
    let mut has_const = false;
    let mut is_static = false;
    let mut type_node = None;

    for child in child_nodes(node) {
        let text = node_text(&child, source);
        if text == "const" || text == "constexpr" {
            has_const = true;
        } else if child.kind() == "type_qualifier"
            && (text.contains("const") || text.contains("constexpr"))
        {
            has_const = true;
        } else if text == "static" {
            is_static = true;
        } else if CONSTANT_TYPE_KINDS.contains(&child.kind()) {
            type_node = Some(child);
        }
    }

    let type_node = type_node?;
    if !has_const {
        return None;
    }

    Some(ConstantDescriptor {
        name: node_text(name_node, source).to_string(),
        type_name: render_type(&type_node, source),
        is_static,
    })
}

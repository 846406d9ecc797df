//! Class metadata extraction from C++ headers.
//!
//! The pipeline is parse → locate → classify: tree-sitter produces the
//! syntax tree, the locator walks it tracking namespace scope, and the
//! member classifier fills the descriptor from the matched class body.
//! One call, one tree, no shared state.

pub mod locator;
pub mod members;
pub mod parser;
pub mod signature;

use crate::core::ClassDescriptor;
use crate::errors::ExtractError;
use std::fs;
use std::path::Path;

/// Extract a class from in-memory C++ source.
///
/// `Ok(None)` means the source parsed but no class/struct named
/// `class_name` was declared anywhere in it.
pub fn extract_class(
    source: &str,
    class_name: &str,
) -> Result<Option<ClassDescriptor>, ExtractError> {
    let ast = parser::parse_source(source)?;
    let root = ast.tree.root_node();
    Ok(locator::locate(&root, &ast.source, class_name))
}

/// Read a header file and extract a class from it.
///
/// Unreadable files surface as [`ExtractError::Io`]; everything else
/// behaves like [`extract_class`].
pub fn parse_header(
    path: &Path,
    class_name: &str,
) -> Result<Option<ClassDescriptor>, ExtractError> {
    let source = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "extracting {} from {} ({} bytes)",
        class_name,
        path.display(),
        source.len()
    );

    extract_class(&source, class_name)
}

//! bridgemoc: build-time metadata extraction for webbridge component
//! classes.
//!
//! Parses a C++ header with tree-sitter, locates a class by name across
//! nested namespaces, and classifies its public members into a
//! [`ClassDescriptor`] (properties, events, constants, enums,
//! constructors, and sync/async methods) for downstream code generators.
//! A separate pure mapper, [`ts_type`], turns canonical C++ type signatures
//! into TypeScript type expressions for stub generation.
//!
//! Extraction is best-effort by design: unrecognized member shapes are
//! skipped and unrecognized types map to an `unknown` sentinel, so a single
//! odd declaration never sinks a build.

pub mod cli;
pub mod core;
pub mod errors;
pub mod extract;
pub mod io;
pub mod report;
pub mod tstype;

pub use crate::core::{
    ClassDescriptor, ConstantDescriptor, EnumDescriptor, EventDescriptor, MethodDescriptor,
    Parameter, PropertyDescriptor,
};
pub use crate::errors::ExtractError;
pub use crate::extract::{extract_class, parse_header};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::report::render_report;
pub use crate::tstype::ts_type;

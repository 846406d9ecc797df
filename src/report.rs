//! Human-readable extraction report.
//!
//! Renders one extraction result as a plain-text report: a banner, one
//! section per member category with aligned name columns, and a closing
//! summary with per-category counts. Not-found results get a short hint
//! block instead of member sections.

use crate::core::{ClassDescriptor, MethodDescriptor};
use std::fmt::Write as _;
use std::path::Path;

const BANNER_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 40;

/// Render the detailed report for an extraction result.
pub fn render_report(class: Option<&ClassDescriptor>, header: &Path) -> String {
    let mut out = String::new();
    let banner = "=".repeat(BANNER_WIDTH);

    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "bridgemoc - class extraction report");
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "Header file: {}", header.display());
    let _ = writeln!(
        out,
        "Class found: {}",
        if class.is_some() { "yes" } else { "no" }
    );
    out.push('\n');

    let Some(class) = class else {
        out.push_str("WARNING: class not found.\n\n");
        out.push_str("Possible reasons:\n");
        out.push_str("  - the class does not exist in this header\n");
        out.push_str("  - the class name was misspelled\n");
        out.push_str("  - the header does not parse as C++\n");
        let _ = writeln!(out, "{banner}");
        return out;
    };

    let rule = "-".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Class: {}", class.qualified_name());
    let _ = writeln!(out, "{rule}");
    out.push('\n');

    write_properties(&mut out, class);
    write_events(&mut out, class);
    write_constants(&mut out, class);
    write_enums(&mut out, class);
    write_methods(&mut out, "CONSTRUCTORS", &class.constructors, false);
    write_methods(&mut out, "SYNC METHODS", &class.sync_methods, true);
    write_methods(&mut out, "ASYNC METHODS", &class.async_methods, true);
    write_summary(&mut out, class);

    let _ = writeln!(out, "{banner}");
    out
}

fn section(out: &mut String, title: &str, count: usize) {
    let _ = writeln!(out, "{title} ({count})");
    let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));
}

fn name_width<'a, I: Iterator<Item = &'a str>>(names: I) -> usize {
    names.map(str::len).max().unwrap_or(0)
}

fn write_properties(out: &mut String, class: &ClassDescriptor) {
    section(out, "PROPERTIES", class.properties.len());
    if class.properties.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let width = name_width(class.properties.iter().map(|p| p.name.as_str()));
        for prop in &class.properties {
            let _ = writeln!(out, "  - {:width$} : {}", prop.name, prop.type_name);
        }
    }
    out.push('\n');
}

fn write_events(out: &mut String, class: &ClassDescriptor) {
    section(out, "EVENTS", class.events.len());
    if class.events.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let width = name_width(class.events.iter().map(|e| e.name.as_str()));
        for event in &class.events {
            let _ = writeln!(
                out,
                "  - {:width$} : event<{}>",
                event.name,
                event.arg_types.join(", ")
            );
        }
    }
    out.push('\n');
}

fn write_constants(out: &mut String, class: &ClassDescriptor) {
    section(out, "CONSTANTS", class.constants.len());
    if class.constants.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let width = name_width(class.constants.iter().map(|c| c.name.as_str()));
        for constant in &class.constants {
            let prefix = if constant.is_static { "static " } else { "" };
            let _ = writeln!(
                out,
                "  - {:width$} : {}{}",
                constant.name, prefix, constant.type_name
            );
        }
    }
    out.push('\n');
}

fn write_enums(out: &mut String, class: &ClassDescriptor) {
    section(out, "ENUMS", class.enums.len());
    if class.enums.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for decl in &class.enums {
            let kind = if decl.is_scoped { "enum class" } else { "enum" };
            let _ = writeln!(
                out,
                "  - {} [{kind}]: {{{}}}",
                decl.name,
                decl.values.join(", ")
            );
        }
    }
    out.push('\n');
}

fn write_methods(out: &mut String, title: &str, methods: &[MethodDescriptor], returns: bool) {
    section(out, title, methods.len());
    if methods.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for method in methods {
            let params = method
                .parameters
                .iter()
                .map(|p| format!("{} {}", p.type_name, p.name))
                .collect::<Vec<_>>()
                .join(", ");
            if returns {
                let _ = writeln!(out, "  - {}({params}) -> {}", method.name, method.return_type);
            } else {
                let _ = writeln!(out, "  - {}({params})", method.name);
            }
        }
    }
    out.push('\n');
}

fn write_summary(out: &mut String, class: &ClassDescriptor) {
    out.push_str("SUMMARY\n");
    let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));
    let _ = writeln!(out, "  total members:   {}", class.member_count());
    let _ = writeln!(out, "    properties:    {}", class.properties.len());
    let _ = writeln!(out, "    events:        {}", class.events.len());
    let _ = writeln!(out, "    constants:     {}", class.constants.len());
    let _ = writeln!(out, "    enums:         {}", class.enums.len());
    let _ = writeln!(out, "    constructors:  {}", class.constructors.len());
    let _ = writeln!(out, "    sync methods:  {}", class.sync_methods.len());
    let _ = writeln!(out, "    async methods: {}", class.async_methods.len());
    out.push('\n');
}

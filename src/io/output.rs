//! Output writers for extraction results.
//!
//! One writer per format behind a common trait, so the binary can stream to
//! stdout or a file without caring which format was requested. JSON output
//! serializes the descriptor (`null` when the class was not found); the
//! terminal format is the detailed report.

use crate::core::ClassDescriptor;
use crate::report::render_report;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(
        &mut self,
        class: Option<&ClassDescriptor>,
        header: &Path,
    ) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(
        &mut self,
        class: Option<&ClassDescriptor>,
        _header: &Path,
    ) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&class)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(
        &mut self,
        class: Option<&ClassDescriptor>,
        header: &Path,
    ) -> anyhow::Result<()> {
        self.writer
            .write_all(render_report(class, header).as_bytes())?;
        Ok(())
    }
}

/// Build the writer for the requested format over any sink.
pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MethodDescriptor;
    use std::path::PathBuf;

    fn sample() -> ClassDescriptor {
        let mut class = ClassDescriptor::new("Widget", vec![]);
        class
            .constructors
            .push(MethodDescriptor::default_constructor("Widget"));
        class
    }

    #[test]
    fn test_json_writer_serializes_descriptor() {
        let mut buffer = Vec::new();
        let class = sample();
        JsonWriter::new(&mut buffer)
            .write_result(Some(&class), &PathBuf::from("widget.h"))
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"name\": \"Widget\""));
        assert!(text.contains("\"constructors\""));
    }

    #[test]
    fn test_json_writer_emits_null_for_not_found() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_result(None, &PathBuf::from("widget.h"))
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "null");
    }

    #[test]
    fn test_terminal_writer_renders_report() {
        let mut buffer = Vec::new();
        let class = sample();
        TerminalWriter::new(&mut buffer)
            .write_result(Some(&class), &PathBuf::from("widget.h"))
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Class found: yes"));
    }
}

//! Report rendering
//!
//! The Reporter holds a fixed list of records and writes them out as a
//! confirmation line followed by one labeled, pretty-printed JSON block per
//! metadata mapping.

use crate::config::RenderOptions;
use crate::records;
use crate::types::{Metadata, Record, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

/// Holds the records of a report and renders them in construction order
pub struct Reporter {
    records: Vec<Record>,
    options: RenderOptions,
}

impl Reporter {
    /// Create a reporter over the built-in records
    pub fn new() -> Self {
        Self::with_records(records::builtin())
    }

    /// Create a reporter over an arbitrary list of records
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            options: RenderOptions::default(),
        }
    }

    /// Builder method: replace the rendering options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Render every record to standard output
    ///
    /// # Example
    /// ```no_run
    /// use memory_report::Reporter;
    ///
    /// Reporter::new().render_all().unwrap();
    /// ```
    pub fn render_all(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out)
    }

    /// Render every record to the given writer
    pub fn render_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.options.confirmation)?;

        for record in &self.records {
            let Some(metadata) = record.metadata() else {
                log::debug!("Skipping narrative-only record: {}", record.label());
                continue;
            };

            let block = self.pretty_json(metadata)?;
            log::trace!("{}: {} bytes of metadata", record.label(), block.len());

            write!(out, "\n{}: ", record.label())?;
            out.write_all(&block)?;
            writeln!(out)?;
            log::debug!("Rendered record: {}", record.label());
        }

        out.flush()?;
        Ok(())
    }

    /// Render every record into a string
    pub fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render_to(&mut buf)?;
        // Only UTF-8 literals and serde_json output are ever written
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn pretty_json(&self, metadata: &Metadata) -> Result<Vec<u8>> {
        let indent = self.options.indent_unit();
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        metadata.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metadata;
    use serde_json::json;

    fn sample() -> Reporter {
        Reporter::with_records(vec![
            Record::new("First", "one", metadata([("a", json!(1)), ("b", json!(["x"]))])),
            Record::narrative_only("Skipped", "two"),
            Record::new("Second", "three", metadata([("ok", json!(true))])),
        ])
    }

    #[test]
    fn test_render_layout() {
        let output = sample().render_to_string().unwrap();
        let expected = "Memory stored successfully!\n\
                        \n\
                        First: {\n  \"a\": 1,\n  \"b\": [\n    \"x\"\n  ]\n}\n\
                        \n\
                        Second: {\n  \"ok\": true\n}\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_custom_options() {
        let reporter = sample().with_options(
            RenderOptions::new()
                .with_confirmation("Done")
                .with_indent(4),
        );
        let output = reporter.render_to_string().unwrap();

        assert!(output.starts_with("Done\n"));
        assert!(output.contains("Second: {\n    \"ok\": true\n}\n"));
        assert!(!output.contains("Skipped"));
    }

    #[test]
    fn test_empty_reporter_prints_confirmation_only() {
        let output = Reporter::with_records(Vec::new()).render_to_string().unwrap();
        assert_eq!(output, "Memory stored successfully!\n");
    }

    #[test]
    fn test_default_uses_builtin_records() {
        let reporter = Reporter::default();
        assert_eq!(reporter.records().len(), 3);
    }
}

use crate::domain::analysis::RecursionFinding;
use crate::domain::ports::ReportSink;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Render all findings (recursive or not) as pretty JSON for machine
/// consumption.
pub fn render_json(findings: &[RecursionFinding]) -> Result<String> {
    serde_json::to_string_pretty(findings).context("Failed to serialize findings")
}

/// JSON report written to a file.
pub struct JsonFileSink {
    pub path: PathBuf,
}

impl JsonFileSink {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ReportSink for JsonFileSink {
    fn emit(&mut self, findings: &[RecursionFinding]) -> Result<()> {
        let rendered = render_json(findings)?;
        std::fs::write(&self.path, rendered)
            .with_context(|| format!("Failed to write report to {}", self.path.display()))
    }
}

use crate::domain::ports::CallGraphSource;
use crate::domain::summary::ModuleSummary;
use anyhow::{Context, Result};

/// JSON call graph source: a serde `ModuleSummary` document, the direct way
/// for any host front end to hand the analyzer a call graph.
pub struct JsonSummarySource {
    pub json_path: std::path::PathBuf,
}

impl JsonSummarySource {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self {
            json_path: path.as_ref().to_path_buf(),
        }
    }
}

impl CallGraphSource for JsonSummarySource {
    fn load(&self) -> Result<ModuleSummary> {
        let content = std::fs::read_to_string(&self.json_path).with_context(|| {
            format!("Failed to read JSON file: {}", self.json_path.display())
        })?;
        serde_json::from_str(&content).context("Failed to parse ModuleSummary JSON")
    }
}

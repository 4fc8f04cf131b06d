use crate::domain::analysis::RecursionFinding;
use crate::domain::ports::ReportSink;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Render findings as the human-readable recursion report.
///
/// Only recursive functions produce output, one blank line between
/// functions:
///
/// ```text
/// Function 'a' is recursive
/// Recursive call paths:
///   Path: a -> b -> a
/// ```
///
/// A recursive function with no recoverable path gets an explicit marker
/// instead of the path list.
pub fn render_text(findings: &[RecursionFinding]) -> String {
    let mut out = String::new();
    for finding in findings.iter().filter(|f| f.is_recursive) {
        out.push_str(&format!("Function '{}' is recursive\n", finding.function));
        if finding.paths.is_empty() {
            out.push_str("  No detailed paths found (direct recursion)\n");
        } else {
            out.push_str("Recursive call paths:\n");
            for path in &finding.paths {
                out.push_str(&format!("  Path: {}\n", path.join(" -> ")));
            }
        }
        out.push('\n');
    }
    out
}

/// Text report written to a file.
pub struct TextFileSink {
    pub path: PathBuf,
}

impl TextFileSink {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ReportSink for TextFileSink {
    fn emit(&mut self, findings: &[RecursionFinding]) -> Result<()> {
        std::fs::write(&self.path, render_text(findings))
            .with_context(|| format!("Failed to write report to {}", self.path.display()))
    }
}

/// Text report mirrored to any writer (console, test buffer).
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, findings: &[RecursionFinding]) -> Result<()> {
        self.writer
            .write_all(render_text(findings).as_bytes())
            .context("Failed to write report")
    }
}

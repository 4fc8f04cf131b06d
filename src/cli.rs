use crate::adapters::report::json::{JsonFileSink, render_json};
use crate::adapters::report::text::{TextFileSink, render_text};
use crate::app::engine::RecursionEngine;
use crate::domain::ports::ReportSink;
use anyhow::Result;
use std::path::Path;

/// Load a module, run the recursion analysis, and print the report.
///
/// The report is always printed to the console; when `output` is given the
/// same report is additionally written to that file. A failed file write is
/// logged and does not invalidate the analysis (the findings were already
/// computed and printed).
pub fn run_analysis(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    max_paths: usize,
) -> Result<()> {
    println!("Loading module from: {}", input.display());
    let engine = RecursionEngine::load_from_path(input, max_paths)?;

    let health = engine.health();
    println!("Graph Summary:");
    println!("  Functions: {}", health.node_count);
    println!("  Call edges: {}", health.edge_count);
    println!("  Recursive functions: {}", health.recursive_function_count);
    println!("{}", "=".repeat(80));

    let findings = engine.findings().findings;
    if json {
        println!("{}", render_json(&findings)?);
    } else if health.recursive_function_count == 0 {
        println!("No recursive functions found.");
    } else {
        print!("{}", render_text(&findings));
    }

    if let Some(path) = output {
        let mut sink: Box<dyn ReportSink> = if json {
            Box::new(JsonFileSink::new(path))
        } else {
            Box::new(TextFileSink::new(path))
        };
        match sink.emit(&findings) {
            Ok(()) => println!("Report written to {}", path.display()),
            Err(e) => tracing::warn!("report not written: {e:#}"),
        }
    }

    Ok(())
}

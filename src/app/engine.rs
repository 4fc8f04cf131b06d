use crate::adapters::json::adapter::JsonSummarySource;
use crate::adapters::llvm::adapter::LlvmIrSource;
use crate::app::dto::*;
use crate::domain::analysis::{DEFAULT_PATH_CAP, RecursionAnalyzer, RecursionFinding};
use crate::domain::builder::GraphBuilder;
use crate::domain::graph::CallGraph;
use crate::domain::ports::CallGraphSource;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Application engine: one loaded module analysis, served to the CLI and
/// HTTP adapters. The graph and findings are immutable once built; `reload`
/// swaps in a freshly built pair.
#[derive(Clone)]
pub struct RecursionEngine {
    inner: Arc<RwLock<EngineData>>,
}

struct EngineData {
    input_path: PathBuf,
    module_name: String,
    graph: Arc<CallGraph>,
    findings: Arc<Vec<RecursionFinding>>,
    path_cap: usize,
}

impl RecursionEngine {
    /// Construct an engine from an already-built graph.
    ///
    /// Used for testing or when the graph is built by an external call graph
    /// source.
    pub fn from_prebuilt(
        input_path: PathBuf,
        module_name: String,
        graph: CallGraph,
        path_cap: usize,
    ) -> Self {
        let findings = RecursionAnalyzer::with_path_cap(path_cap).analyze(&graph);
        Self {
            inner: Arc::new(RwLock::new(EngineData {
                input_path,
                module_name,
                graph: Arc::new(graph),
                findings: Arc::new(findings),
                path_cap,
            })),
        }
    }

    /// Load a module from disk, picking the source adapter by extension
    /// (`.ll` textual IR, `.json` module summary), and analyze it.
    pub fn load_from_path(input_path: &Path, path_cap: usize) -> Result<Self> {
        let summary = source_for_path(input_path)?.load()?;
        let graph = GraphBuilder::new().build(&summary);
        tracing::info!(
            module = %summary.module_name,
            nodes = graph.graph.node_count(),
            edges = graph.graph.edge_count(),
            "call graph built"
        );
        Ok(Self::from_prebuilt(
            input_path.to_path_buf(),
            summary.module_name,
            graph,
            path_cap,
        ))
    }

    pub fn reload(&self) -> Result<HealthResponse> {
        let (path, path_cap) = {
            let data = self.inner.read().unwrap();
            (data.input_path.clone(), data.path_cap)
        };
        let new_engine = Self::load_from_path(&path, path_cap)?;
        let new_data = new_engine.inner.read().unwrap();

        let mut data = self.inner.write().unwrap();
        data.module_name = new_data.module_name.clone();
        data.graph = new_data.graph.clone();
        data.findings = new_data.findings.clone();

        Ok(health_of(&data))
    }

    pub fn health(&self) -> HealthResponse {
        let data = self.inner.read().unwrap();
        health_of(&data)
    }

    pub fn findings(&self) -> FindingsResponse {
        let data = self.inner.read().unwrap();
        FindingsResponse {
            module_name: data.module_name.clone(),
            findings: data.findings.as_ref().clone(),
        }
    }

    /// Analyze a posted module summary. Stateless with respect to the loaded
    /// module: each invocation is independent.
    pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        let graph = GraphBuilder::new().build(&request.module);
        let cap = request.max_paths.unwrap_or(DEFAULT_PATH_CAP);
        let findings = RecursionAnalyzer::with_path_cap(cap).analyze(&graph);
        Ok(AnalyzeResponse {
            module_name: request.module.module_name,
            function_count: findings.len(),
            recursive_function_count: findings.iter().filter(|f| f.is_recursive).count(),
            findings,
        })
    }
}

fn health_of(data: &EngineData) -> HealthResponse {
    HealthResponse {
        input_path: data.input_path.to_string_lossy().to_string(),
        module_name: data.module_name.clone(),
        node_count: data.graph.graph.node_count(),
        edge_count: data.graph.graph.edge_count(),
        recursive_function_count: data.findings.iter().filter(|f| f.is_recursive).count(),
    }
}

fn source_for_path(path: &Path) -> Result<Box<dyn CallGraphSource>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ll") => Ok(Box::new(LlvmIrSource::new(path))),
        Some("json") => Ok(Box::new(JsonSummarySource::new(path))),
        _ => bail!(
            "Unsupported input format: {} (expected .ll or .json)",
            path.display()
        ),
    }
}

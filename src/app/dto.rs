use crate::domain::analysis::RecursionFinding;
use crate::domain::summary::ModuleSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub input_path: String,
    pub module_name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub recursive_function_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingsResponse {
    pub module_name: String,
    pub findings: Vec<RecursionFinding>,
}

/// Ad-hoc analysis of a posted call graph. Each request is analyzed
/// independently of the loaded module; nothing persists between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub module: ModuleSummary,
    /// Per-function witness path cap; defaults to the analyzer's built-in
    /// cap when omitted.
    pub max_paths: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub module_name: String,
    pub function_count: usize,
    pub recursive_function_count: usize,
    pub findings: Vec<RecursionFinding>,
}

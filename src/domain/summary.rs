//! Module summary: the contract between input adapters (LLVM IR scanner, JSON
//! loader, any host front end) and the call graph builder.
//!
//! A `ModuleSummary` is the "set of functions, each with a name, a
//! body-known flag, and its outgoing call edges" boundary consumed by the
//! core. It is the JSON input format as well.

use serde::{Deserialize, Serialize};

/// One function as supplied by the host program representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub name: String,
    /// `true` when the body is known; `false` for declaration-only /
    /// external functions.
    #[serde(default = "default_true")]
    pub is_definition: bool,
    /// Callee names, one entry per call site (duplicates allowed).
    #[serde(default)]
    pub callees: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Full set of functions for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSummary {
    /// Module name (e.g. source file stem); informational only.
    #[serde(default)]
    pub module_name: String,
    pub functions: Vec<FunctionSummary>,
}

impl ModuleSummary {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            functions: Vec::new(),
        }
    }
}

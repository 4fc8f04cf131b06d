// Textual LLVM IR (.ll) scanning utilities
// This module contains helper functions for extracting function headers and
// call sites from IR text; the adapter turns them into a ModuleSummary.

use crate::domain::summary::{FunctionSummary, ModuleSummary};
use regex::Regex;
use std::sync::OnceLock;

/// `@name` where name is either a plain identifier or a quoted string.
const GLOBAL_NAME: &str = r#"@("[^"]+"|[-A-Za-z$._][-A-Za-z$._0-9]*)"#;

fn define_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^define\b[^@]*{GLOBAL_NAME}\s*\(")).expect("define regex")
    })
}

fn declare_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^declare\b[^@]*{GLOBAL_NAME}\s*\(")).expect("declare regex")
    })
}

fn call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"\b(?:call|invoke)\b[^@;]*?{GLOBAL_NAME}\s*\(")).expect("call regex")
    })
}

fn unquote(name: &str) -> String {
    name.trim_matches('"').to_string()
}

/// Function name from a `define` header line, if this line is one.
pub fn define_name(line: &str) -> Option<String> {
    define_regex()
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| unquote(m.as_str()))
}

/// Function name from a `declare` line, if this line is one.
pub fn declare_name(line: &str) -> Option<String> {
    declare_regex()
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| unquote(m.as_str()))
}

/// Direct `call` / `invoke` targets on one instruction line. Calls through
/// function pointers carry no `@target` and are not resolved here (the input
/// graph does not model indirect calls).
pub fn callee_names(line: &str) -> Vec<String> {
    call_regex()
        .captures_iter(line)
        .filter_map(|cap| cap.get(1).map(|m| unquote(m.as_str())))
        .collect()
}

/// Scan a full `.ll` module. `define` opens a function body that runs until
/// the closing `}` at column zero; every call target seen inside becomes one
/// callee entry (duplicates preserved, the builder collapses them).
pub fn parse_module(text: &str, module_name: &str) -> ModuleSummary {
    let mut summary = ModuleSummary::new(module_name);
    let mut current: Option<FunctionSummary> = None;

    for line in text.lines() {
        if let Some(name) = define_name(line) {
            // Unterminated previous body: keep what was collected.
            if let Some(done) = current.take() {
                summary.functions.push(done);
            }
            current = Some(FunctionSummary {
                name,
                is_definition: true,
                callees: Vec::new(),
            });
            continue;
        }
        if let Some(name) = declare_name(line) {
            summary.functions.push(FunctionSummary {
                name,
                is_definition: false,
                callees: Vec::new(),
            });
            continue;
        }
        if line.starts_with('}') {
            if let Some(done) = current.take() {
                summary.functions.push(done);
            }
            continue;
        }
        if let Some(func) = current.as_mut() {
            func.callees.extend(callee_names(line));
        }
    }

    if let Some(done) = current.take() {
        summary.functions.push(done);
    }

    summary
}

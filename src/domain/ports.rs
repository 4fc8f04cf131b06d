use crate::domain::analysis::RecursionFinding;
use crate::domain::summary::ModuleSummary;
use anyhow::Result;

/// Call graph source port (implemented by Infrastructure)
pub trait CallGraphSource {
    fn load(&self) -> Result<ModuleSummary>;
}

/// Report sink port. A sink failure must never abort or invalidate the
/// analysis itself; callers compute findings first and treat emit errors as
/// boundary concerns.
pub trait ReportSink {
    fn emit(&mut self, findings: &[RecursionFinding]) -> Result<()>;
}

pub mod json;
pub mod llvm;
pub mod report;

//! Test fixture generators for integration tests.
#![allow(dead_code)]

use recursion_scan::domain::summary::{FunctionSummary, ModuleSummary};

pub fn definition(name: &str, callees: &[&str]) -> FunctionSummary {
    FunctionSummary {
        name: name.to_string(),
        is_definition: true,
        callees: callees.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn declaration(name: &str) -> FunctionSummary {
    FunctionSummary {
        name: name.to_string(),
        is_definition: false,
        callees: Vec::new(),
    }
}

pub fn module(name: &str, functions: Vec<FunctionSummary>) -> ModuleSummary {
    ModuleSummary {
        module_name: name.to_string(),
        functions,
    }
}

/// The shape of the original test program: one direct recursion, one mutual
/// pair, one plain function, plus an external printf.
pub fn create_test_program_summary() -> ModuleSummary {
    module(
        "test_program",
        vec![
            definition("direct_recursive", &["direct_recursive"]),
            definition("indirect_recursive_a", &["indirect_recursive_b"]),
            definition("indirect_recursive_b", &["indirect_recursive_a"]),
            definition("non_recursive", &[]),
            declaration("printf"),
        ],
    )
}

/// Three-function cycle x -> y -> z -> x plus an unrelated w.
pub fn create_three_cycle_summary() -> ModuleSummary {
    module(
        "three_cycle",
        vec![
            definition("x", &["y"]),
            definition("y", &["z"]),
            definition("z", &["x"]),
            definition("w", &[]),
        ],
    )
}

/// Textual LLVM IR for the original test program (as clang would emit it,
/// stripped to the instructions the scanner cares about).
pub const TEST_PROGRAM_IR: &str = r#"; ModuleID = 'test.c'
source_filename = "test.c"

define dso_local i32 @direct_recursive(i32 noundef %0) #0 {
  %2 = icmp sle i32 %0, 0
  br i1 %2, label %done, label %rec
rec:
  %3 = sub nsw i32 %0, 1
  %4 = call i32 @direct_recursive(i32 noundef %3)
  %5 = add nsw i32 %0, %4
  ret i32 %5
done:
  ret i32 0
}

define dso_local i32 @indirect_recursive_a(i32 noundef %0) #0 {
  %2 = sub nsw i32 %0, 1
  %3 = call i32 @indirect_recursive_b(i32 noundef %2)
  ret i32 %3
}

define dso_local i32 @indirect_recursive_b(i32 noundef %0) #0 {
  %2 = sub nsw i32 %0, 1
  %3 = call i32 @indirect_recursive_a(i32 noundef %2)
  ret i32 %3
}

define dso_local i32 @non_recursive(i32 noundef %0) #0 {
  %2 = mul nsw i32 %0, 2
  ret i32 %2
}

declare i32 @printf(ptr noundef, ...) #1
"#;

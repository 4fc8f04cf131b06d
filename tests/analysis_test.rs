//! End-to-end analysis tests over summaries: builder -> SCC -> paths.

mod common;

use common::fixtures::{
    create_test_program_summary, create_three_cycle_summary, declaration, definition, module,
};
use recursion_scan::domain::analysis::{RecursionAnalyzer, RecursionFinding};
use recursion_scan::domain::builder::GraphBuilder;

fn analyze(summary: &recursion_scan::domain::summary::ModuleSummary) -> Vec<RecursionFinding> {
    RecursionAnalyzer::new().analyze(&GraphBuilder::new().build(summary))
}

fn finding<'a>(findings: &'a [RecursionFinding], name: &str) -> &'a RecursionFinding {
    findings
        .iter()
        .find(|f| f.function == name)
        .unwrap_or_else(|| panic!("no finding for {name}"))
}

#[test]
fn test_original_test_program() {
    let findings = analyze(&create_test_program_summary());

    let direct = finding(&findings, "direct_recursive");
    assert!(direct.is_recursive);
    assert_eq!(
        direct.paths,
        vec![vec![
            "direct_recursive".to_string(),
            "direct_recursive".to_string()
        ]]
    );

    let a = finding(&findings, "indirect_recursive_a");
    assert!(a.is_recursive);
    assert_eq!(
        a.paths,
        vec![vec![
            "indirect_recursive_a".to_string(),
            "indirect_recursive_b".to_string(),
            "indirect_recursive_a".to_string(),
        ]]
    );

    let b = finding(&findings, "indirect_recursive_b");
    assert!(b.is_recursive);
    assert_eq!(
        b.paths,
        vec![vec![
            "indirect_recursive_b".to_string(),
            "indirect_recursive_a".to_string(),
            "indirect_recursive_b".to_string(),
        ]]
    );

    assert!(!finding(&findings, "non_recursive").is_recursive);

    // printf is declaration-only: never the subject of a finding
    assert!(findings.iter().all(|f| f.function != "printf"));
}

#[test]
fn test_three_cycle_with_unrelated_function() {
    let findings = analyze(&create_three_cycle_summary());

    for name in ["x", "y", "z"] {
        let f = finding(&findings, name);
        assert!(f.is_recursive, "{name} should be recursive");
        assert_eq!(f.paths.len(), 1);
        assert_eq!(f.paths[0].len(), 4, "4-element witness path for {name}");
        assert_eq!(f.paths[0].first(), f.paths[0].last());
    }

    let w = finding(&findings, "w");
    assert!(!w.is_recursive);
    assert!(w.paths.is_empty());
}

#[test]
fn test_function_with_no_incoming_cycle_is_not_recursive() {
    // chain a -> b -> c, no cycle anywhere
    let summary = module(
        "chain",
        vec![
            definition("a", &["b"]),
            definition("b", &["c"]),
            definition("c", &[]),
        ],
    );
    let findings = analyze(&summary);
    assert!(findings.iter().all(|f| !f.is_recursive));
    assert!(findings.iter().all(|f| f.paths.is_empty()));
}

#[test]
fn test_recursive_callers_of_declarations() {
    // A definition calling an external declaration recursively-looking names
    // must not flag the declaration.
    let summary = module(
        "externals",
        vec![
            definition("wrapper", &["qsort", "wrapper"]),
            declaration("qsort"),
        ],
    );
    let findings = analyze(&summary);
    assert_eq!(findings.len(), 1);
    let wrapper = finding(&findings, "wrapper");
    assert!(wrapper.is_recursive);
    assert_eq!(
        wrapper.paths,
        vec![vec!["wrapper".to_string(), "wrapper".to_string()]]
    );
}

#[test]
fn test_classification_identical_across_runs() {
    let summary = create_test_program_summary();
    let first = analyze(&summary);
    let second = analyze(&summary);
    assert_eq!(first, second);
}

#[test]
fn test_empty_module_yields_no_findings() {
    let summary = module("empty", vec![]);
    assert!(analyze(&summary).is_empty());
}

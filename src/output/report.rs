use std::fmt::Write;

use crate::validator::finding::{Finding, RuleId};

/// Build a markdown report with a summary line and one row per finding.
pub fn build_report(findings: &[Finding]) -> String {
    let mut report = String::new();

    writeln!(report, "# rlscheck Report").unwrap();
    writeln!(report).unwrap();

    let not_enabled = count_rule(findings, RuleId::RlsNotEnabled);
    let no_policy = count_rule(findings, RuleId::RlsNoPolicy);
    writeln!(
        report,
        "{} table(s) lack RLS coverage: {not_enabled} without RLS enabled, {no_policy} without a policy.",
        findings.len()
    )
    .unwrap();
    writeln!(report).unwrap();

    writeln!(report, "| Table | Rule | Location | Message |").unwrap();
    writeln!(report, "|-------|------|----------|---------|").unwrap();

    for finding in findings {
        writeln!(
            report,
            "| {} | {} | {}:{}:{} | {} |",
            escape_cell(&finding.table_name),
            finding.rule_id,
            escape_cell(&finding.location.file),
            finding.location.line,
            finding.location.column,
            escape_cell(&finding.message)
        )
        .unwrap();
    }

    report
}

fn count_rule(findings: &[Finding], rule: RuleId) -> usize {
    findings.iter().filter(|f| f.rule_id == rule).count()
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

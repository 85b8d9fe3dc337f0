mod support;

use std::collections::HashSet;

use rlscheck::validator::correlator::{correlate, validate_rls};
use rlscheck::{ExclusionSet, Finding, RuleId};
use support::{enable, excluded, policy, table};

fn as_set(findings: &[Finding]) -> HashSet<(String, RuleId)> {
    findings
        .iter()
        .map(|f| (f.table_name.clone(), f.rule_id))
        .collect()
}

#[test]
fn no_tables_no_findings() {
    assert!(validate_rls(&[], &[], &[], &ExclusionSet::new()).is_empty());
}

#[test]
fn missing_enable_reports_rls_not_enabled() {
    let tables = [table("accounts", "test.sql", 1)];
    let findings = validate_rls(&tables, &[], &[], &ExclusionSet::new());

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].table_name, "accounts");
    assert_eq!(findings[0].rule_id, RuleId::RlsNotEnabled);
    assert_eq!(findings[0].location, support::loc("test.sql", 1));
    assert!(findings[0].message.contains("'accounts'"));
    assert!(findings[0].message.contains("not enabled"));
}

#[test]
fn missing_policy_reports_rls_no_policy() {
    let tables = [table("accounts", "test.sql", 1)];
    let enables = [enable("accounts", "test.sql", 2)];
    let findings = validate_rls(&tables, &enables, &[], &ExclusionSet::new());

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule_id, RuleId::RlsNoPolicy);
    assert_eq!(findings[0].location.line, 1, "location points at the declaration");
    assert!(findings[0].message.contains("no policy"));
}

#[test]
fn enabled_table_with_policy_is_compliant() {
    let tables = [table("accounts", "test.sql", 1)];
    let enables = [enable("accounts", "test.sql", 2)];
    let policies = [policy("accounts", "account_policy", "test.sql", 3)];
    assert!(validate_rls(&tables, &enables, &policies, &ExclusionSet::new()).is_empty());
}

#[test]
fn policy_without_enable_still_reports_not_enabled() {
    let tables = [table("accounts", "test.sql", 1)];
    let policies = [policy("accounts", "account_policy", "test.sql", 3)];
    let findings = validate_rls(&tables, &[], &policies, &ExclusionSet::new());
    assert_eq!(as_set(&findings), HashSet::from([("accounts".to_string(), RuleId::RlsNotEnabled)]));
}

#[test]
fn excluded_table_never_reported() {
    let tables = [table("accounts", "test.sql", 1)];
    let findings = validate_rls(&tables, &[], &[], &excluded(&["accounts"]));
    assert!(findings.is_empty());
}

#[test]
fn excluded_facts_do_not_enter_the_map() {
    let tables = [table("accounts", "test.sql", 1), table("users", "test.sql", 2)];
    let enables = [enable("accounts", "test.sql", 3), enable("users", "test.sql", 4)];
    let policies = [policy("users", "p", "test.sql", 5)];
    let records = correlate(&tables, &enables, &policies, &excluded(&["users"]));

    assert_eq!(records.len(), 1);
    assert!(records.contains_key("accounts"));
    assert!(records["accounts"].policies.is_empty());
}

#[test]
fn exclusion_is_case_sensitive() {
    let tables = [table("accounts", "test.sql", 1)];
    let findings = validate_rls(&tables, &[], &[], &excluded(&["Accounts"]));
    assert_eq!(findings.len(), 1);
}

#[test]
fn multiple_tables_report_only_non_compliant_ones() {
    let tables = [
        table("accounts", "test.sql", 1),
        table("users", "test.sql", 5),
        table("orders", "test.sql", 9),
    ];
    let enables = [enable("accounts", "test.sql", 2), enable("orders", "test.sql", 10)];
    let policies = [policy("accounts", "p", "test.sql", 3)];
    let findings = validate_rls(&tables, &enables, &policies, &ExclusionSet::new());

    assert_eq!(
        as_set(&findings),
        HashSet::from([
            ("users".to_string(), RuleId::RlsNotEnabled),
            ("orders".to_string(), RuleId::RlsNoPolicy),
        ])
    );
}

#[test]
fn facts_for_undeclared_tables_are_dropped() {
    let enables = [enable("ghost", "test.sql", 1)];
    let policies = [policy("ghost", "p", "test.sql", 2)];
    assert!(validate_rls(&[], &enables, &policies, &ExclusionSet::new()).is_empty());
}

#[test]
fn redeclared_table_reports_last_declaration_once() {
    let tables = [table("accounts", "a.sql", 1), table("accounts", "b.sql", 7)];
    let findings = validate_rls(&tables, &[], &[], &ExclusionSet::new());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].location, support::loc("b.sql", 7));
}

#[test]
fn declaration_and_enable_may_come_from_different_sources() {
    let tables = [table("accounts", "tables.sql", 1)];
    let enables = [enable("accounts", "rls.sql", 1)];
    let policies = [policy("accounts", "p", "policies.sql", 1)];
    assert!(validate_rls(&tables, &enables, &policies, &ExclusionSet::new()).is_empty());
}

#[test]
fn validation_is_idempotent_as_a_set() {
    let tables = [
        table("a", "test.sql", 1),
        table("b", "test.sql", 2),
        table("c", "test.sql", 3),
        table("d", "test.sql", 4),
    ];
    let enables = [enable("b", "test.sql", 5), enable("c", "test.sql", 6)];
    let policies = [policy("c", "p", "test.sql", 7)];

    let first = validate_rls(&tables, &enables, &policies, &ExclusionSet::new());
    let second = validate_rls(&tables, &enables, &policies, &ExclusionSet::new());
    assert_eq!(first.len(), 3);
    assert_eq!(as_set(&first), as_set(&second));
}

#[test]
fn record_tracks_every_policy_in_order() {
    let tables = [table("accounts", "test.sql", 1)];
    let enables = [enable("accounts", "test.sql", 2)];
    let policies = [
        policy("accounts", "manager_policy", "test.sql", 3),
        policy("accounts", "department_policy", "test.sql", 4),
    ];
    let records = correlate(&tables, &enables, &policies, &ExclusionSet::new());
    let record = &records["accounts"];

    let names: Vec<&str> = record.policies.iter().map(|p| p.policy_name.as_str()).collect();
    assert_eq!(names, ["manager_policy", "department_policy"]);
    assert_eq!(record.violation(), None);
}

use std::collections::HashMap;

use crate::parser::facts::{PolicyFact, RlsEnableFact, TableFact};
use crate::validator::exclusion::ExclusionSet;
use crate::validator::finding::{Finding, RuleId};

/// Everything observed about one declared table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    /// Bare table name.
    pub table_name: String,
    /// The most recently observed declaration.
    pub declaration: TableFact,
    /// Set when any enable directive for this table was observed.
    pub rls_enabled: Option<RlsEnableFact>,
    /// Every policy attached to this table, in observation order.
    pub policies: Vec<PolicyFact>,
}

impl TableRecord {
    fn new(declaration: TableFact) -> Self {
        Self {
            table_name: declaration.table_name.clone(),
            declaration,
            rls_enabled: None,
            policies: Vec::new(),
        }
    }

    /// The first rule this table fails, checked in priority order.
    pub fn violation(&self) -> Option<RuleId> {
        if self.rls_enabled.is_none() {
            Some(RuleId::RlsNotEnabled)
        } else if self.policies.is_empty() {
            Some(RuleId::RlsNoPolicy)
        } else {
            None
        }
    }
}

/// Group facts by bare table name, skipping excluded tables.
///
/// Later declarations of the same name replace earlier ones. Enable
/// directives and policies for tables never declared are dropped.
pub fn correlate(
    tables: &[TableFact],
    rls_enables: &[RlsEnableFact],
    policies: &[PolicyFact],
    excluded: &ExclusionSet,
) -> HashMap<String, TableRecord> {
    let mut records: HashMap<String, TableRecord> = HashMap::new();

    for table in tables {
        if excluded.contains(&table.table_name) {
            continue;
        }
        match records.get_mut(&table.table_name) {
            Some(record) => record.declaration = table.clone(),
            None => {
                records.insert(table.table_name.clone(), TableRecord::new(table.clone()));
            }
        }
    }

    for enable in rls_enables {
        if excluded.contains(&enable.table_name) {
            continue;
        }
        match records.get_mut(&enable.table_name) {
            Some(record) => record.rls_enabled = Some(enable.clone()),
            None => tracing::debug!(
                table = %enable.table_name,
                file = %enable.location.file,
                "ignoring RLS enable for undeclared table"
            ),
        }
    }

    for policy in policies {
        if excluded.contains(&policy.table_name) {
            continue;
        }
        match records.get_mut(&policy.table_name) {
            Some(record) => record.policies.push(policy.clone()),
            None => tracing::debug!(
                table = %policy.table_name,
                policy = %policy.policy_name,
                "ignoring policy for undeclared table"
            ),
        }
    }

    records
}

/// Validate RLS coverage for every declared, non-excluded table.
///
/// Each table yields at most one finding. The order of the returned
/// findings is unspecified; sort them before emitting if stable output
/// matters.
pub fn validate_rls(
    tables: &[TableFact],
    rls_enables: &[RlsEnableFact],
    policies: &[PolicyFact],
    excluded: &ExclusionSet,
) -> Vec<Finding> {
    correlate(tables, rls_enables, policies, excluded)
        .into_values()
        .filter_map(|record| {
            let rule = record.violation()?;
            Some(Finding::new(
                rule,
                &record.table_name,
                record.declaration.location,
            ))
        })
        .collect()
}

use serde::Serialize;
use std::fmt;

use crate::parser::facts::SourceLocation;

/// Identifier of the rule a finding violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleId {
    /// The table never had row-level security enabled.
    #[serde(rename = "rls-not-enabled")]
    RlsNotEnabled,
    /// Row-level security is enabled but no policy is attached.
    #[serde(rename = "rls-no-policy")]
    RlsNoPolicy,
}

impl RuleId {
    /// Wire identifier, as emitted in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::RlsNotEnabled => "rls-not-enabled",
            RuleId::RlsNoPolicy => "rls-no-policy",
        }
    }

    /// Human-readable message for a table violating this rule.
    pub fn message(self, table_name: &str) -> String {
        match self {
            RuleId::RlsNotEnabled => format!("RLS is not enabled on table '{table_name}'"),
            RuleId::RlsNoPolicy => {
                format!("RLS is enabled on table '{table_name}' but no policy is defined")
            }
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported compliance violation for a single table.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Human-readable description naming the table and the missing control.
    pub message: String,
    /// Location of the table's (last observed) declaration.
    pub location: SourceLocation,
    /// Bare table name.
    pub table_name: String,
    /// Violated rule.
    pub rule_id: RuleId,
}

impl Finding {
    /// Build a finding for `table_name` with the rule's standard message.
    pub fn new(rule_id: RuleId, table_name: &str, location: SourceLocation) -> Self {
        Self {
            message: rule_id.message(table_name),
            location,
            table_name: table_name.to_string(),
            rule_id,
        }
    }
}

use serde::Serialize;

/// Where a statement was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourceLocation {
    /// Name of the source the statement came from (file path or `stdin`).
    pub file: String,
    /// 1-based line of the statement's first token.
    pub line: u64,
    /// 1-based column of the statement's first token.
    pub column: u64,
}

impl SourceLocation {
    /// Build a location from its parts.
    pub fn new(file: impl Into<String>, line: u64, column: u64) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// A `CREATE TABLE` observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFact {
    /// Location of the declaring statement.
    pub location: SourceLocation,
    /// Bare table name, schema qualifier removed.
    pub table_name: String,
}

/// An `ALTER TABLE ... ENABLE ROW LEVEL SECURITY` observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RlsEnableFact {
    /// Location of the `ALTER TABLE` statement.
    pub location: SourceLocation,
    /// Bare name of the altered table.
    pub table_name: String,
}

/// A `CREATE POLICY` observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFact {
    /// Location of the `CREATE POLICY` statement.
    pub location: SourceLocation,
    /// Bare name of the table the policy is attached to.
    pub table_name: String,
    /// Policy name as written (quotes removed).
    pub policy_name: String,
}

/// The three ordered fact lists extracted from one or more sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFacts {
    /// Table declarations in observation order.
    pub tables: Vec<TableFact>,
    /// RLS enablement directives in observation order.
    pub rls_enables: Vec<RlsEnableFact>,
    /// Policy declarations in observation order.
    pub policies: Vec<PolicyFact>,
}

impl ExtractedFacts {
    /// Append every fact from `other`, keeping per-list order.
    pub fn extend(&mut self, other: ExtractedFacts) {
        self.tables.extend(other.tables);
        self.rls_enables.extend(other.rls_enables);
        self.policies.extend(other.policies);
    }

    /// True when no fact of any kind was extracted.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.rls_enables.is_empty() && self.policies.is_empty()
    }
}

use std::collections::HashSet;

/// Table names that are never validated.
///
/// Matching is exact and case-sensitive; names are compared against the
/// bare table names produced by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `table_name` is excluded.
    pub fn contains(&self, table_name: &str) -> bool {
        self.names.contains(table_name)
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Entries are trimmed and blank entries are dropped, so the pieces of a
/// split `"audit_log, schema_migrations,"` collect into two names.
impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }
}

//! Flag `PostgreSQL` tables that lack row-level security in SQL migration scripts.
#![warn(missing_docs)]

/// Error types for lint runs.
pub mod error;
/// Multi-source aggregation and the lint run driver.
pub mod linter;
/// Finding emission (JSON and Markdown).
pub mod output;
/// SQL parsing and fact extraction.
pub mod parser;
/// Fact correlation, exclusions, and RLS compliance findings.
pub mod validator;

pub use error::{LintError, Result};
pub use linter::aggregate::SqlSource;
pub use linter::runner::{run_linter, LintOutcome, LinterOptions};
pub use output::formatter::OutputFormat;
pub use validator::exclusion::ExclusionSet;
pub use validator::finding::{Finding, RuleId};

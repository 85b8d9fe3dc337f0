use std::io::Write;

use crate::error::{LintError, Result};
use crate::linter::aggregate::{collect_facts, SqlSource};
use crate::output::formatter::{self, OutputFormat};
use crate::validator::correlator::validate_rls;
use crate::validator::exclusion::ExclusionSet;
use crate::validator::finding::Finding;

/// Inputs for one lint run.
#[derive(Debug, Default)]
pub struct LinterOptions<'a> {
    /// SQL sources, validated together as one schema.
    pub sources: Vec<SqlSource<'a>>,
    /// Tables that are never reported.
    pub excluded_tables: ExclusionSet,
    /// How findings are written.
    pub format: OutputFormat,
}

/// Result of a completed lint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOutcome {
    /// Findings, sorted by file, line and table name.
    pub findings: Vec<Finding>,
}

impl LintOutcome {
    /// True when no table is missing RLS coverage.
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Lint every source, write findings to `out`, and report the outcome.
///
/// Nothing is written when there are no findings. Hard errors (no sources,
/// unreadable or malformed SQL) abort before anything is written.
pub fn run_linter(options: LinterOptions<'_>, out: &mut dyn Write) -> Result<LintOutcome> {
    if options.sources.is_empty() {
        return Err(LintError::NoSources);
    }

    let source_count = options.sources.len();
    let facts = collect_facts(options.sources)?;
    tracing::debug!(
        sources = source_count,
        tables = facts.tables.len(),
        rls_enables = facts.rls_enables.len(),
        policies = facts.policies.len(),
        "aggregated facts"
    );

    let mut findings = validate_rls(
        &facts.tables,
        &facts.rls_enables,
        &facts.policies,
        &options.excluded_tables,
    );
    formatter::sort_findings(&mut findings);

    formatter::write_findings(out, &findings, options.format)?;

    tracing::info!(
        tables = facts.tables.len(),
        findings = findings.len(),
        "RLS validation finished"
    );

    Ok(LintOutcome { findings })
}

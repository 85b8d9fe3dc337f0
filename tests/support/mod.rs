#![allow(dead_code)]

use std::path::PathBuf;

use rlscheck::parser::facts::{PolicyFact, RlsEnableFact, SourceLocation, TableFact};
use rlscheck::{run_linter, ExclusionSet, LintError, LintOutcome, LinterOptions, OutputFormat, SqlSource};

pub(crate) fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

pub(crate) fn read_fixture_sql(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture SQL should be readable")
}

pub(crate) fn loc(file: &str, line: u64) -> SourceLocation {
    SourceLocation::new(file, line, 1)
}

pub(crate) fn table(name: &str, file: &str, line: u64) -> TableFact {
    TableFact {
        location: loc(file, line),
        table_name: name.to_string(),
    }
}

pub(crate) fn enable(name: &str, file: &str, line: u64) -> RlsEnableFact {
    RlsEnableFact {
        location: loc(file, line),
        table_name: name.to_string(),
    }
}

pub(crate) fn policy(table_name: &str, policy_name: &str, file: &str, line: u64) -> PolicyFact {
    PolicyFact {
        location: loc(file, line),
        table_name: table_name.to_string(),
        policy_name: policy_name.to_string(),
    }
}

pub(crate) fn excluded(names: &[&str]) -> ExclusionSet {
    names.iter().collect()
}

/// Run the linter over in-memory sources, returning the outcome and emitted text.
pub(crate) fn lint_sources(
    sources: &[(&str, &str)],
    exclude: &[&str],
    format: OutputFormat,
) -> (Result<LintOutcome, LintError>, String) {
    let options = LinterOptions {
        sources: sources
            .iter()
            .map(|(name, sql)| SqlSource::from_sql(*name, *sql))
            .collect(),
        excluded_tables: excluded(exclude),
        format,
    };
    let mut out = Vec::new();
    let result = run_linter(options, &mut out);
    (result, String::from_utf8(out).expect("output should be UTF-8"))
}

pub(crate) fn lint_sql(sql: &str, exclude: &[&str]) -> (Result<LintOutcome, LintError>, String) {
    lint_sources(&[("test.sql", sql)], exclude, OutputFormat::Json)
}

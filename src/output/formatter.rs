use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::output::report;
use crate::validator::finding::Finding;

/// Output format for emitted findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// Markdown summary table.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Invalid output format: {s}")),
        }
    }
}

/// Order findings by file, line, then table name.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        (&a.location.file, a.location.line, &a.table_name).cmp(&(
            &b.location.file,
            b.location.line,
            &b.table_name,
        ))
    });
}

/// Write findings in the requested format. Writes nothing when empty.
pub fn write_findings(
    out: &mut dyn Write,
    findings: &[Finding],
    format: OutputFormat,
) -> Result<()> {
    if findings.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, findings)?;
            writeln!(out)?;
        }
        OutputFormat::Markdown => {
            out.write_all(report::build_report(findings).as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

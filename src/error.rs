//! Error types for a lint run.

use std::path::PathBuf;

use crate::parser::sql_parser::ParserError;

/// Hard failures that abort a lint run.
///
/// Missing RLS coverage is not an error; it is reported through
/// [`crate::linter::runner::LintOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// No input source was given.
    #[error("no input sources specified")]
    NoSources,

    /// A source could not be read.
    #[error("failed to read SQL: {filename}: {source}")]
    Read {
        /// Name of the unreadable source.
        filename: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source contained SQL the parser rejected.
    #[error("failed to parse SQL: {filename}: {source}")]
    Parse {
        /// Name of the malformed source.
        filename: String,
        /// Parser diagnostic.
        #[source]
        source: ParserError,
    },

    /// A schema directory could not be listed.
    #[error("failed to read schema directory {}: {source}", path.display())]
    SchemaDir {
        /// The directory that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Findings could not be serialized.
    #[error("failed to serialize findings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Findings could not be written to the output stream.
    #[error("failed to write findings: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for lint operations.
pub type Result<T> = std::result::Result<T, LintError>;

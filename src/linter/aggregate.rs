use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{LintError, Result};
use crate::parser::facts::ExtractedFacts;
use crate::parser::sql_parser;

/// Name reported for SQL read from standard input.
pub const STDIN_SOURCE_NAME: &str = "stdin";

/// One named SQL input stream.
pub struct SqlSource<'a> {
    /// Name used in finding locations and error messages.
    pub filename: String,
    /// Where the SQL text is read from.
    pub reader: Box<dyn Read + 'a>,
}

impl<'a> SqlSource<'a> {
    /// Wrap any reader under the given name.
    pub fn new(filename: impl Into<String>, reader: impl Read + 'a) -> Self {
        Self {
            filename: filename.into(),
            reader: Box::new(reader),
        }
    }

    /// A source backed by in-memory SQL text.
    pub fn from_sql(filename: impl Into<String>, sql: &'a str) -> Self {
        Self::new(filename, sql.as_bytes())
    }

    /// Open a file; the path's display form becomes the source name.
    pub fn open(path: &Path) -> Result<SqlSource<'static>> {
        let filename = path.display().to_string();
        let file = File::open(path).map_err(|source| LintError::Read {
            filename: filename.clone(),
            source,
        })?;
        Ok(SqlSource::new(filename, file))
    }

    /// Standard input, named [`STDIN_SOURCE_NAME`].
    pub fn stdin() -> SqlSource<'static> {
        SqlSource::new(STDIN_SOURCE_NAME, std::io::stdin())
    }
}

impl std::fmt::Debug for SqlSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlSource")
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

/// Read and extract every source in order, concatenating their facts.
///
/// The first read or parse failure aborts the whole collection.
pub fn collect_facts(sources: Vec<SqlSource<'_>>) -> Result<ExtractedFacts> {
    let mut all = ExtractedFacts::default();

    for mut input in sources {
        let mut sql = String::new();
        input
            .reader
            .read_to_string(&mut sql)
            .map_err(|source| LintError::Read {
                filename: input.filename.clone(),
                source,
            })?;

        tracing::debug!(file = %input.filename, bytes = sql.len(), "parsing source");

        let facts =
            sql_parser::extract_facts(&input.filename, &sql).map_err(|source| LintError::Parse {
                filename: input.filename.clone(),
                source,
            })?;
        all.extend(facts);
    }

    Ok(all)
}

/// List every `.sql` file directly inside `dir`, sorted by path.
pub fn sql_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| LintError::SchemaDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == "sql"))
        .collect();
    files.sort();
    Ok(files)
}

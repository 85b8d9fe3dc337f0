//! CLI entry point for `rlscheck`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rlscheck::linter::aggregate::{self, SqlSource};
use rlscheck::{run_linter, ExclusionSet, LintError, LinterOptions, OutputFormat};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rlscheck",
    version,
    about = "Flag PostgreSQL tables without row-level security or RLS policies"
)]
struct Cli {
    /// Input SQL files
    #[arg(required_unless_present_any = ["stdin", "schema_dir"], conflicts_with = "stdin")]
    input: Vec<PathBuf>,

    /// Read SQL from standard input instead of files
    #[arg(long)]
    stdin: bool,

    /// Process all .sql files in directory
    #[arg(long, conflicts_with = "stdin")]
    schema_dir: Option<PathBuf>,

    /// Tables to skip, comma separated
    #[arg(long, env = "RLSCHECK_EXCLUDE", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Output format for findings
    #[arg(long, default_value = "json")]
    format: OutputFormat,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether the run passed.
fn run(cli: Cli) -> Result<bool, LintError> {
    let sources = if cli.stdin {
        vec![SqlSource::stdin()]
    } else {
        let mut paths = cli.input;
        if let Some(dir) = &cli.schema_dir {
            paths.extend(aggregate::sql_files_in_dir(dir)?);
        }
        paths
            .iter()
            .map(|path| SqlSource::open(path))
            .collect::<Result<Vec<_>, _>>()?
    };

    let options = LinterOptions {
        sources,
        excluded_tables: cli.exclude.iter().collect::<ExclusionSet>(),
        format: cli.format,
    };

    let stdout = std::io::stdout();
    let outcome = run_linter(options, &mut stdout.lock())?;
    Ok(outcome.passed())
}

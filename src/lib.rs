//! dedup - content-hash duplicate file finder
//!
//! Walks a directory tree breadth-first under an [`ExplorationPolicy`],
//! hashes every file with SHA-256 and reports the groups of files whose
//! contents are byte-identical. Files are only read, never changed.
//!
//! ```no_run
//! use dedup::scanner::ExplorationPolicy;
//!
//! let groups = dedup::find("/srv/share", ExplorationPolicy::depth(3).unwrap())?;
//! println!("{} sets of duplicates", groups.len());
//! # Ok::<(), dedup::duplicates::FinderError>(())
//! ```

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, FindArgs, OutputFormat};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{CsvOutput, JsonOutput, TextOutput};
use crate::progress::Progress;

pub use crate::duplicates::{find, DuplicateGroups, FinderError};
pub use crate::scanner::ExplorationPolicy;

/// Run the application for parsed command-line arguments.
///
/// Initializes logging, loads configuration and dispatches the subcommand.
///
/// # Errors
///
/// Returns an error if the search or writing the report fails.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    let config = Config::load();

    match cli.command {
        Commands::Find(ref args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_find(args, &config, cli.quiet, &mut out)
        }
    }
}

/// Run the `find` subcommand, writing the report to `out`.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved, the
/// search aborts, or the report cannot be written.
pub fn run_find<W: Write>(
    args: &FindArgs,
    config: &Config,
    quiet: bool,
    out: &mut W,
) -> Result<ExitCode> {
    let root = args
        .resolve_path()
        .context("Failed to determine the current directory")?;
    let output = args.output.unwrap_or(config.output);
    let chunk_size = args.chunk_size.unwrap_or(config.chunk_size);

    let mut finder_config = FinderConfig::default()
        .with_policy(args.policy())
        .with_chunk_size(chunk_size);

    let show_progress =
        !quiet && !args.no_progress && config.progress && output == OutputFormat::Text;
    if show_progress {
        finder_config = finder_config.with_progress_callback(Arc::new(Progress::new(false)));
    }

    let finder = DuplicateFinder::new(finder_config);
    let (groups, summary) = finder.find_duplicates(&root)?;

    match output {
        OutputFormat::Text => TextOutput::new(&groups)
            .write_to(out)
            .context("Failed to write report")?,
        OutputFormat::Json => JsonOutput::new(&groups, &summary, ExitCode::Success)
            .write_to(out, true)
            .context("Failed to write JSON report")?,
        OutputFormat::Csv => CsvOutput::new(&groups)
            .write_to(&mut *out)
            .context("Failed to write CSV report")?,
    }

    Ok(ExitCode::Success)
}

#![forbid(unsafe_code)]

//! Command dispatch
//!
//! Maps each parsed command to one extraction plus one presentation step.
//! Every failure is reported once and converted to a non-zero exit code;
//! no condition is retried.

use crate::cli::args::{Cli, Command};
use crate::config::{SourceFile, SourceLocator, TYPES_PATH_ENV};
use crate::error::QueryError;
use crate::extract::{self, enums, tables};
use crate::output::HumanFormatter;
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Exit codes for the dispatcher
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

/// Run one query to completion, returning the process exit code
pub fn run(cli: &Cli, base_dir: &Path) -> i32 {
    match run_inner(cli, base_dir) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_error(cli, &err);
            EXIT_ERROR
        }
    }
}

fn run_inner(cli: &Cli, base_dir: &Path) -> Result<(), QueryError> {
    let locator = SourceLocator::from_env(base_dir);
    let source = locator.read()?;
    let formatter = HumanFormatter::new(cli.color.for_stdout());

    if source.fallback.is_some() {
        note_fallback(cli, &source)?;
    }

    match &cli.command {
        Command::Table { name } => {
            let schema = tables::extract(&source.content, name)
                .ok_or_else(|| QueryError::TableNotFound(name.clone()))?;
            formatter.write_table_schema(name, &schema)?;
        }
        Command::Tables => {
            let names = tables::list_all(&source.content);
            formatter.write_name_list("Available Tables", &names)?;
        }
        Command::Enum { name } => {
            let definition = enums::extract(&source.content, name)
                .ok_or_else(|| QueryError::EnumNotFound(name.clone()))?;
            formatter.write_enum(name, &definition)?;
        }
        Command::Enums => {
            let names = enums::list_all(&source.content);
            formatter.write_name_list("Available Enums", &names)?;
        }
        Command::Search { keyword } => {
            // An empty result set is informational, not a failure.
            let results = extract::search(&source.content, keyword);
            formatter.write_search_results(keyword, &results)?;
        }
    }

    Ok(())
}

/// Tells the user the file came from a fallback location and how to pin it
fn note_fallback(cli: &Cli, source: &SourceFile) -> Result<(), QueryError> {
    let Some(fallback) = &source.fallback else {
        return Ok(());
    };

    let mut stdout = StandardStream::stdout(cli.color.for_stdout());
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(stdout, "Note: Found database.types.ts at {}", fallback)?;
    writeln!(
        stdout,
        "Set {}={} in your env to skip this lookup.",
        TYPES_PATH_ENV, fallback
    )?;
    stdout.reset()?;
    Ok(())
}

/// Prints the error to stderr, then any corrective hint to stdout
fn report_error(cli: &Cli, err: &QueryError) {
    let mut stderr = StandardStream::stderr(cli.color.for_stderr());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(stderr, "Error: {}", err);
    let _ = stderr.reset();

    if let Some(hint) = err.hint() {
        let mut stdout = StandardStream::stdout(cli.color.for_stdout());
        let _ = writeln!(stdout, "\n{}", hint);
    }
}

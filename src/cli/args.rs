#![forbid(unsafe_code)]

//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;

const AFTER_HELP: &str = "\
Examples:
  schemaq table students          Show the students table schema
  schemaq enum user_role          Show the user_role enum values
  schemaq search center           Find all tables/enums with \"center\"

Configuration:
  DB_TYPES_PATH                   Override the default input path (types/database.types.ts)";

/// Query table schemas and enums from generated database type declarations
#[derive(Debug, Parser)]
#[command(
    name = "schemaq",
    version,
    about,
    after_help = AFTER_HELP,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the schema for a single table
    Table {
        /// Name of the table to show
        name: String,
    },
    /// List all table names
    Tables,
    /// Show the values of a single enum
    Enum {
        /// Name of the enum to show
        name: String,
    },
    /// List all enum names
    Enums,
    /// Search table and enum names for a keyword
    Search {
        /// Case-insensitive substring to match against names
        keyword: String,
    },
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Maps to the termcolor choice for stdout, downgrading Auto when the
    /// stream is not a terminal
    pub fn for_stdout(self) -> termcolor::ColorChoice {
        self.for_stream(std::io::stdout().is_terminal())
    }

    /// Maps to the termcolor choice for stderr
    pub fn for_stderr(self) -> termcolor::ColorChoice {
        self.for_stream(std::io::stderr().is_terminal())
    }

    fn for_stream(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => {
                if is_terminal {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

#![forbid(unsafe_code)]

use clap::Parser;
use clap::error::ErrorKind;
use schemaq::cli::{self, Cli};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not failures; everything else
            // (unknown command, missing argument) exits non-zero.
            let code = match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    let base_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    process::exit(cli::run(&cli, &base_dir));
}

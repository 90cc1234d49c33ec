#![forbid(unsafe_code)]

//! Resolution of the database.types.ts path
//!
//! The primary location is `types/database.types.ts` relative to the working
//! directory, overridable through the `DB_TYPES_PATH` environment variable.
//! When the primary location is missing, a fixed list of conventional
//! locations is tried in order before giving up.

use crate::error::QueryError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the generated declarations, relative to the working
/// directory
pub const DEFAULT_TYPES_PATH: &str = "types/database.types.ts";

/// Environment variable overriding [`DEFAULT_TYPES_PATH`]
pub const TYPES_PATH_ENV: &str = "DB_TYPES_PATH";

/// Conventional locations tried, in order, when the configured path does
/// not exist
pub const ALTERNATIVE_PATHS: &[&str] = &[
    "types/database.types.ts",
    "src/types/database.types.ts",
    "lib/database.types.ts",
    "src/lib/database.types.ts",
];

/// Resolves and reads the declaration file for one invocation
#[derive(Debug, Clone)]
pub struct SourceLocator {
    base_dir: PathBuf,
    relative_path: String,
}

/// A successfully located and fully read declaration file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path the content was read from
    pub path: PathBuf,
    /// Set when the content came from a fallback location rather than the
    /// configured path; holds the relative path that worked.
    pub fallback: Option<String>,
    /// Full file contents
    pub content: String,
}

impl SourceLocator {
    /// Creates a locator for the given base directory and relative path
    pub fn new(base_dir: impl Into<PathBuf>, relative_path: impl Into<String>) -> Self {
        SourceLocator {
            base_dir: base_dir.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Creates a locator from the `DB_TYPES_PATH` environment variable,
    /// falling back to [`DEFAULT_TYPES_PATH`] when it is unset
    pub fn from_env(base_dir: impl Into<PathBuf>) -> Self {
        let relative_path =
            env::var(TYPES_PATH_ENV).unwrap_or_else(|_| DEFAULT_TYPES_PATH.to_string());
        SourceLocator::new(base_dir, relative_path)
    }

    /// The path checked before any fallback location
    pub fn primary_path(&self) -> PathBuf {
        self.base_dir.join(&self.relative_path)
    }

    /// Reads the declaration file, trying the fallback locations when the
    /// configured path does not exist
    pub fn read(&self) -> Result<SourceFile, QueryError> {
        let primary = self.primary_path();
        if primary.exists() {
            let content = read_file(&primary)?;
            return Ok(SourceFile {
                path: primary,
                fallback: None,
                content,
            });
        }

        for alt in ALTERNATIVE_PATHS {
            let candidate = self.base_dir.join(alt);
            if candidate.exists() {
                let content = read_file(&candidate)?;
                return Ok(SourceFile {
                    path: candidate,
                    fallback: Some((*alt).to_string()),
                    content,
                });
            }
        }

        Err(QueryError::SourceNotFound {
            primary,
            searched: ALTERNATIVE_PATHS.iter().map(|s| (*s).to_string()).collect(),
        })
    }
}

fn read_file(path: &Path) -> Result<String, QueryError> {
    fs::read_to_string(path).map_err(|source| QueryError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

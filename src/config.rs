//! Locating and reading the generated declaration file

pub mod source_path;

pub use source_path::{
    ALTERNATIVE_PATHS, DEFAULT_TYPES_PATH, SourceFile, SourceLocator, TYPES_PATH_ENV,
};

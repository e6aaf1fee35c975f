// schismrs-namelist/src/error.rs

//! Error types for writing namelist files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for namelist operations.
pub type Result<T> = std::result::Result<T, NamelistError>;

/// Errors that can occur while writing Fortran namelists.
#[derive(Error, Debug)]
pub enum NamelistError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),
}

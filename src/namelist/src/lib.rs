// schismrs-namelist/src/lib.rs

//! Typed Fortran 90 namelist generation.
//!
//! This library provides:
//! - A Fortran value model and its text formatting ([`FortranValue`])
//! - Ordered namelist groups and files, and their writers
//! - Constrained value types and a schema framework for declaring parameter
//!   groups that are built, deep-merged and validated from nested key-value
//!   data ([`schema`])
//!
//! Output is one-directional: typed data is rendered to namelist text, never
//! parsed back.

pub mod error;
pub mod fortran_types;
pub mod namelist;
pub mod schema;

use fs_err::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use error::{NamelistError, Result};
pub use fortran_types::{format_real, FormatOptions, FortranValue, ToFortran};
pub use namelist::{Namelist, NamelistGroup, ToNamelist, ToNamelistGroup};

/// Write a namelist to a file.
///
/// # Examples
///
/// ```no_run
/// # use schismrs_namelist::Namelist;
/// # fn main() -> Result<(), schismrs_namelist::NamelistError> {
/// let mut nml = Namelist::new();
/// nml.insert_group("core")
///    .insert("ipre", 0i32)
///    .insert("dt", 150.0f64);
///
/// schismrs_namelist::write(&nml, "param.nml")?;
/// # Ok(())
/// # }
/// ```
pub fn write<P: AsRef<Path>>(nml: &Namelist, path: P) -> Result<()> {
    write_with_options(nml, path, &WriteOptions::default())
}

/// Write a namelist to a file with specific options.
pub fn write_with_options<P: AsRef<Path>>(
    nml: &Namelist,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();

    if !options.force && path.exists() {
        return Err(NamelistError::FileAlreadyExists(path.to_path_buf()));
    }

    let mut file = File::create(path)?;
    write_to_writer(nml, &mut file, options)
}

/// Write a namelist to any writer implementing the Write trait.
pub fn write_to_writer<W: Write>(
    nml: &Namelist,
    writer: &mut W,
    options: &WriteOptions,
) -> Result<()> {
    let formatted = nml.to_fortran_string(options);
    writer.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Render a typed namelist file into `dir` under its own file name.
pub fn write_into<T: ToNamelist + ?Sized>(
    item: &T,
    dir: &Path,
    options: &WriteOptions,
) -> Result<PathBuf> {
    let path = dir.join(item.file_name());
    write_with_options(&item.to_namelist(), &path, options)?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Options for controlling namelist output formatting.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Overwrite existing files
    pub force: bool,
    /// Column at which array assignments wrap (0 disables wrapping)
    pub column_width: usize,
    /// Indentation of assignments inside a group
    pub indent: String,
    /// Whether to add commas at the end of lines
    pub end_comma: bool,
    pub uppercase_groups: bool,
    pub uppercase_variables: bool,
    /// Fixed decimals for reals; shortest round-trip when `None`
    pub float_precision: Option<usize>,
    /// Starting index for arrays (1 by Fortran convention)
    pub default_start_index: i32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            force: false,
            column_width: 72,
            indent: "    ".to_string(),
            end_comma: false,
            uppercase_groups: true,
            uppercase_variables: false,
            float_precision: None,
            default_start_index: 1,
        }
    }
}

impl WriteOptions {
    pub(crate) fn format_options(&self) -> FormatOptions {
        FormatOptions {
            uppercase: self.uppercase_variables,
            float_precision: self.float_precision,
        }
    }
}

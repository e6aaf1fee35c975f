// schismrs/src/sources.rs

//! Prepared forcing products handed to the namelists by reference.

use std::path::{Path, PathBuf};

/// A prepared input product the model reads from the run directory.
pub trait DataSource {
    /// Name the model refers to the product by.
    fn name(&self) -> String;
}

impl DataSource for Path {
    /// File name of the product; the full path if it has none.
    fn name(&self) -> String {
        match self.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.to_string_lossy().into_owned(),
        }
    }
}

impl DataSource for PathBuf {
    fn name(&self) -> String {
        self.as_path().name()
    }
}

impl DataSource for str {
    fn name(&self) -> String {
        self.to_string()
    }
}

impl DataSource for String {
    fn name(&self) -> String {
        self.clone()
    }
}

/// Products to wire into a SCHISM configuration.
#[derive(Default, Clone, Copy)]
pub struct DataSources<'a> {
    /// Boundary wave spectra read by WWM.
    pub wave: Option<&'a dyn DataSource>,
    /// Atmospheric forcing in the sflux layout.
    pub atmos: Option<&'a dyn DataSource>,
}

impl<'a> DataSources<'a> {
    pub fn is_empty(&self) -> bool {
        self.wave.is_none() && self.atmos.is_none()
    }
}

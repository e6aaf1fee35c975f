// schismrs-namelist/src/fortran_types/mod.rs

//! Fortran value model and its text formatting.

mod conversion;
mod formatting;
mod value;

pub use conversion::ToFortran;
pub use formatting::{format_real, FormatOptions};
pub use value::FortranValue;

// schismrs-namelist/src/fortran_types/value.rs

//! The value model of namelist assignments.

use std::fmt;

/// A value as it appears on the right-hand side of a namelist assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum FortranValue {
    Integer(i64),
    Real(f64),
    Logical(bool),
    Character(String),
    /// One-dimensional array, written with an explicit index range.
    Array(Vec<FortranValue>),
}

impl fmt::Display for FortranValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fortran_string(false))
    }
}

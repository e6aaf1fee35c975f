// schismrs-namelist/src/fortran_types/formatting.rs

//! Formatting options and output logic for Fortran values.

use super::value::FortranValue;

/// Formatting options for Fortran value output.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Whether to use uppercase for logical values
    pub uppercase: bool,
    /// Fixed number of decimals for reals; shortest round-trip when `None`
    pub float_precision: Option<usize>,
}

/// Format a real so that it always reads back as a real.
///
/// Without a precision the shortest round-trip representation is used and
/// `.0` is appended when it would otherwise look like an integer.
pub fn format_real(value: f64, precision: Option<usize>) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "+inf" } else { "-inf" }.to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    match precision {
        Some(precision) => format!("{:.precision$}", value, precision = precision),
        None => {
            let s = value.to_string();
            if s.contains('.') || s.contains('e') || s.contains('E') {
                s
            } else {
                format!("{}.0", s)
            }
        }
    }
}

impl FortranValue {
    /// Format this value as it would appear in a Fortran namelist.
    pub fn to_fortran_string(&self, uppercase: bool) -> String {
        let options = FormatOptions {
            uppercase,
            ..Default::default()
        };
        self.to_fortran_string_with_options(&options)
    }

    pub fn to_fortran_string_with_options(&self, options: &FormatOptions) -> String {
        match self {
            FortranValue::Integer(i) => i.to_string(),
            FortranValue::Real(f) => format_real(*f, options.float_precision),
            FortranValue::Logical(b) => format_logical(*b, options),
            FortranValue::Character(s) => format_string(s),
            FortranValue::Array(values) => values
                .iter()
                .map(|v| v.to_fortran_string_with_options(options))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn format_logical(value: bool, options: &FormatOptions) -> String {
    let base = if value { ".true." } else { ".false." };
    if options.uppercase {
        base.to_uppercase()
    } else {
        base.to_string()
    }
}

// Quotes are escaped by doubling them.
fn format_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

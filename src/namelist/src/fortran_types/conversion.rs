// schismrs-namelist/src/fortran_types/conversion.rs

//! Conversions from Rust values into FortranValue.

use super::value::FortranValue;

impl From<i32> for FortranValue {
    fn from(value: i32) -> Self {
        FortranValue::Integer(value as i64)
    }
}

impl From<i64> for FortranValue {
    fn from(value: i64) -> Self {
        FortranValue::Integer(value)
    }
}

impl From<u32> for FortranValue {
    fn from(value: u32) -> Self {
        FortranValue::Integer(value as i64)
    }
}

impl From<f64> for FortranValue {
    fn from(value: f64) -> Self {
        FortranValue::Real(value)
    }
}

impl From<bool> for FortranValue {
    fn from(value: bool) -> Self {
        FortranValue::Logical(value)
    }
}

impl From<String> for FortranValue {
    fn from(value: String) -> Self {
        FortranValue::Character(value)
    }
}

impl From<&str> for FortranValue {
    fn from(value: &str) -> Self {
        FortranValue::Character(value.to_string())
    }
}

impl From<Vec<FortranValue>> for FortranValue {
    fn from(value: Vec<FortranValue>) -> Self {
        FortranValue::Array(value)
    }
}

/// Conversion of a schema field into the value written for it.
///
/// Returns `None` when the field is absent and must not be written.
pub trait ToFortran {
    fn to_fortran(&self) -> Option<FortranValue>;
}

macro_rules! to_fortran_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToFortran for $ty {
                fn to_fortran(&self) -> Option<FortranValue> {
                    Some(FortranValue::from(self.clone()))
                }
            }
        )*
    };
}

to_fortran_via_from!(i32, i64, u32, f64, bool, String);

impl<T: ToFortran> ToFortran for Option<T> {
    fn to_fortran(&self) -> Option<FortranValue> {
        self.as_ref().and_then(ToFortran::to_fortran)
    }
}

impl<T: ToFortran> ToFortran for Vec<T> {
    fn to_fortran(&self) -> Option<FortranValue> {
        Some(FortranValue::Array(
            self.iter().filter_map(ToFortran::to_fortran).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_not_written() {
        let absent: Option<f64> = None;
        assert_eq!(absent.to_fortran(), None);
        assert_eq!(Some(2i32).to_fortran(), Some(FortranValue::Integer(2)));
    }

    #[test]
    fn test_vectors_become_arrays() {
        let values = vec![1.0f64, 2.5];
        assert_eq!(
            values.to_fortran(),
            Some(FortranValue::Array(vec![
                FortranValue::Real(1.0),
                FortranValue::Real(2.5)
            ]))
        );
    }
}

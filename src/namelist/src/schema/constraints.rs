// schismrs-namelist/src/schema/constraints.rs

//! Declarative value constraints and the constrained newtypes built on them.

use super::violation::{FieldPath, Violation, Violations};
use crate::fortran_types::{format_real, FortranValue, ToFortran};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A domain restriction on a value.
///
/// Numeric bounds apply to integers and reals alike. `OneOfStr` compares
/// case-insensitively. `MaxLen` counts characters for strings and elements
/// for sequences. A constraint that does not apply to a value's kind is
/// satisfied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Gt(f64),
    Ge(f64),
    Lt(f64),
    Le(f64),
    OneOf(&'static [i64]),
    OneOfStr(&'static [&'static str]),
    MaxLen(usize),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Gt(bound) => write!(f, "> {}", bound),
            Constraint::Ge(bound) => write!(f, ">= {}", bound),
            Constraint::Lt(bound) => write!(f, "< {}", bound),
            Constraint::Le(bound) => write!(f, "<= {}", bound),
            Constraint::OneOf(values) => write!(f, "one of {:?}", values),
            Constraint::OneOfStr(values) => write!(f, "one of {:?}", values),
            Constraint::MaxLen(max) => write!(f, "of length at most {}", max),
        }
    }
}

impl Constraint {
    pub fn check_number(&self, value: f64) -> Result<(), ConstraintViolation> {
        let ok = match *self {
            Constraint::Gt(bound) => value > bound,
            Constraint::Ge(bound) => value >= bound,
            Constraint::Lt(bound) => value < bound,
            Constraint::Le(bound) => value <= bound,
            Constraint::OneOf(values) => value.fract() == 0.0 && values.contains(&(value as i64)),
            Constraint::OneOfStr(_) | Constraint::MaxLen(_) => true,
        };
        self.verdict(ok, || value.to_string())
    }

    pub fn check_str(&self, value: &str) -> Result<(), ConstraintViolation> {
        let ok = match *self {
            Constraint::OneOfStr(values) => values.iter().any(|v| v.eq_ignore_ascii_case(value)),
            Constraint::MaxLen(max) => value.chars().count() <= max,
            _ => true,
        };
        self.verdict(ok, || format!("{:?}", value))
    }

    fn verdict(
        &self,
        ok: bool,
        describe: impl FnOnce() -> String,
    ) -> Result<(), ConstraintViolation> {
        if ok {
            Ok(())
        } else {
            Err(ConstraintViolation {
                value: describe(),
                constraint: *self,
            })
        }
    }
}

/// One value breaking one constraint.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("value {value} must be {constraint}")]
pub struct ConstraintViolation {
    pub value: String,
    pub constraint: Constraint,
}

/// Values that declarative constraints can be checked against.
pub trait Constrained {
    fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation>;

    /// Check and record any failure at `path`.
    fn check_at(&self, constraint: &Constraint, path: &FieldPath, report: &mut Violations) {
        if let Err(violation) = self.check(constraint) {
            report.push(Violation::constraint(path.clone(), violation));
        }
    }
}

/// Check every constraint in `constraints` against `value`.
pub fn check_all<T: Constrained + ?Sized>(
    value: &T,
    constraints: &[Constraint],
    path: &FieldPath,
    report: &mut Violations,
) {
    for constraint in constraints {
        value.check_at(constraint, path, report);
    }
}

macro_rules! constrained_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Constrained for $ty {
                fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
                    constraint.check_number(*self as f64)
                }
            }
        )*
    };
}

constrained_number!(i32, i64, u32, usize, f64);

impl Constrained for bool {
    fn check(&self, _constraint: &Constraint) -> Result<(), ConstraintViolation> {
        Ok(())
    }
}

impl Constrained for String {
    fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
        constraint.check_str(self)
    }
}

impl<T: Constrained> Constrained for Option<T> {
    fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
        match self {
            Some(value) => value.check(constraint),
            None => Ok(()),
        }
    }

    fn check_at(&self, constraint: &Constraint, path: &FieldPath, report: &mut Violations) {
        if let Some(value) = self {
            value.check_at(constraint, path, report);
        }
    }
}

impl<T: Constrained> Constrained for Vec<T> {
    fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
        match constraint {
            Constraint::MaxLen(_) => check_len(self.len(), constraint),
            _ => self.iter().try_for_each(|item| item.check(constraint)),
        }
    }

    fn check_at(&self, constraint: &Constraint, path: &FieldPath, report: &mut Violations) {
        match constraint {
            Constraint::MaxLen(_) => {
                if let Err(violation) = check_len(self.len(), constraint) {
                    report.push(Violation::constraint(path.clone(), violation));
                }
            }
            _ => {
                for (i, item) in self.iter().enumerate() {
                    item.check_at(constraint, &path.index(i), report);
                }
            }
        }
    }
}

fn check_len(len: usize, constraint: &Constraint) -> Result<(), ConstraintViolation> {
    match *constraint {
        Constraint::MaxLen(max) if len > max => Err(ConstraintViolation {
            value: format!("with {} elements", len),
            constraint: *constraint,
        }),
        _ => Ok(()),
    }
}

// ============================================================================
// Constrained newtypes
// ============================================================================

macro_rules! constrained_real {
    ($(#[$meta:meta])* $name:ident, [$($constraint:expr),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
        #[serde(try_from = "f64")]
        pub struct $name(f64);

        impl $name {
            pub const CONSTRAINTS: &'static [Constraint] = &[$($constraint),+];

            pub fn new(value: f64) -> Result<Self, ConstraintViolation> {
                for constraint in Self::CONSTRAINTS {
                    constraint.check_number(value)?;
                }
                Ok(Self(value))
            }

            pub fn get(self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $name {
            type Error = ConstraintViolation;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", format_real(self.0, None))
            }
        }

        impl Constrained for $name {
            fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
                self.0.check(constraint)
            }
        }

        impl ToFortran for $name {
            fn to_fortran(&self) -> Option<FortranValue> {
                Some(FortranValue::Real(self.0))
            }
        }
    };
}

constrained_real!(
    /// A real strictly greater than zero.
    PositiveF64,
    [Constraint::Gt(0.0)]
);

constrained_real!(
    /// A real greater than or equal to zero.
    NonNegativeF64,
    [Constraint::Ge(0.0)]
);

constrained_real!(
    /// A direction in degrees within `[-360, 360]`.
    Direction,
    [Constraint::Ge(-360.0), Constraint::Le(360.0)]
);

constrained_real!(
    /// A directional spread in degrees within `[0, 360]`.
    Spread,
    [Constraint::Ge(0.0), Constraint::Le(360.0)]
);

/// A one-based sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "i64")]
pub struct SeqNumber(u32);

impl SeqNumber {
    pub const FIRST: SeqNumber = SeqNumber(1);

    pub const CONSTRAINTS: &'static [Constraint] =
        &[Constraint::Ge(1.0), Constraint::Le(u32::MAX as f64)];

    pub fn new(value: i64) -> Result<Self, ConstraintViolation> {
        for constraint in Self::CONSTRAINTS {
            constraint.check_number(value as f64)?;
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SeqNumber {
    type Error = ConstraintViolation;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SeqNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Constrained for SeqNumber {
    fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
        self.0.check(constraint)
    }
}

impl ToFortran for SeqNumber {
    fn to_fortran(&self) -> Option<FortranValue> {
        Some(FortranValue::from(self.0))
    }
}

/// A string of at most `N` characters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct BoundedString<const N: usize>(String);

impl<const N: usize> BoundedString<N> {
    pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        Constraint::MaxLen(N).check_str(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> TryFrom<String> for BoundedString<N> {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const N: usize> Constrained for BoundedString<N> {
    fn check(&self, constraint: &Constraint) -> Result<(), ConstraintViolation> {
        self.0.check(constraint)
    }
}

impl<const N: usize> ToFortran for BoundedString<N> {
    fn to_fortran(&self) -> Option<FortranValue> {
        Some(FortranValue::Character(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_bounds_are_inclusive() {
        assert!(Direction::new(360.0).is_ok());
        assert!(Direction::new(-360.0).is_ok());
        let err = Direction::new(360.0001).unwrap_err();
        assert_eq!(err.constraint, Constraint::Le(360.0));
        assert!(Direction::new(-360.5).is_err());
    }

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        let err = PositiveF64::new(0.0).unwrap_err();
        assert_eq!(err.to_string(), "value 0 must be > 0");
        assert!(PositiveF64::new(f64::NAN).is_err());
        assert_eq!(PositiveF64::new(1.5).unwrap().get(), 1.5);
        assert!(NonNegativeF64::new(0.0).is_ok());
    }

    #[test]
    fn test_spread_and_seq_number() {
        assert!(Spread::new(0.0).is_ok());
        assert!(Spread::new(-1.0).is_err());
        assert!(SeqNumber::new(0).is_err());
        assert_eq!(SeqNumber::new(3).unwrap().get(), 3);
    }

    #[test]
    fn test_bounded_string_counts_characters() {
        assert!(BoundedString::<4>::new("ab\u{e9}d").is_ok());
        let err = BoundedString::<4>::new("abcde").unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxLen(4));
    }

    #[test]
    fn test_newtypes_deserialize_through_constructor() {
        let ok: Direction = serde_json::from_value(serde_json::json!(90)).unwrap();
        assert_eq!(ok.get(), 90.0);
        let err = serde_json::from_value::<Direction>(serde_json::json!(400.0)).unwrap_err();
        assert!(err.to_string().contains("must be <= 360"));
    }

    #[test]
    fn test_declarative_constraints() {
        assert!(2i32.check(&Constraint::OneOf(&[-1, 0, 1, 2])).is_ok());
        assert!(5i32.check(&Constraint::OneOf(&[-1, 0, 1, 2])).is_err());
        assert!(2.5f64.check(&Constraint::OneOf(&[2, 3])).is_err());
        assert!("Min"
            .to_string()
            .check(&Constraint::OneOfStr(&["SEC", "MIN", "HR"]))
            .is_ok());
        assert!(None::<f64>.check(&Constraint::Gt(0.0)).is_ok());
        assert!(Some(-1.0f64).check(&Constraint::Gt(0.0)).is_err());
    }

    #[test]
    fn test_sequences_check_elements_and_length() {
        let mut report = Violations::new();
        let values = vec![1.0f64, -2.0, 3.0, -4.0];
        let path = FieldPath::root().join("hs");
        check_all(
            &values,
            &[Constraint::Ge(0.0), Constraint::MaxLen(3)],
            &path,
            &mut report,
        );
        let paths: Vec<&str> = report.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["hs[1]", "hs[3]", "hs"]);
    }
}

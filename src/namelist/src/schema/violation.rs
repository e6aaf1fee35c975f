// schismrs-namelist/src/schema/violation.rs

//! Field paths and the violations collected while building, merging and
//! validating a schema tree.

use super::constraints::ConstraintViolation;
use std::fmt;
use thiserror::Error;

/// Dotted location of a field inside a tree, e.g. `param.opt.nws` or
/// `boundspec.data.hs[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn join(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViolationKind {
    #[error("{0}")]
    Constraint(ConstraintViolation),
    #[error("missing required field")]
    MissingField,
    #[error("unknown field")]
    UnknownField,
    #[error("invalid type: {0}")]
    InvalidType(String),
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
    #[error("`{field}` has {actual} entries, expected {expected} to match `{anchor}`")]
    LengthMismatch {
        field: String,
        anchor: String,
        expected: usize,
        actual: usize,
    },
    #[error("{0}")]
    Rule(String),
}

/// One problem found at one location.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: {kind}")]
pub struct Violation {
    pub path: FieldPath,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind) -> Self {
        Self { path, kind }
    }

    pub fn constraint(path: FieldPath, violation: ConstraintViolation) -> Self {
        Self::new(path, ViolationKind::Constraint(violation))
    }

    pub fn rule(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, ViolationKind::Rule(message.into()))
    }
}

/// Collector for every violation found in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(violation: Violation) -> Self {
        Self(vec![violation])
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn extend(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// `Ok(value)` when nothing was collected.
    pub fn into_result<T>(self, value: T) -> Result<T, Violations> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.0,
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Every violation found while building or updating a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any violation was reported at exactly `path`.
    pub fn mentions(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path.as_str() == path)
    }
}

impl std::error::Error for ValidationError {}

impl From<Violations> for ValidationError {
    fn from(violations: Violations) -> Self {
        violations.into_error()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{} validation error{}",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

/// Report every sequence in `fields` whose length differs from the anchor.
///
/// Fields given as `None` are absent and not compared.
pub fn require_equal_lengths(
    path: &FieldPath,
    anchor: (&str, usize),
    fields: &[(&str, Option<usize>)],
    report: &mut Violations,
) {
    let (anchor_name, expected) = anchor;
    for (field, actual) in fields {
        if let Some(actual) = actual {
            if *actual != expected {
                report.push(Violation::new(
                    path.join(field),
                    ViolationKind::LengthMismatch {
                        field: field.to_string(),
                        anchor: anchor_name.to_string(),
                        expected,
                        actual: *actual,
                    },
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_paths() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "<root>");
        let nested = root.join("param").join("opt").join("nws");
        assert_eq!(nested.as_str(), "param.opt.nws");
        assert_eq!(root.join("hs").index(2).as_str(), "hs[2]");
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let mut report = Violations::new();
        report.push(Violation::new(
            FieldPath::root().join("a"),
            ViolationKind::MissingField,
        ));
        report.push(Violation::new(
            FieldPath::root().join("b"),
            ViolationKind::UnknownField,
        ));
        let error = report.into_result(()).unwrap_err().into_error();
        assert_eq!(
            error.to_string(),
            "2 validation errors\n  - a: missing required field\n  - b: unknown field"
        );
        assert!(error.mentions("a"));
        assert!(!error.mentions("c"));
    }

    #[test]
    fn test_equal_lengths_reports_offender_and_expected_length() {
        let mut report = Violations::new();
        require_equal_lengths(
            &FieldPath::root(),
            ("dist", 3),
            &[("hs", Some(2)), ("per", Some(3)), ("seq", None)],
            &mut report,
        );
        assert_eq!(report.len(), 1);
        let violation = report.iter().next().unwrap();
        assert_eq!(violation.path.as_str(), "hs");
        assert_eq!(
            violation.kind.to_string(),
            "`hs` has 2 entries, expected 3 to match `dist`"
        );
    }
}

// schismrs-namelist/src/schema/node.rs

//! Construction, deep merge and validation of typed trees from nested
//! key-value data.

use super::constraints::{BoundedString, Direction, NonNegativeF64, PositiveF64, SeqNumber, Spread};
use super::violation::{FieldPath, ValidationError, Violation, ViolationKind, Violations};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Key selecting the variant of a tagged union.
pub const TAG_KEY: &str = "model_type";

/// A type that can be built from, and updated by, nested key-value data.
///
/// `from_value` and `merge` only check structure and types. Constraints and
/// group rules are checked by `validate`, which always runs over the whole
/// tree after construction or merge.
pub trait Node: Sized {
    fn from_value(value: Value, path: &FieldPath) -> Result<Self, Violations>;

    fn merge(&mut self, value: Value, path: &FieldPath) -> Result<(), Violations>;

    fn validate(&self, _path: &FieldPath, _report: &mut Violations) {}

    /// Value used when the key is missing. `None` makes the key required.
    fn absent() -> Option<Self> {
        None
    }
}

/// Hooks for rules that involve more than one field of a group.
pub trait GroupRules {
    /// Fill values derived from other fields. Runs after construction and
    /// after every merge.
    fn fill_defaults(&mut self) {}

    fn check_rules(&self, _path: &FieldPath, _report: &mut Violations) {}
}

/// Build and validate a tree.
pub fn build<T: Node>(value: Value) -> Result<T, ValidationError> {
    let root = FieldPath::root();
    let node = T::from_value(value, &root)?;
    validate(&node)?;
    Ok(node)
}

/// Validate a whole tree, collecting every violation.
pub fn validate<T: Node>(node: &T) -> Result<(), ValidationError> {
    let mut report = Violations::new();
    node.validate(&FieldPath::root(), &mut report);
    report.into_result(()).map_err(ValidationError::from)
}

/// Merge `overrides` into a copy of `node` and validate the copy.
///
/// `node` itself is never touched; callers commit the returned tree.
pub fn merged<T: Node + Clone>(node: &T, overrides: Value) -> Result<T, ValidationError> {
    let mut candidate = node.clone();
    candidate.merge(overrides, &FieldPath::root())?;
    validate(&candidate)?;
    Ok(candidate)
}

// ============================================================================
// Helpers used by the schema macros
// ============================================================================

pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

pub fn deserialize_leaf<T: DeserializeOwned>(value: Value, path: &FieldPath) -> Result<T, Violations> {
    serde_json::from_value(value).map_err(|e| {
        Violations::single(Violation::new(
            path.clone(),
            ViolationKind::InvalidType(e.to_string()),
        ))
    })
}

pub fn expect_object(value: Value, path: &FieldPath) -> Result<Map<String, Value>, Violations> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Violations::single(Violation::new(
            path.clone(),
            ViolationKind::InvalidStructure(format!("expected a mapping, found {}", describe(&other))),
        ))),
    }
}

/// Take `name` out of `map` and build it, recording any failure.
pub fn read_field<T: Node>(
    map: &mut Map<String, Value>,
    name: &str,
    path: &FieldPath,
    report: &mut Violations,
) -> Option<T> {
    let field_path = path.join(name);
    match map.remove(name) {
        Some(value) => match T::from_value(value, &field_path) {
            Ok(node) => Some(node),
            Err(violations) => {
                report.extend(violations);
                None
            }
        },
        None => {
            let absent = T::absent();
            if absent.is_none() {
                report.push(Violation::new(field_path, ViolationKind::MissingField));
            }
            absent
        }
    }
}

/// Record every key left in `map` as unknown.
pub fn reject_unknown(map: Map<String, Value>, path: &FieldPath, report: &mut Violations) {
    for key in map.keys() {
        report.push(Violation::new(path.join(key), ViolationKind::UnknownField));
    }
}

/// Split a tagged-union mapping into its tag and the remaining fields.
pub fn split_tag(value: Value, path: &FieldPath) -> Result<(String, Value), Violations> {
    let mut map = expect_object(value, path)?;
    match map.remove(TAG_KEY) {
        Some(Value::String(tag)) => Ok((tag, Value::Object(map))),
        Some(other) => Err(Violations::single(Violation::new(
            path.join(TAG_KEY),
            ViolationKind::InvalidType(format!("expected a string, found {}", describe(&other))),
        ))),
        None => Err(Violations::single(Violation::new(
            path.join(TAG_KEY),
            ViolationKind::MissingField,
        ))),
    }
}

pub fn unknown_tag(tag: &str, expected: &[&str], path: &FieldPath) -> Violations {
    Violations::single(Violation::new(
        path.join(TAG_KEY),
        ViolationKind::InvalidStructure(format!(
            "unknown variant {:?}, expected one of {:?}",
            tag, expected
        )),
    ))
}

/// Accept only an empty mapping, for parameter groups without fields.
pub fn expect_empty(value: Value, path: &FieldPath) -> Result<(), Violations> {
    let map = expect_object(value, path)?;
    let mut report = Violations::new();
    reject_unknown(map, path, &mut report);
    report.into_result(())
}

// ============================================================================
// Leaf and container implementations
// ============================================================================

/// Implement [`Node`] for types deserialized as a single value.
///
/// Leaves are replaced wholesale on merge.
#[macro_export]
macro_rules! impl_leaf_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::schema::Node for $ty {
                fn from_value(
                    value: $crate::schema::Value,
                    path: &$crate::schema::FieldPath,
                ) -> ::std::result::Result<Self, $crate::schema::Violations> {
                    $crate::schema::deserialize_leaf(value, path)
                }

                fn merge(
                    &mut self,
                    value: $crate::schema::Value,
                    path: &$crate::schema::FieldPath,
                ) -> ::std::result::Result<(), $crate::schema::Violations> {
                    *self = $crate::schema::deserialize_leaf(value, path)?;
                    Ok(())
                }
            }
        )*
    };
}

crate::impl_leaf_node!(bool, i32, i64, u32, f64, String, (f64, f64), (u32, u32));

macro_rules! constrained_leaf {
    ($($ty:ty => $raw:ty),* $(,)?) => {
        $(
            impl Node for $ty {
                fn from_value(value: Value, path: &FieldPath) -> Result<Self, Violations> {
                    let raw: $raw = deserialize_leaf(value, path)?;
                    <$ty>::try_from(raw)
                        .map_err(|e| Violations::single(Violation::constraint(path.clone(), e)))
                }

                fn merge(&mut self, value: Value, path: &FieldPath) -> Result<(), Violations> {
                    *self = Self::from_value(value, path)?;
                    Ok(())
                }
            }
        )*
    };
}

constrained_leaf!(
    PositiveF64 => f64,
    NonNegativeF64 => f64,
    Direction => f64,
    Spread => f64,
    SeqNumber => i64,
);

impl<const N: usize> Node for BoundedString<N> {
    fn from_value(value: Value, path: &FieldPath) -> Result<Self, Violations> {
        let raw: String = deserialize_leaf(value, path)?;
        Self::new(raw).map_err(|e| Violations::single(Violation::constraint(path.clone(), e)))
    }

    fn merge(&mut self, value: Value, path: &FieldPath) -> Result<(), Violations> {
        *self = Self::from_value(value, path)?;
        Ok(())
    }
}

/// Optional values: a missing key is `None`, explicit `null` clears, and a
/// merge into `None` builds the value from the override alone.
impl<T: Node> Node for Option<T> {
    fn from_value(value: Value, path: &FieldPath) -> Result<Self, Violations> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value, path).map(Some),
        }
    }

    fn merge(&mut self, value: Value, path: &FieldPath) -> Result<(), Violations> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        match self {
            Some(inner) => inner.merge(value, path),
            None => {
                *self = Some(T::from_value(value, path)?);
                Ok(())
            }
        }
    }

    fn validate(&self, path: &FieldPath, report: &mut Violations) {
        if let Some(inner) = self {
            inner.validate(path, report);
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

/// Sequences are replaced wholesale on merge; elements are built and
/// validated individually.
impl<T: Node> Node for Vec<T> {
    fn from_value(value: Value, path: &FieldPath) -> Result<Self, Violations> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Violations::single(Violation::new(
                    path.clone(),
                    ViolationKind::InvalidType(format!("expected a sequence, found {}", describe(&other))),
                )))
            }
        };
        let mut report = Violations::new();
        let mut built = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match T::from_value(item, &path.index(i)) {
                Ok(node) => built.push(node),
                Err(violations) => report.extend(violations),
            }
        }
        report.into_result(built)
    }

    fn merge(&mut self, value: Value, path: &FieldPath) -> Result<(), Violations> {
        *self = Self::from_value(value, path)?;
        Ok(())
    }

    fn validate(&self, path: &FieldPath, report: &mut Violations) {
        for (i, item) in self.iter().enumerate() {
            item.validate(&path.index(i), report);
        }
    }
}

// schismrs-namelist/src/schema/mod.rs

//! Typed, constrained parameter groups built and updated from nested
//! key-value data.

pub mod constraints;
mod macros;
pub mod node;
pub mod violation;

pub use constraints::{
    check_all, BoundedString, Constrained, Constraint, ConstraintViolation, Direction,
    NonNegativeF64, PositiveF64, SeqNumber, Spread,
};
pub use node::{
    build, deserialize_leaf, expect_empty, expect_object, merged, read_field, reject_unknown,
    split_tag, unknown_tag, validate, GroupRules, Node, TAG_KEY,
};
pub use serde_json::Value;
pub use violation::{
    require_equal_lengths, FieldPath, ValidationError, Violation, ViolationKind, Violations,
};

// schismrs-swan/src/lib.rs

//! Validated SWAN boundary and initial-condition commands and the `INPUT`
//! file they are written to.

pub mod command;
pub mod error;
pub mod input;
pub mod subcomponents;

pub use command::SwanCommand;
pub use error::SwanError;
pub use input::{BoundSpec, Project, SwanInput};

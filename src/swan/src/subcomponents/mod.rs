// schismrs-swan/src/subcomponents/mod.rs

//! Parameter groups rendered inside SWAN commands.

pub mod boundary;
pub mod initial;
pub mod shape;

pub use boundary::{
    BoundaryData, BoundaryLocation, ConstantFile, ConstantPar, Par, SegmentIj, SegmentXy, Side,
    SideDirection, SideName, VariableFile, VariablePar,
};
pub use initial::{HotFormat, HotMultiple, HotSingle, InitialCondition, InitialDefault, InitialZero};
pub use shape::{DirectionalSpread, PeriodKind, ShapeSpec, SpectralShape};

// schismrs/src/config/mod.rs

pub mod duration;
pub mod model;

pub use duration::RunDuration;
pub use model::{PeriodConfig, RunConfig, SourcesConfig};

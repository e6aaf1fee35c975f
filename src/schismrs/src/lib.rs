// schismrs/src/lib.rs

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod nml;
pub mod period;
pub mod sources;
pub mod validation;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{Advisory, ConsistencyError, Result, SchismError};
pub use nml::Nml;
pub use period::TimeRange;
pub use sources::{DataSource, DataSources};

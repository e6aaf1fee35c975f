// schismrs/src/error.rs

use chrono::NaiveDateTime;
use schismrs_namelist::schema::ValidationError;
use schismrs_namelist::NamelistError;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchismError>;

#[derive(Error, Debug)]
pub enum SchismError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Write(#[from] NamelistError),

    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A rule spanning several sections does not hold.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{rule}: {message}")]
pub struct ConsistencyError {
    pub rule: &'static str,
    pub message: String,
}

impl ConsistencyError {
    pub fn new(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// A non-fatal finding about a configuration.
///
/// Advisories are logged when raised and handed back to the caller; they
/// never stop an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    message: String,
}

impl Advisory {
    pub fn raise(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("{}", message);
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// schismrs-swan/src/error.rs

use schismrs_namelist::schema::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

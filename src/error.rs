use thiserror::Error;

use crate::paths::STORE_PATH_ENV;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixerError {
    /// The install command needs to know which store path it runs from
    #[error("{var} is not set", var = STORE_PATH_ENV)]
    MissingStorePath,
}

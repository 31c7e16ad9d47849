//! Error types and result alias for the crate.
//!
//! Only field construction can fail. Stroke and sample inputs never produce an
//! [`enum@crate::error::Error`]: malformed input is absorbed and logged instead.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

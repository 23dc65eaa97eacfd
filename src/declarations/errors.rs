use thiserror::Error;

use crate::config::ConfigError;
use crate::mongo::error::{DecodeError, FramingError};

#[derive(Debug, Error)]
pub enum SniffError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("framing: {0}")]
    Framing(#[from] FramingError),

    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
}

pub fn explain_error(error: &SniffError) -> &'static str {
    match error {
        SniffError::Config(_) => "decoder configuration rejected",
        SniffError::Framing(_) => "stream desynchronized",
        SniffError::Decode(_) => "malformed message field",
    }
}

pub type SniffResult<T> = Result<T, SniffError>;

use serde::Deserialize;
use thiserror::Error;

use crate::mongo::constants::MSG_HEADER_SIZE;

/// Largest message a server accepts (`maxMessageSizeBytes`).
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 48_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Canonical Extended JSON, keeps every BSON type distinct.
    Canonical,
    /// Relaxed Extended JSON, numbers render as plain JSON numbers.
    Relaxed,
}

impl Default for DocumentFormat {
    fn default() -> Self {
        DocumentFormat::Canonical
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid decoder config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_message_length {0} is below the 16 byte message header")]
    MaxMessageLengthTooSmall(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub document_format: DocumentFormat,
    pub max_message_length: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            document_format: DocumentFormat::default(),
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl DecoderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DecoderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_message_length < MSG_HEADER_SIZE {
            return Err(ConfigError::MaxMessageLengthTooSmall(
                self.max_message_length,
            ));
        }
        Ok(())
    }

    pub fn with_document_format(mut self, document_format: DocumentFormat) -> Self {
        self.document_format = document_format;
        self
    }

    pub fn with_max_message_length(mut self, max_message_length: usize) -> Self {
        self.max_message_length = max_message_length;
        self
    }
}

use thiserror::Error;

/// Failures that leave the stream without a trustworthy message boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    #[error("unknown operation code {op_code} in a {message_length} byte message")]
    UnknownOpCode { op_code: i32, message_length: i32 },

    #[error("declared message length {0} is shorter than the 16 byte header")]
    InvalidMessageLength(i32),

    #[error("declared message length {length} exceeds the limit of {max} bytes")]
    MessageTooLarge { length: usize, max: usize },
}

/// Failures while reading one field of an already framed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated input: needed {needed} bytes at offset {position}, {available} available")]
    TruncatedInput {
        position: usize,
        needed: usize,
        available: usize,
    },

    #[error("cstring starting at offset {position} has no terminating NUL")]
    UnterminatedString { position: usize },

    #[error("invalid document at offset {position}: {reason}")]
    DocumentDecode { position: usize, reason: String },
}

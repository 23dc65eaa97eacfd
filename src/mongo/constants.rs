pub const I32_BYTE_SIZE: usize = 4;
pub const I64_BYTE_SIZE: usize = 8;

pub const MESSAGE_LENGTH_SIZE: usize = 4;
pub const REQUEST_ID_SIZE: usize = 4;
pub const RESPONSE_TO_SIZE: usize = 4;
pub const OP_CODE_SIZE: usize = 4;

pub const MSG_HEADER_SIZE: usize =
    MESSAGE_LENGTH_SIZE + REQUEST_ID_SIZE + RESPONSE_TO_SIZE + OP_CODE_SIZE;

// int32 length prefix plus the trailing NUL of an empty document
pub const MIN_DOCUMENT_SIZE: usize = 5;

/// Suffix of the pseudo-collection commands are sent to through OP_QUERY.
pub const COMMAND_COLLECTION_SUFFIX: &str = ".$cmd";

/// Key a server uses in the first OP_REPLY document to report a failed query.
pub const REPLY_ERROR_KEY: &str = "$err";

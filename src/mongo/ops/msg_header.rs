// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#standard-message-header

use crate::mongo::error::{DecodeError, FramingError};
use crate::mongo::ops::opcodes::MongoOpCode;
use crate::mongo::reader::FieldReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgHeader {
    // total message size, including this
    pub message_length: i32,

    // identifier for this message
    pub request_id: i32,

    // requestID from the original request (used in responses from db)
    pub response_to: i32,

    // request type
    pub op_code: MongoOpCode,
}

fn read_header_fields(reader: &mut FieldReader) -> Result<(i32, i32, i32), DecodeError> {
    let request_id = reader.read_i32()?;
    let response_to = reader.read_i32()?;
    let op_code = reader.read_i32()?;
    Ok((request_id, response_to, op_code))
}

/// Reads the header fields that follow `messageLength`.
///
/// `reader` must already be truncated to `message_length`, which the framer
/// has checked to cover the whole header.
pub fn parse_msg_header(
    reader: &mut FieldReader,
    message_length: i32,
) -> Result<MsgHeader, FramingError> {
    let (request_id, response_to, op_code) = read_header_fields(reader)
        .map_err(|_| FramingError::InvalidMessageLength(message_length))?;
    let op_code = MongoOpCode::try_from(op_code).map_err(|op_code| {
        FramingError::UnknownOpCode {
            op_code,
            message_length,
        }
    })?;
    Ok(MsgHeader {
        message_length,
        request_id,
        response_to,
        op_code,
    })
}

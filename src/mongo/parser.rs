use tracing::{debug, warn};

use crate::config::{DecoderConfig, DocumentFormat};
use crate::mongo::constants::MSG_HEADER_SIZE;
use crate::mongo::error::FramingError;
use crate::mongo::message::Message;
use crate::mongo::ops::msg_header::{parse_msg_header, MsgHeader};
use crate::mongo::ops::op::MongoOp;
use crate::mongo::ops::op_delete::parse_op_delete;
use crate::mongo::ops::op_get_more::parse_op_get_more;
use crate::mongo::ops::op_insert::parse_op_insert;
use crate::mongo::ops::op_msg::parse_op_msg;
use crate::mongo::ops::op_query::parse_op_query;
use crate::mongo::ops::op_reply::parse_op_reply;
use crate::mongo::ops::op_update::parse_op_update;
use crate::mongo::reader::FieldReader;
use crate::utils::pretty_dump;

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// No complete message buffered yet, nothing consumed.
    NeedMoreData,
    /// A message was framed; `consumed` equals its declared length, even when
    /// `message` failed to decode.
    Decoded { consumed: usize, message: Message },
}

/// Frames and decodes the first message of `buffer`.
///
/// Bytes past the declared message length are left alone for the next call.
/// An `Err` means the buffer no longer starts on a message boundary.
pub fn parse_mongo_message(
    buffer: &[u8],
    config: &DecoderConfig,
) -> Result<DecodeOutcome, FramingError> {
    let mut reader = FieldReader::new(buffer);
    let message_length = match reader.read_i32() {
        // not even enough data to parse the length of the message
        Err(_) => return Ok(DecodeOutcome::NeedMoreData),
        Ok(message_length) => message_length,
    };
    if message_length < MSG_HEADER_SIZE as i32 {
        return Err(FramingError::InvalidMessageLength(message_length));
    }
    let length = message_length as usize;
    if length > config.max_message_length {
        return Err(FramingError::MessageTooLarge {
            length,
            max: config.max_message_length,
        });
    }
    if length > buffer.len() {
        return Ok(DecodeOutcome::NeedMoreData);
    }

    reader.truncate(length);
    let header = parse_msg_header(&mut reader, message_length)?;
    debug!(
        op_code = %header.op_code,
        code = header.op_code.code(),
        request_id = header.request_id,
        response_to = header.response_to,
        message_length,
        "framed mongo message"
    );
    let message = dispatch_op(header, &mut reader, config.document_format);
    Ok(DecodeOutcome::Decoded {
        consumed: length,
        message,
    })
}

fn dispatch_op(header: MsgHeader, reader: &mut FieldReader, format: DocumentFormat) -> Message {
    let op_code = header.op_code;
    let mut op = MongoOp::empty(op_code);
    let result = match &mut op {
        MongoOp::Reply(op_reply) => parse_op_reply(reader, op_reply, format),
        MongoOp::Msg(op_msg) => parse_op_msg(reader, op_msg),
        MongoOp::Update(op_update) => parse_op_update(reader, op_update, format),
        MongoOp::Insert(op_insert) => parse_op_insert(reader, op_insert),
        MongoOp::Query(op_query) => parse_op_query(reader, op_query, format),
        MongoOp::GetMore(op_get_more) => parse_op_get_more(reader, op_get_more),
        MongoOp::Delete(op_delete) => parse_op_delete(reader, op_delete, format),
        MongoOp::KillCursors(_) => Ok(()),
    };
    if let Err(error) = &result {
        warn!(
            %op_code,
            request_id = header.request_id,
            %error,
            "an error occurred while parsing {} message",
            op_code
        );
        debug!("message bytes:\n{}", pretty_dump(reader.view()));
    }

    Message {
        method: op.method(),
        is_response: op_code.is_response(),
        expects_response: op_code.expects_response(),
        error: op.error().map(str::to_string),
        failure: result.err(),
        header,
        op,
        ts: None,
    }
}

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::DocumentFormat;
use crate::mongo::constants::REPLY_ERROR_KEY;
use crate::mongo::error::DecodeError;
use crate::mongo::format::{format_document, format_error_value};
use crate::mongo::reader::FieldReader;

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-reply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpReply {
    // cursor id if client needs to do get more's
    pub cursor_id: Option<i64>,

    // where in the cursor this reply is starting
    pub starting_from: Option<i32>,

    // number of documents in the reply
    pub number_returned: Option<i32>,

    // documents, already formatted, in wire order
    pub documents: Vec<String>,

    // `$err` of the first document
    pub error: Option<String>,
}

pub fn parse_op_reply(
    reader: &mut FieldReader,
    op_reply: &mut OpReply,
    format: DocumentFormat,
) -> Result<(), DecodeError> {
    let _response_flags = reader.read_i32()?;
    op_reply.cursor_id = Some(reader.read_i64()?);
    op_reply.starting_from = Some(reader.read_i32()?);
    let number_returned = reader.read_i32()?;
    op_reply.number_returned = Some(number_returned);

    debug!(number_returned, "reading OP_REPLY documents");
    for index in 0..number_returned.max(0) {
        let document = reader.read_document()?;
        if index == 0 {
            if let Some(error) = document.get(REPLY_ERROR_KEY) {
                op_reply.error = Some(format_error_value(error.clone(), format));
            }
        }
        op_reply.documents.push(format_document(document, format));
    }
    Ok(())
}

impl OpReply {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(cursor_id) = self.cursor_id {
            event.insert("cursorId".to_string(), Value::from(cursor_id));
        }
        if let Some(starting_from) = self.starting_from {
            event.insert("startingFrom".to_string(), Value::from(starting_from));
        }
        if let Some(number_returned) = self.number_returned {
            event.insert("numberReturned".to_string(), Value::from(number_returned));
            event.insert(
                "documents".to_string(),
                Value::from(self.documents.clone()),
            );
        }
    }
}

use serde_json::{Map, Value};

use crate::mongo::error::DecodeError;
use crate::mongo::reader::FieldReader;

/// Informational message of opcode 1000, a single cstring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpMsg {
    pub message: Option<String>,
}

pub fn parse_op_msg(reader: &mut FieldReader, op_msg: &mut OpMsg) -> Result<(), DecodeError> {
    op_msg.message = Some(reader.read_cstring()?);
    Ok(())
}

impl OpMsg {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(message) = &self.message {
            event.insert("message".to_string(), Value::from(message.as_str()));
        }
    }
}

use serde_json::{Map, Value};

use crate::mongo::error::DecodeError;
use crate::mongo::reader::FieldReader;

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-get-more
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpGetMore {
    // "dbname.collectionname"
    pub full_collection_name: Option<String>,

    // number of documents to return
    pub number_to_return: Option<i32>,

    // cursorID from the OP_REPLY
    pub cursor_id: Option<i64>,
}

pub fn parse_op_get_more(
    reader: &mut FieldReader,
    op_get_more: &mut OpGetMore,
) -> Result<(), DecodeError> {
    let _zero = reader.read_i32()?;
    op_get_more.full_collection_name = Some(reader.read_cstring()?);
    op_get_more.number_to_return = Some(reader.read_i32()?);
    op_get_more.cursor_id = Some(reader.read_i64()?);
    Ok(())
}

impl OpGetMore {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(name) = &self.full_collection_name {
            event.insert("fullCollectionName".to_string(), Value::from(name.as_str()));
        }
        if let Some(number_to_return) = self.number_to_return {
            event.insert("numberToReturn".to_string(), Value::from(number_to_return));
        }
        if let Some(cursor_id) = self.cursor_id {
            event.insert("cursorId".to_string(), Value::from(cursor_id));
        }
    }
}

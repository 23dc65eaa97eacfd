use serde_json::{Map, Value};

use crate::config::DocumentFormat;
use crate::mongo::error::DecodeError;
use crate::mongo::format::format_document;
use crate::mongo::reader::FieldReader;

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-delete
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpDelete {
    // "dbname.collectionname"
    pub full_collection_name: Option<String>,

    // query object
    pub selector: Option<String>,
}

pub fn parse_op_delete(
    reader: &mut FieldReader,
    op_delete: &mut OpDelete,
    format: DocumentFormat,
) -> Result<(), DecodeError> {
    let _zero = reader.read_i32()?;
    op_delete.full_collection_name = Some(reader.read_cstring()?);
    let _flags = reader.read_i32()?;
    op_delete.selector = Some(format_document(reader.read_document()?, format));
    Ok(())
}

impl OpDelete {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(name) = &self.full_collection_name {
            event.insert("fullCollectionName".to_string(), Value::from(name.as_str()));
        }
        if let Some(selector) = &self.selector {
            event.insert("selector".to_string(), Value::from(selector.as_str()));
        }
    }
}

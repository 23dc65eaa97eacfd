use serde_json::{Map, Value};

use crate::config::DocumentFormat;
use crate::mongo::error::DecodeError;
use crate::mongo::format::format_document;
use crate::mongo::reader::FieldReader;

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpUpdate {
    // "dbname.collectionname"
    pub full_collection_name: Option<String>,

    // the query to select the document
    pub selector: Option<String>,

    // specification of the update to perform
    pub update: Option<String>,
}

pub fn parse_op_update(
    reader: &mut FieldReader,
    op_update: &mut OpUpdate,
    format: DocumentFormat,
) -> Result<(), DecodeError> {
    let _zero = reader.read_i32()?;
    op_update.full_collection_name = Some(reader.read_cstring()?);
    let _flags = reader.read_i32()?;
    op_update.selector = Some(format_document(reader.read_document()?, format));
    op_update.update = Some(format_document(reader.read_document()?, format));
    Ok(())
}

impl OpUpdate {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(name) = &self.full_collection_name {
            event.insert("fullCollectionName".to_string(), Value::from(name.as_str()));
        }
        if let Some(selector) = &self.selector {
            event.insert("selector".to_string(), Value::from(selector.as_str()));
        }
        if let Some(update) = &self.update {
            event.insert("update".to_string(), Value::from(update.as_str()));
        }
    }
}

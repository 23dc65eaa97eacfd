use bson::Document;
use serde_json::{Map, Value};

use crate::config::DocumentFormat;
use crate::mongo::commands::pick_command;
use crate::mongo::constants::COMMAND_COLLECTION_SUFFIX;
use crate::mongo::error::DecodeError;
use crate::mongo::format::format_document;
use crate::mongo::reader::FieldReader;

pub const FIND_METHOD: &str = "find";
pub const OTHER_COMMAND_METHOD: &str = "otherCommand";

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpQuery {
    // "dbname.collectionname"
    pub full_collection_name: Option<String>,

    // number of documents to skip
    pub number_to_skip: Option<i32>,

    // number of documents to return in the first OP_REPLY batch
    pub number_to_return: Option<i32>,

    // query object.
    pub query: Option<String>,

    // Optional. Selector indicating the fields to return.
    pub return_fields_selector: Option<String>,

    // "find", the command name, or "otherCommand"
    pub method: Option<&'static str>,
}

/// A query on `<db>.$cmd` carries a command; anything else is a find.
pub fn classify_query(full_collection_name: &str, query: &Document) -> &'static str {
    if full_collection_name.ends_with(COMMAND_COLLECTION_SUFFIX) {
        pick_command(query).unwrap_or(OTHER_COMMAND_METHOD)
    } else {
        FIND_METHOD
    }
}

pub fn parse_op_query(
    reader: &mut FieldReader,
    op_query: &mut OpQuery,
    format: DocumentFormat,
) -> Result<(), DecodeError> {
    let _flags = reader.read_i32()?;
    let full_collection_name = reader.read_cstring()?;
    op_query.full_collection_name = Some(full_collection_name.clone());
    op_query.number_to_skip = Some(reader.read_i32()?);
    op_query.number_to_return = Some(reader.read_i32()?);

    let query = reader.read_document()?;
    op_query.method = Some(classify_query(&full_collection_name, &query));
    op_query.query = Some(format_document(query, format));

    if reader.has_remaining() {
        op_query.return_fields_selector = Some(format_document(reader.read_document()?, format));
    }
    Ok(())
}

impl OpQuery {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(name) = &self.full_collection_name {
            event.insert("fullCollectionName".to_string(), Value::from(name.as_str()));
        }
        if let Some(number_to_skip) = self.number_to_skip {
            event.insert("numberToSkip".to_string(), Value::from(number_to_skip));
        }
        if let Some(number_to_return) = self.number_to_return {
            event.insert("numberToReturn".to_string(), Value::from(number_to_return));
        }
        if let Some(query) = &self.query {
            event.insert("query".to_string(), Value::from(query.as_str()));
        }
        if let Some(selector) = &self.return_fields_selector {
            event.insert(
                "returnFieldsSelector".to_string(),
                Value::from(selector.as_str()),
            );
        }
    }
}

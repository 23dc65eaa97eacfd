use serde_json::{Map, Value};

use crate::mongo::error::DecodeError;
use crate::mongo::reader::FieldReader;

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-insert
///
/// The inserted documents are not decoded: recent clients send inserts as a
/// command through OP_QUERY instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpInsert {
    // "dbname.collectionname"
    pub full_collection_name: Option<String>,
}

pub fn parse_op_insert(
    reader: &mut FieldReader,
    op_insert: &mut OpInsert,
) -> Result<(), DecodeError> {
    let _flags = reader.read_i32()?;
    op_insert.full_collection_name = Some(reader.read_cstring()?);
    Ok(())
}

impl OpInsert {
    pub fn write_event(&self, event: &mut Map<String, Value>) {
        if let Some(name) = &self.full_collection_name {
            event.insert("fullCollectionName".to_string(), Value::from(name.as_str()));
        }
    }
}

#[cfg(test)]
mod op_insert_tests {
    use bson::doc;

    use crate::mongo::fixtures::MessageBuilder;
    use crate::mongo::ops::op_insert::{parse_op_insert, OpInsert};
    use crate::mongo::ops::opcodes::MONGO_OP_INSERT_CODE;
    use crate::mongo::reader::FieldReader;

    #[test]
    fn test_parse_op_insert_ignores_documents() {
        let builder = MessageBuilder::new(MONGO_OP_INSERT_CODE)
            .i32(0)
            .cstring("shop.items")
            .document(&doc! { "sku": "a1" })
            .document(&doc! { "sku": "b2" });
        let mut reader = FieldReader::new(builder.body());
        let mut op_insert = OpInsert::default();
        parse_op_insert(&mut reader, &mut op_insert).unwrap();
        assert_eq!(op_insert.full_collection_name.as_deref(), Some("shop.items"));
        assert!(reader.has_remaining());
    }

    #[test]
    #[should_panic]
    fn test_parse_op_insert_error() {
        let builder = MessageBuilder::new(MONGO_OP_INSERT_CODE).i32(0);
        parse_op_insert(&mut FieldReader::new(builder.body()), &mut OpInsert::default()).unwrap();
    }
}

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::mongo::error::DecodeError;
use crate::mongo::ops::msg_header::MsgHeader;
use crate::mongo::ops::op::MongoOp;

/// One framed message, as handed to correlation and publication.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub header: MsgHeader,

    // "find", "insert", a command name... unset for replies
    pub method: Option<&'static str>,

    pub is_response: bool,
    pub expects_response: bool,

    // error reported by the server in a reply
    pub error: Option<String>,

    pub op: MongoOp,

    // first field that could not be read, the fields before it are kept in `op`
    pub failure: Option<DecodeError>,

    // capture time, set by the stream buffer
    pub ts: Option<DateTime<Utc>>,
}

impl Message {
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    pub fn event(&self) -> Map<String, Value> {
        self.op.to_event()
    }

    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert(
            "messageLength".to_string(),
            Value::from(self.header.message_length),
        );
        record.insert("requestId".to_string(), Value::from(self.header.request_id));
        record.insert(
            "responseTo".to_string(),
            Value::from(self.header.response_to),
        );
        record.insert(
            "opCode".to_string(),
            Value::from(self.header.op_code.name()),
        );
        if let Some(method) = self.method {
            record.insert("method".to_string(), Value::from(method));
        }
        record.insert("isResponse".to_string(), Value::from(self.is_response));
        record.insert(
            "expectsResponse".to_string(),
            Value::from(self.expects_response),
        );
        if let Some(error) = &self.error {
            record.insert("error".to_string(), Value::from(error.as_str()));
        }
        record.insert("valid".to_string(), Value::from(self.is_valid()));
        if let Some(failure) = &self.failure {
            record.insert("failure".to_string(), Value::from(failure.to_string()));
        }
        if let Some(ts) = &self.ts {
            record.insert("ts".to_string(), Value::from(ts.to_rfc3339()));
        }
        record.insert("event".to_string(), Value::Object(self.event()));
        Value::Object(record)
    }
}

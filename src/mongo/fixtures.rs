//! Wire message builders shared by the unit tests.

use bson::Document;

use crate::mongo::constants::MSG_HEADER_SIZE;

pub struct MessageBuilder {
    request_id: i32,
    response_to: i32,
    op_code: i32,
    body: Vec<u8>,
}

impl MessageBuilder {
    pub fn new(op_code: i32) -> Self {
        MessageBuilder {
            request_id: 0,
            response_to: 0,
            op_code,
            body: Vec::new(),
        }
    }

    pub fn request_id(mut self, request_id: i32) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn response_to(mut self, response_to: i32) -> Self {
        self.response_to = response_to;
        self
    }

    pub fn i32(mut self, value: i32) -> Self {
        self.body.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn i64(mut self, value: i64) -> Self {
        self.body.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn cstring(mut self, value: &str) -> Self {
        self.body.extend_from_slice(value.as_bytes());
        self.body.push(0);
        self
    }

    pub fn document(mut self, document: &Document) -> Self {
        document.to_writer(&mut self.body).unwrap();
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn build(self) -> Vec<u8> {
        let message_length = (MSG_HEADER_SIZE + self.body.len()) as i32;
        let mut buffer = Vec::with_capacity(message_length as usize);
        buffer.extend_from_slice(&message_length.to_le_bytes());
        buffer.extend_from_slice(&self.request_id.to_le_bytes());
        buffer.extend_from_slice(&self.response_to.to_le_bytes());
        buffer.extend_from_slice(&self.op_code.to_le_bytes());
        buffer.extend_from_slice(&self.body);
        buffer
    }
}

/// An OP_QUERY `isMaster` handshake sent by the mongo shell to `admin.$cmd`.
pub static OP_QUERY_FIXTURE: [u8; 269] = [
    0x0d, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xd4, 0x07, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x61, 0x64, 0x6d, 0x69, 0x6e, 0x2e, 0x24, 0x63, 0x6d, 0x64,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0xe6, 0x00, 0x00, 0x00, 0x10, 0x69,
    0x73, 0x4d, 0x61, 0x73, 0x74, 0x65, 0x72, 0x00, 0x01, 0x00, 0x00, 0x00, 0x03, 0x63, 0x6c,
    0x69, 0x65, 0x6e, 0x74, 0x00, 0xcb, 0x00, 0x00, 0x00, 0x03, 0x61, 0x70, 0x70, 0x6c, 0x69,
    0x63, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x00, 0x1d, 0x00, 0x00, 0x00, 0x02, 0x6e, 0x61, 0x6d,
    0x65, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x4d, 0x6f, 0x6e, 0x67, 0x6f, 0x44, 0x42, 0x20, 0x53,
    0x68, 0x65, 0x6c, 0x6c, 0x00, 0x00, 0x03, 0x64, 0x72, 0x69, 0x76, 0x65, 0x72, 0x00, 0x3a,
    0x00, 0x00, 0x00, 0x02, 0x6e, 0x61, 0x6d, 0x65, 0x00, 0x18, 0x00, 0x00, 0x00, 0x4d, 0x6f,
    0x6e, 0x67, 0x6f, 0x44, 0x42, 0x20, 0x49, 0x6e, 0x74, 0x65, 0x72, 0x6e, 0x61, 0x6c, 0x20,
    0x43, 0x6c, 0x69, 0x65, 0x6e, 0x74, 0x00, 0x02, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e,
    0x00, 0x06, 0x00, 0x00, 0x00, 0x34, 0x2e, 0x30, 0x2e, 0x31, 0x00, 0x00, 0x03, 0x6f, 0x73,
    0x00, 0x56, 0x00, 0x00, 0x00, 0x02, 0x74, 0x79, 0x70, 0x65, 0x00, 0x07, 0x00, 0x00, 0x00,
    0x44, 0x61, 0x72, 0x77, 0x69, 0x6e, 0x00, 0x02, 0x6e, 0x61, 0x6d, 0x65, 0x00, 0x09, 0x00,
    0x00, 0x00, 0x4d, 0x61, 0x63, 0x20, 0x4f, 0x53, 0x20, 0x58, 0x00, 0x02, 0x61, 0x72, 0x63,
    0x68, 0x69, 0x74, 0x65, 0x63, 0x74, 0x75, 0x72, 0x65, 0x00, 0x07, 0x00, 0x00, 0x00, 0x78,
    0x38, 0x36, 0x5f, 0x36, 0x34, 0x00, 0x02, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x00,
    0x07, 0x00, 0x00, 0x00, 0x31, 0x38, 0x2e, 0x32, 0x2e, 0x30, 0x00, 0x00, 0x00, 0x00,
];

use bson::Document;

use crate::mongo::constants::{I32_BYTE_SIZE, I64_BYTE_SIZE, MIN_DOCUMENT_SIZE};
use crate::mongo::error::DecodeError;

/// Cursor over the bytes of a single message.
///
/// Every read is bounded by the view handed to [`FieldReader::new`], narrowed
/// further by [`FieldReader::truncate`]. A failed read leaves the cursor where
/// it was.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    buffer: &'a [u8],
    index: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        FieldReader { buffer, index: 0 }
    }

    /// Only consider the first `length` bytes from now on.
    pub fn truncate(&mut self, length: usize) {
        if length < self.buffer.len() {
            self.buffer = &self.buffer[..length];
        }
        if self.index > self.buffer.len() {
            self.index = self.buffer.len();
        }
    }

    pub fn view(&self) -> &'a [u8] {
        self.buffer
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.index
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], DecodeError> {
        if length > self.remaining() {
            return Err(DecodeError::TruncatedInput {
                position: self.index,
                needed: length,
                available: self.remaining(),
            });
        }
        let start = self.index;
        self.index += length;
        Ok(&self.buffer[start..self.index])
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        let bytes = self.read_bytes(I32_BYTE_SIZE)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        let bytes = self.read_bytes(I64_BYTE_SIZE)?;
        let mut array = [0u8; I64_BYTE_SIZE];
        array.copy_from_slice(bytes);
        Ok(i64::from_le_bytes(array))
    }

    pub fn read_cstring(&mut self) -> Result<String, DecodeError> {
        let start = self.index;
        let rest = &self.buffer[start..];
        match rest.iter().position(|&byte| byte == b'\0') {
            None => Err(DecodeError::UnterminatedString { position: start }),
            Some(terminal_index) => {
                // invalid sequences become U+FFFD, the rest of the name is kept
                let value = String::from_utf8_lossy(&rest[..terminal_index]).into_owned();
                // skip the trailing NUL as well
                self.index = start + terminal_index + 1;
                Ok(value)
            }
        }
    }

    /// Reads a length-prefixed BSON document.
    ///
    /// The cursor always lands on `start + declared length`, whatever the BSON
    /// decoder made of the bytes in between.
    pub fn read_document(&mut self) -> Result<Document, DecodeError> {
        let start = self.index;
        let declared_length = {
            let mut peek = self.clone();
            peek.read_i32()?
        };
        if declared_length < MIN_DOCUMENT_SIZE as i32 {
            return Err(DecodeError::DocumentDecode {
                position: start,
                reason: format!("declared length {} is too small", declared_length),
            });
        }
        let mut bytes = self.read_bytes(declared_length as usize)?;
        match Document::from_reader(&mut bytes) {
            Err(error) => {
                self.index = start;
                Err(DecodeError::DocumentDecode {
                    position: start,
                    reason: error.to_string(),
                })
            }
            Ok(document) => Ok(document),
        }
    }
}

#[cfg(test)]
mod reader_tests {
    use bson::doc;

    use crate::mongo::error::DecodeError;
    use crate::mongo::reader::FieldReader;

    fn document_bytes(document: &bson::Document) -> Vec<u8> {
        let mut buffer = Vec::new();
        document.to_writer(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_read_i32() {
        let buffer = [0x0d, 0x01, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff];
        let mut reader = FieldReader::new(&buffer);
        assert_eq!(reader.read_i32().unwrap(), 269);
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert!(!reader.has_remaining());
    }

    #[test]
    fn test_read_i64() {
        let buffer = [0x0d, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut reader = FieldReader::new(&buffer);
        assert_eq!(reader.read_i64().unwrap(), 269);
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn test_read_i32_truncated() {
        let buffer = [0x0d, 0x01];
        let mut reader = FieldReader::new(&buffer);
        assert_eq!(
            reader.read_i32(),
            Err(DecodeError::TruncatedInput {
                position: 0,
                needed: 4,
                available: 2,
            })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    #[should_panic]
    fn test_read_i64_error() {
        FieldReader::new(&[0x0d, 0x00, 0x00, 0x00]).read_i64().unwrap();
    }

    #[test]
    fn test_truncate_bounds_reads() {
        let buffer = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
        let mut reader = FieldReader::new(&buffer);
        reader.truncate(4);
        assert_eq!(reader.read_i32().unwrap(), 1);
        assert!(reader.read_i32().is_err());
        assert_eq!(reader.view().len(), 4);
    }

    #[test]
    fn test_read_cstring() {
        let buffer = b"admin.$cmd\0\0rest";
        let mut reader = FieldReader::new(buffer);
        assert_eq!(reader.read_cstring().unwrap(), "admin.$cmd");
        assert_eq!(reader.position(), 11);
        assert_eq!(reader.read_cstring().unwrap(), "");
        assert_eq!(reader.position(), 12);
    }

    #[test]
    fn test_read_cstring_unterminated() {
        let buffer = [0x70, 0x70, 0x6c, 0x69];
        let mut reader = FieldReader::new(&buffer);
        assert_eq!(
            reader.read_cstring(),
            Err(DecodeError::UnterminatedString { position: 0 })
        );
    }

    #[test]
    fn test_read_cstring_stops_at_truncation() {
        let buffer = b"db\0";
        let mut reader = FieldReader::new(buffer);
        reader.truncate(2);
        assert!(reader.read_cstring().is_err());
    }

    #[test]
    fn test_read_cstring_invalid_utf8() {
        let buffer = [0x61, 0xff, 0x00, 0x62, 0x00];
        let mut reader = FieldReader::new(&buffer);
        assert_eq!(reader.read_cstring().unwrap(), "a\u{fffd}");
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.read_cstring().unwrap(), "b");
    }

    #[test]
    fn test_read_document_then_next_field() {
        let document = doc! { "ismaster": 1, "client": { "name": "shell" } };
        let mut buffer = document_bytes(&document);
        let document_length = buffer.len();
        buffer.extend_from_slice(&7i32.to_le_bytes());

        let mut reader = FieldReader::new(&buffer);
        assert_eq!(reader.read_document().unwrap(), document);
        assert_eq!(reader.position(), document_length);
        assert_eq!(reader.read_i32().unwrap(), 7);
    }

    #[test]
    fn test_read_document_overruns_view() {
        let buffer = document_bytes(&doc! { "a": "long enough value" });
        let mut reader = FieldReader::new(&buffer);
        reader.truncate(buffer.len() - 3);
        match reader.read_document() {
            Err(DecodeError::TruncatedInput { position: 0, .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_read_document_too_small() {
        let buffer = [0x02, 0x00, 0x00, 0x00, 0x00];
        let mut reader = FieldReader::new(&buffer);
        match reader.read_document() {
            Err(DecodeError::DocumentDecode { position: 0, .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_read_document_garbage() {
        // element type 0x20 does not exist
        let buffer = [0x08, 0x00, 0x00, 0x00, 0x20, 0x61, 0x00, 0x00];
        let mut reader = FieldReader::new(&buffer);
        match reader.read_document() {
            Err(DecodeError::DocumentDecode { position: 0, .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}

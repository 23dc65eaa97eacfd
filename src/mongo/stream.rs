use bytes::{Buf, BytesMut};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::DecoderConfig;
use crate::declarations::errors::{explain_error, SniffError, SniffResult};
use crate::mongo::error::FramingError;
use crate::mongo::message::Message;
use crate::mongo::parser::{parse_mongo_message, DecodeOutcome};

/// Bytes of one direction of one connection, waiting to be framed.
///
/// Once a message cannot be framed the stream stays desynchronized: buffered
/// bytes are dropped and later data is ignored until [`MongoStream::reset`].
#[derive(Debug)]
pub struct MongoStream {
    buffer: BytesMut,
    config: DecoderConfig,
    desync_error: Option<FramingError>,
}

impl Default for MongoStream {
    fn default() -> Self {
        MongoStream::new(DecoderConfig::default())
    }
}

impl MongoStream {
    pub fn new(config: DecoderConfig) -> Self {
        MongoStream {
            buffer: BytesMut::with_capacity(8192),
            config,
            desync_error: None,
        }
    }

    pub fn from_json_config(json: &str) -> SniffResult<Self> {
        Ok(MongoStream::new(DecoderConfig::from_json_str(json)?))
    }

    /// Appends `data` captured at `ts` and returns every message it completes.
    pub fn push(&mut self, data: &[u8], ts: DateTime<Utc>) -> Vec<Message> {
        if let Some(error) = &self.desync_error {
            debug!(bytes = data.len(), %error, "ignoring data on desynchronized stream");
            return Vec::new();
        }
        self.buffer.extend_from_slice(data);

        let mut messages = Vec::new();
        loop {
            match parse_mongo_message(&self.buffer, &self.config) {
                Ok(DecodeOutcome::NeedMoreData) => break,
                Ok(DecodeOutcome::Decoded {
                    consumed,
                    mut message,
                }) => {
                    self.buffer.advance(consumed);
                    message.ts = Some(ts);
                    messages.push(message);
                }
                Err(error) => {
                    warn!(
                        %error,
                        reason = explain_error(&SniffError::Framing(error.clone())),
                        dropped_bytes = self.buffer.len(),
                        "mongo stream desynchronized, decoding stopped"
                    );
                    self.buffer.clear();
                    self.desync_error = Some(error);
                    break;
                }
            }
        }
        messages
    }

    /// Fails with the framing error that stopped this stream, if any.
    pub fn check(&self) -> SniffResult<()> {
        match &self.desync_error {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }

    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_desynchronized(&self) -> bool {
        self.desync_error.is_some()
    }

    pub fn desync_error(&self) -> Option<&FramingError> {
        self.desync_error.as_ref()
    }

    /// Forgets buffered bytes and any desynchronization.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.desync_error = None;
    }
}

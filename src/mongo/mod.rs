//! Passive decoding of the legacy MongoDB wire protocol.
//!
//! [`parser::parse_mongo_message`] frames one message out of a connection
//! buffer and decodes it; [`stream::MongoStream`] drives it over a growing
//! per-direction buffer.

pub mod commands;
pub mod constants;
pub mod error;
pub mod format;
pub mod message;
pub mod ops;
pub mod parser;
pub mod reader;
pub mod stream;

#[cfg(test)]
pub mod fixtures;

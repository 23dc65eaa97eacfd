pub mod config;
pub mod declarations;
pub mod mongo;
pub mod utils;

pub use crate::config::{DecoderConfig, DocumentFormat};
pub use crate::declarations::errors::{SniffError, SniffResult};
pub use crate::mongo::message::Message;
pub use crate::mongo::parser::{parse_mongo_message, DecodeOutcome};
pub use crate::mongo::stream::MongoStream;

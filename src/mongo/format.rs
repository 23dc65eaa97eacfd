use bson::{Bson, Document};

use crate::config::DocumentFormat;

pub fn format_document(document: Document, format: DocumentFormat) -> String {
    format_bson(Bson::Document(document), format)
}

pub fn format_bson(value: Bson, format: DocumentFormat) -> String {
    let json = match format {
        DocumentFormat::Canonical => value.into_canonical_extjson(),
        DocumentFormat::Relaxed => value.into_relaxed_extjson(),
    };
    json.to_string()
}

/// Text of a server-reported error. Plain strings are kept verbatim.
pub fn format_error_value(value: Bson, format: DocumentFormat) -> String {
    match value {
        Bson::String(message) => message,
        other => format_bson(other, format),
    }
}

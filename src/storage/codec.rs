//! Document serialization
//!
//! Documents are written as 2-space indented JSON so they diff cleanly, and
//! read back with strict structural validation: the top level must be an
//! object carrying `properties` and `tenants` arrays.

use serde_json::Value;

use crate::error::{RentlogError, RentlogResult};
use crate::models::Document;

use super::migration::{self, MigrationReport};

/// Serialize a document to indented JSON
pub fn serialize_document(document: &Document) -> RentlogResult<String> {
    serde_json::to_string_pretty(document)
        .map_err(|e| RentlogError::Json(format!("Failed to serialize document: {}", e)))
}

/// Turn the raw bytes of a data file into text
///
/// Data files are UTF-8. Anything else is not a document at all.
pub fn decode_document_text(bytes: Vec<u8>) -> RentlogResult<String> {
    String::from_utf8(bytes)
        .map_err(|e| RentlogError::Parse(format!("file is not UTF-8 text ({})", e.utf8_error())))
}

/// Parse, validate and migrate a document
pub fn parse_document(text: &str) -> RentlogResult<Document> {
    parse_document_with_report(text).map(|(document, _)| document)
}

/// Like [`parse_document`], also returning what the migration pass did
pub fn parse_document_with_report(text: &str) -> RentlogResult<(Document, MigrationReport)> {
    let value: Value = serde_json::from_str(text).map_err(|e| RentlogError::Parse(e.to_string()))?;

    let Value::Object(mut root) = value else {
        return Err(RentlogError::InvalidDocument(
            "expected an object with 'properties' and 'tenants'".into(),
        ));
    };

    for key in ["properties", "tenants"] {
        match root.get(key) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(RentlogError::InvalidDocument(format!(
                    "'{}' must be a list",
                    key
                )))
            }
            None => {
                return Err(RentlogError::InvalidDocument(format!(
                    "missing '{}'",
                    key
                )))
            }
        }
    }

    let report = migration::migrate(&mut root)?;

    let document: Document = serde_json::from_value(Value::Object(root))
        .map_err(|e| RentlogError::InvalidDocument(e.to_string()))?;

    Ok((document, report))
}

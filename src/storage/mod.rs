//! Storage layer for RentLog
//!
//! Turns documents into file contents and back: atomic text writes, the JSON
//! codec with its shape checks, and versioned schema migrations.

pub mod codec;
pub mod file_io;
pub mod migration;

pub use codec::{
    decode_document_text, parse_document, parse_document_with_report, serialize_document,
};
pub use file_io::{read_bytes, write_text_atomic};
pub use migration::MigrationReport;

//! Custom error types for RentLog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. A dismissed file picker is not an error:
//! the gateway reports it as a `Cancelled` outcome instead.

use thiserror::Error;

/// The main error type for RentLog operations
#[derive(Error, Debug)]
pub enum RentlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The file is JSON but not a RentLog document
    #[error("Invalid data file: {0}. Choose another file or create a new one")]
    InvalidDocument(String),

    /// The file is not JSON at all
    #[error("Failed to parse data file: {0}. Choose another file or create a new one")]
    Parse(String),

    /// The host denied or interrupted a write
    #[error("Failed to save data file: {0}. Your changes are still in memory; try saving to another file")]
    Write(String),
}

impl RentlogError {
    /// Create a "not found" error for properties
    pub fn property_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Property",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for tenants
    pub fn tenant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Tenant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for bills
    pub fn bill_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bill",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payments
    pub fn payment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payment",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the opened file could not be read as a document
    ///
    /// Invalid shapes and malformed JSON look the same to the user.
    pub fn is_unreadable_document(&self) -> bool {
        matches!(self, Self::InvalidDocument(_) | Self::Parse(_))
    }

    /// Check if this is a failed write
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RentlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for RentLog operations
pub type RentlogResult<T> = Result<T, RentlogError>;

//! Property model
//!
//! A rented building or unit. Properties are edited in place and never deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntityId;

/// A rental property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: EntityId,

    /// Display name (e.g., "Lakeview Flat 2B")
    pub name: String,

    /// Street address
    pub address: String,
}

impl Property {
    /// Create a new property
    pub fn new(id: EntityId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }

    /// Validate the property
    pub fn validate(&self) -> Result<(), PropertyValidationError> {
        if self.name.trim().is_empty() {
            return Err(PropertyValidationError::EmptyName);
        }
        if self.address.trim().is_empty() {
            return Err(PropertyValidationError::EmptyAddress);
        }
        Ok(())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// Validation errors for properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValidationError {
    EmptyName,
    EmptyAddress,
}

impl fmt::Display for PropertyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Property name cannot be empty"),
            Self::EmptyAddress => write!(f, "Property address cannot be empty"),
        }
    }
}

impl std::error::Error for PropertyValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let mut property = Property::new(EntityId::from_raw(1), "Home", "1 Main St");
        assert!(property.validate().is_ok());

        property.address = "  ".into();
        assert_eq!(property.validate(), Err(PropertyValidationError::EmptyAddress));

        property.name = String::new();
        assert_eq!(property.validate(), Err(PropertyValidationError::EmptyName));
    }

    #[test]
    fn test_display() {
        let property = Property::new(EntityId::from_raw(1), "Home", "1 Main St");
        assert_eq!(property.to_string(), "Home (1 Main St)");
    }
}

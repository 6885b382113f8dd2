//! Property service
//!
//! Creates, finds and edits properties. Properties are never deleted.

use crate::error::{RentlogError, RentlogResult};
use crate::models::{Document, EntityId, Property};

/// Service for property management
pub struct PropertyService<'a> {
    document: &'a mut Document,
}

impl<'a> PropertyService<'a> {
    /// Create a new property service
    pub fn new(document: &'a mut Document) -> Self {
        Self { document }
    }

    /// Create a new property
    pub fn create(&mut self, name: &str, address: &str) -> RentlogResult<Property> {
        let id = self.document.id_generator().next_id();
        let property = Property::new(id, name.trim(), address.trim());

        property
            .validate()
            .map_err(|e| RentlogError::Validation(e.to_string()))?;

        self.document.properties.push(property.clone());
        tracing::debug!(id = %property.id, "property created");
        Ok(property)
    }

    /// Get all properties in insertion order
    pub fn list(&self) -> &[Property] {
        &self.document.properties
    }

    /// Find a property by ID or name (case-insensitive)
    pub fn find(&self, identifier: &str) -> Option<&Property> {
        find_property(self.document, identifier)
    }

    /// Update a property's name and/or address
    pub fn update(
        &mut self,
        id: EntityId,
        name: Option<&str>,
        address: Option<&str>,
    ) -> RentlogResult<Property> {
        let property = self
            .document
            .property_mut(id)
            .ok_or_else(|| RentlogError::property_not_found(id.to_string()))?;

        let mut updated = property.clone();
        if let Some(name) = name {
            updated.name = name.trim().to_string();
        }
        if let Some(address) = address {
            updated.address = address.trim().to_string();
        }

        // Validate before touching the stored property
        updated
            .validate()
            .map_err(|e| RentlogError::Validation(e.to_string()))?;

        *property = updated.clone();
        Ok(updated)
    }
}

/// Find a property by ID or name (case-insensitive)
pub fn find_property<'d>(document: &'d Document, identifier: &str) -> Option<&'d Property> {
    let identifier = identifier.trim();
    if let Ok(id) = identifier.parse::<EntityId>() {
        if let Some(property) = document.property(id) {
            return Some(property);
        }
    }

    let lower = identifier.to_lowercase();
    document
        .properties
        .iter()
        .find(|p| p.name.to_lowercase() == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_property() {
        let mut doc = Document::new();
        let mut service = PropertyService::new(&mut doc);

        let property = service.create("  Lakeview 2B ", "4 Lake Rd").unwrap();

        assert_eq!(property.name, "Lakeview 2B");
        assert_eq!(service.list().len(), 1);
        assert_eq!(doc.properties[0], property);
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let mut doc = Document::new();
        let mut service = PropertyService::new(&mut doc);

        assert!(service.create("", "4 Lake Rd").unwrap_err().is_validation());
        assert!(service.create("Lakeview", "   ").unwrap_err().is_validation());
        assert!(doc.properties.is_empty());
    }

    #[test]
    fn test_ids_unique_when_created_back_to_back() {
        let mut doc = Document::new();
        let mut service = PropertyService::new(&mut doc);

        let a = service.create("A", "1 St").unwrap();
        let b = service.create("B", "2 St").unwrap();
        let c = service.create("C", "3 St").unwrap();

        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn test_update_in_place() {
        let mut doc = Document::starter();
        let id = doc.properties[0].id;
        let mut service = PropertyService::new(&mut doc);

        let updated = service.update(id, Some("Home"), None).unwrap();

        assert_eq!(updated.name, "Home");
        assert_eq!(updated.address, "123 Example St");
        assert_eq!(doc.properties.len(), 1);
        assert_eq!(doc.properties[0].name, "Home");
    }

    #[test]
    fn test_invalid_update_leaves_property_unchanged() {
        let mut doc = Document::starter();
        let id = doc.properties[0].id;
        let mut service = PropertyService::new(&mut doc);

        assert!(service.update(id, None, Some("")).is_err());
        assert!(service
            .update(EntityId::from_raw(-5), Some("X"), None)
            .unwrap_err()
            .is_not_found());
        assert_eq!(doc.properties[0].address, "123 Example St");
    }

    #[test]
    fn test_find_by_name_or_id() {
        let mut doc = Document::starter();
        let id = doc.properties[0].id;
        let service = PropertyService::new(&mut doc);

        assert_eq!(service.find("my first property").map(|p| p.id), Some(id));
        assert_eq!(service.find(&id.to_string()).map(|p| p.id), Some(id));
        assert!(service.find("elsewhere").is_none());
    }
}

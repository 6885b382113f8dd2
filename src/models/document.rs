//! The RentLog document
//!
//! Everything a landlord records lives in one document: a schema version tag,
//! the properties, and the tenants with their bills and payments. The
//! document is pure data; reading and writing it is the gateway's job.

use serde::{Deserialize, Serialize};

use super::ids::{EntityId, IdGenerator};
use super::property::Property;
use super::tenant::Tenant;

/// Schema version written into new documents
pub const CURRENT_VERSION: u32 = 2;

/// Version assumed for files written before the tag existed
pub const LEGACY_VERSION: u32 = 1;

/// Shown in place of a property name when a tenant's property is missing
pub const UNKNOWN_PROPERTY: &str = "N/A";

fn legacy_version() -> u32 {
    LEGACY_VERSION
}

/// Root persisted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Schema tag, carried through unchanged on open
    #[serde(default = "legacy_version")]
    pub version: u32,

    /// Properties in the order they were added
    pub properties: Vec<Property>,

    /// Tenants in the order they were added
    pub tenants: Vec<Tenant>,
}

impl Document {
    /// Create an empty document at the current schema version
    pub fn new() -> Self {
        Self {
            version: CURRENT_VERSION,
            properties: Vec::new(),
            tenants: Vec::new(),
        }
    }

    /// Create the document a brand-new user starts with
    pub fn starter() -> Self {
        let mut document = Self::new();
        let id = document.id_generator().next_id();
        document
            .properties
            .push(Property::new(id, "My First Property", "123 Example St"));
        document
    }

    pub fn property(&self, id: EntityId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn property_mut(&mut self, id: EntityId) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.id == id)
    }

    pub fn tenant(&self, id: EntityId) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.id == id)
    }

    pub fn tenant_mut(&mut self, id: EntityId) -> Option<&mut Tenant> {
        self.tenants.iter_mut().find(|t| t.id == id)
    }

    /// Name of the property a tenant rents, or "N/A" if it is missing
    pub fn property_name_for(&self, tenant: &Tenant) -> &str {
        self.property(tenant.property_id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PROPERTY)
    }

    /// Tenants whose property id matches no property
    pub fn orphaned_tenants(&self) -> impl Iterator<Item = &Tenant> {
        self.tenants
            .iter()
            .filter(move |t| self.property(t.property_id).is_none())
    }

    /// Tenants renting the given property
    pub fn tenants_of(&self, property_id: EntityId) -> impl Iterator<Item = &Tenant> {
        self.tenants
            .iter()
            .filter(move |t| t.property_id == property_id)
    }

    /// Largest id used anywhere in the document
    pub fn max_id(&self) -> EntityId {
        self.properties
            .iter()
            .map(|p| p.id)
            .chain(self.tenants.iter().map(Tenant::max_id))
            .max()
            .unwrap_or(EntityId::from_raw(0))
    }

    /// Id generator that never reuses an id already in this document
    pub fn id_generator(&self) -> IdGenerator {
        IdGenerator::starting_after(self.max_id())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

//! Tenant service
//!
//! Adds and finds tenants. Tenants are never deleted; a tenant can only be
//! added to a property that exists.

use chrono::NaiveDate;

use crate::error::{RentlogError, RentlogResult};
use crate::models::{Document, EntityId, Money, Tenant};

/// A tenant together with computed ledger fields
#[derive(Debug, Clone)]
pub struct TenantSummary {
    pub tenant: Tenant,
    /// Property name, or "N/A" when the property is missing
    pub property_name: String,
    /// Sum of unpaid bills
    pub outstanding: Money,
    /// Sum of payments received
    pub total_paid: Money,
}

/// Service for tenant management
pub struct TenantService<'a> {
    document: &'a mut Document,
}

impl<'a> TenantService<'a> {
    /// Create a new tenant service
    pub fn new(document: &'a mut Document) -> Self {
        Self { document }
    }

    /// Add a tenant to an existing property
    pub fn create(
        &mut self,
        property_id: EntityId,
        name: &str,
        rent: Money,
        move_in_date: Option<NaiveDate>,
    ) -> RentlogResult<Tenant> {
        if self.document.properties.is_empty() {
            return Err(RentlogError::Validation(
                "Add a property before adding a tenant".into(),
            ));
        }
        if self.document.property(property_id).is_none() {
            return Err(RentlogError::property_not_found(property_id.to_string()));
        }

        let id = self.document.id_generator().next_id();
        let tenant = Tenant::new(id, property_id, name.trim(), rent, move_in_date);

        tenant
            .validate()
            .map_err(|e| RentlogError::Validation(e.to_string()))?;

        self.document.tenants.push(tenant.clone());
        tracing::debug!(id = %tenant.id, property = %property_id, "tenant created");
        Ok(tenant)
    }

    /// Find a tenant by ID or name (case-insensitive)
    pub fn find(&self, identifier: &str) -> Option<&Tenant> {
        find_tenant(self.document, identifier)
    }

    /// Get all tenants with their computed fields, optionally for one property
    pub fn list_with_summaries(&self, property_id: Option<EntityId>) -> Vec<TenantSummary> {
        tenant_summaries(self.document, property_id)
    }

    /// Get a tenant's summary
    pub fn get_summary(&self, id: EntityId) -> RentlogResult<TenantSummary> {
        tenant_summary(self.document, id)
    }
}

/// Summaries of all tenants, optionally for one property
pub fn tenant_summaries(document: &Document, property_id: Option<EntityId>) -> Vec<TenantSummary> {
    document
        .tenants
        .iter()
        .filter(|t| property_id.map_or(true, |id| t.property_id == id))
        .map(|t| summarize(document, t))
        .collect()
}

/// Summary of one tenant
pub fn tenant_summary(document: &Document, id: EntityId) -> RentlogResult<TenantSummary> {
    let tenant = document
        .tenant(id)
        .ok_or_else(|| RentlogError::tenant_not_found(id.to_string()))?;
    Ok(summarize(document, tenant))
}

fn summarize(document: &Document, tenant: &Tenant) -> TenantSummary {
    TenantSummary {
        tenant: tenant.clone(),
        property_name: document.property_name_for(tenant).to_string(),
        outstanding: tenant.outstanding(),
        total_paid: tenant.total_paid(),
    }
}

/// Find a tenant by ID or name (case-insensitive)
pub fn find_tenant<'d>(document: &'d Document, identifier: &str) -> Option<&'d Tenant> {
    let identifier = identifier.trim();
    if let Ok(id) = identifier.parse::<EntityId>() {
        if let Some(tenant) = document.tenant(id) {
            return Some(tenant);
        }
    }

    let lower = identifier.to_lowercase();
    document
        .tenants
        .iter()
        .find(|t| t.name.to_lowercase() == lower)
}

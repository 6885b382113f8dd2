//! Tenant model
//!
//! A tenant occupies one property and owns its bills and payments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::bill::Bill;
use super::ids::EntityId;
use super::money::Money;
use super::payment::Payment;

/// A tenant renting a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique identifier
    pub id: EntityId,

    /// Property the tenant rents; may point at a property that no longer exists
    pub property_id: EntityId,

    /// Full name
    pub name: String,

    /// Monthly rent
    pub rent: Money,

    /// Absent in files written before move-in dates were recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_in_date: Option<NaiveDate>,

    #[serde(default)]
    pub bills: Vec<Bill>,

    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Tenant {
    /// Create a new tenant with an empty ledger
    pub fn new(
        id: EntityId,
        property_id: EntityId,
        name: impl Into<String>,
        rent: Money,
        move_in_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            property_id,
            name: name.into(),
            rent,
            move_in_date,
            bills: Vec::new(),
            payments: Vec::new(),
        }
    }

    pub fn bill(&self, id: EntityId) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn bill_mut(&mut self, id: EntityId) -> Option<&mut Bill> {
        self.bills.iter_mut().find(|b| b.id == id)
    }

    pub fn payment(&self, id: EntityId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// Remove a payment, returning it if it existed
    pub fn remove_payment(&mut self, id: EntityId) -> Option<Payment> {
        let index = self.payments.iter().position(|p| p.id == id)?;
        Some(self.payments.remove(index))
    }

    /// Total of bills not yet paid
    pub fn outstanding(&self) -> Money {
        self.bills
            .iter()
            .filter(|b| !b.is_paid())
            .map(|b| b.amount)
            .sum()
    }

    /// Total of all payments received
    pub fn total_paid(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Largest id used by the tenant or anything it owns
    pub fn max_id(&self) -> EntityId {
        self.bills
            .iter()
            .map(|b| b.id)
            .chain(self.payments.iter().map(|p| p.id))
            .fold(self.id, EntityId::max)
    }

    /// Validate the tenant
    pub fn validate(&self) -> Result<(), TenantValidationError> {
        if self.name.trim().is_empty() {
            return Err(TenantValidationError::EmptyName);
        }
        if !self.rent.is_positive() {
            return Err(TenantValidationError::NonPositiveRent);
        }
        Ok(())
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for tenants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantValidationError {
    EmptyName,
    NonPositiveRent,
}

impl fmt::Display for TenantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Tenant name cannot be empty"),
            Self::NonPositiveRent => write!(f, "Rent must be greater than zero"),
        }
    }
}

impl std::error::Error for TenantValidationError {}

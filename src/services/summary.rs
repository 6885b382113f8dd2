//! Dashboard summary
//!
//! Totals shown when a document is opened.

use chrono::NaiveDate;

use crate::models::{Document, Money};

/// Figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_properties: usize,
    pub total_tenants: usize,
    /// Sum of every tenant's monthly rent
    pub rent_expected: Money,
    /// Sum of all unpaid bills
    pub outstanding: Money,
    /// Unpaid bills past their due date
    pub overdue_bills: usize,
    /// Tenants whose property is missing
    pub orphaned_tenants: usize,
}

impl DashboardSummary {
    /// Compute the dashboard as of `today`
    pub fn compute(document: &Document, today: NaiveDate) -> Self {
        Self {
            total_properties: document.properties.len(),
            total_tenants: document.tenants.len(),
            rent_expected: document.tenants.iter().map(|t| t.rent).sum(),
            outstanding: document.tenants.iter().map(|t| t.outstanding()).sum(),
            overdue_bills: document
                .tenants
                .iter()
                .flat_map(|t| t.bills.iter())
                .filter(|b| b.is_overdue(today))
                .count(),
            orphaned_tenants: document.orphaned_tenants().count(),
        }
    }
}

//! Service layer for RentLog
//!
//! The service layer provides business logic on top of the in-memory
//! document, handling validation, id allocation and computed fields.

pub mod ledger;
pub mod property;
pub mod summary;
pub mod tenant;

pub use ledger::LedgerService;
pub use property::{find_property, PropertyService};
pub use summary::DashboardSummary;
pub use tenant::{find_tenant, tenant_summaries, tenant_summary, TenantService, TenantSummary};

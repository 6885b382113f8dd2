//! Display formatting for terminal output
//!
//! Provides utilities for formatting the document for terminal display:
//! property and tenant tables, tenant ledgers and the dashboard.

pub mod property;
pub mod summary;
pub mod tenant;

pub use property::format_property_list;
pub use summary::format_dashboard;
pub use tenant::{format_bill_list, format_payment_list, format_tenant_details, format_tenant_list};

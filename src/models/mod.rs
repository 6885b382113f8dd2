//! Core data models for RentLog
//!
//! This module contains the data structures of the landlord's record:
//! properties, tenants, bills, payments and the document that holds them.

pub mod bill;
pub mod document;
pub mod ids;
pub mod money;
pub mod payment;
pub mod property;
pub mod tenant;

pub use bill::Bill;
pub use document::{Document, CURRENT_VERSION, LEGACY_VERSION, UNKNOWN_PROPERTY};
pub use ids::{EntityId, IdGenerator};
pub use money::Money;
pub use payment::{Payment, PaymentType};
pub use property::Property;
pub use tenant::Tenant;

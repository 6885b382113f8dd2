//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod document;
pub mod ledger;
pub mod property;
pub mod shell;
pub mod tenant;

pub use document::{handle_new_command, handle_save_as_command, handle_summary_command};
pub use ledger::{handle_bill_command, handle_payment_command, BillCommands, PaymentCommands};
pub use property::{handle_property_command, PropertyCommands};
pub use shell::Shell;
pub use tenant::{handle_tenant_command, TenantCommands};

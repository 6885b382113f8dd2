//! Configuration module for RentLog
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - Host file profile preference

pub mod paths;
pub mod settings;

pub use paths::RentlogPaths;
pub use settings::{ProfilePreference, Settings};

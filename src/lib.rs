//! RentLog - a landlord's record keeper
//!
//! This library provides the core of RentLog: properties, tenants, bills and
//! payments kept in a single JSON document that lives wherever the user
//! chooses. All reads and writes of that document go through one persistence
//! gateway, which works with hosts that hand out reusable file handles as
//! well as hosts that can only upload and download.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: The document and its entities
//! - `storage`: JSON codec, schema migration and atomic file writes
//! - `gateway`: Opening and saving documents through the host
//! - `services`: Validated edits and computed summaries
//! - `display`: Plain-text tables for the terminal
//! - `cli`: Command handlers for the `rentlog` binary
//! - `logging`: Diagnostic log setup
//!
//! # Example
//!
//! ```rust,ignore
//! use rentlog::config::{RentlogPaths, Settings};
//! use rentlog::gateway::{build_gateway, HostProfile, PersistenceSession, StdinPrompt};
//!
//! let paths = RentlogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut gateway = build_gateway(
//!     HostProfile::Handle,
//!     Box::new(StdinPrompt),
//!     paths.downloads_dir(),
//!     &settings.default_file_name,
//! );
//! let mut session = PersistenceSession::new();
//! let outcome = gateway.open_document(&mut session)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{RentlogError, RentlogResult};

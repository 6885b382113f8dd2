//! Persistence gateway
//!
//! The only component that moves a [`Document`] between memory and the host
//! file system. One trait, [`DocumentGateway`], with two variants selected
//! once at startup:
//!
//! - [`HandleGateway`] for hosts that hand out reusable file handles
//! - [`FallbackGateway`] for hosts limited to upload and download
//!
//! # Example
//!
//! ```rust,ignore
//! use rentlog::gateway::{build_gateway, HostProfile, OpenOutcome, PersistenceSession};
//!
//! let mut gateway = build_gateway(HostProfile::Handle, prompt, downloads_dir, DEFAULT_FILE_NAME);
//! let mut session = PersistenceSession::new();
//!
//! if let OpenOutcome::Opened(opened) = gateway.open_document(&mut session)? {
//!     let mut document = opened.document;
//!     // ... edit ...
//!     gateway.save_document(&mut session, &document)?;
//! }
//! ```

pub mod fallback;
pub mod fs;
pub mod handle;
pub mod host;
pub mod session;

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RentlogResult;
use crate::models::Document;

pub use fallback::FallbackGateway;
pub use fs::{FsFallbackHost, FsFileHandle, FsHandleHost, PathPrompt, PresetPrompt, PromptRequest, StdinPrompt};
pub use handle::HandleGateway;
pub use host::{FallbackHost, FileHandle, HandleHost, UploadedFile};
pub use session::PersistenceSession;

/// Name suggested when a document is saved for the first time
pub const DEFAULT_FILE_NAME: &str = "rentlog-data.json";

/// Date-stamped name for downloads that have no better name
pub fn dated_file_name(date: NaiveDate) -> String {
    format!("rentlog-data-{}.json", date.format("%Y-%m-%d"))
}

/// Host capability profile, fixed for the lifetime of a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostProfile {
    /// Reusable, writable file handles
    Handle,
    /// One-shot upload and download
    Fallback,
}

impl fmt::Display for HostProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle => write!(f, "handle"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// How the shell should present saving for the active profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    /// Label for the save action
    pub save_label: &'static str,
    /// Whether "save" can overwrite the opened file without asking
    pub saves_in_place: bool,
}

impl Affordances {
    pub fn for_profile(profile: HostProfile) -> Self {
        match profile {
            HostProfile::Handle => Self {
                save_label: "Save",
                saves_in_place: true,
            },
            HostProfile::Fallback => Self {
                save_label: "Download Data File",
                saves_in_place: false,
            },
        }
    }
}

/// A document successfully read from a file
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedDocument {
    /// File name for display
    pub name: String,
    pub document: Document,
}

/// Result of asking the user for a document to open
#[derive(Debug, Clone, PartialEq)]
pub enum OpenOutcome {
    Opened(OpenedDocument),
    /// The user dismissed the picker; nothing changed
    Cancelled,
}

/// Result of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written (or downloaded) under `name`
    Saved { name: String },
    /// The user dismissed the picker; nothing changed
    Cancelled,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Saved { name } => Some(name),
            Self::Cancelled => None,
        }
    }
}

/// Open and save documents through the host's file capability
///
/// Expected conditions (a dismissed picker) are outcomes, not errors.
/// Errors are `InvalidDocument`/`Parse` for unreadable files and `Write` for
/// failed writes; neither alters the session or the caller's document.
pub trait DocumentGateway {
    /// The profile this gateway was built for
    fn profile(&self) -> HostProfile;

    /// How the shell should present saving
    fn affordances(&self) -> Affordances {
        Affordances::for_profile(self.profile())
    }

    /// Ask the user for a document and read it
    fn open_document(&mut self, session: &mut PersistenceSession) -> RentlogResult<OpenOutcome>;

    /// Save to the current file, or behave as `save_document_as` when there is none
    fn save_document(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
    ) -> RentlogResult<SaveOutcome>;

    /// Save to a newly chosen file
    fn save_document_as(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
    ) -> RentlogResult<SaveOutcome>;
}

/// Build the filesystem-backed gateway for a profile
///
/// `prompt` answers the pickers; fallback downloads land in `downloads_dir`.
/// `default_name` is suggested the first time a handle-profile document is
/// saved.
pub fn build_gateway(
    profile: HostProfile,
    prompt: Box<dyn PathPrompt>,
    downloads_dir: PathBuf,
    default_name: &str,
) -> Box<dyn DocumentGateway> {
    tracing::debug!(%profile, "selecting document gateway");
    match profile {
        HostProfile::Handle => Box::new(
            HandleGateway::new(FsHandleHost::new(prompt)).with_default_name(default_name),
        ),
        HostProfile::Fallback => {
            Box::new(FallbackGateway::new(FsFallbackHost::new(prompt, downloads_dir)))
        }
    }
}

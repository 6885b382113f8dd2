//! Persistence session
//!
//! The shell owns one session per open document and lends it to the gateway
//! for each operation. Only `open_document` and `save_document_as` replace
//! the retained target.

use std::path::Path;

use super::host::FileHandle;

/// The current file as far as "save" is concerned
#[derive(Debug, Default)]
pub struct PersistenceSession {
    /// Handle-capable profile only
    retained: Option<Box<dyn FileHandle>>,
    /// For user feedback; not part of the document
    display_name: Option<String>,
    /// Name of the file the document was read from
    source_name: Option<String>,
}

impl PersistenceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether saves can go to a retained file
    pub fn has_retained_target(&self) -> bool {
        self.retained.is_some()
    }

    pub fn retained_target(&self) -> Option<&dyn FileHandle> {
        self.retained.as_deref()
    }

    /// Location of the retained file, when the host exposes one
    pub fn retained_location(&self) -> Option<&Path> {
        self.retained.as_ref().and_then(|h| h.location())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Name of the opened file, unchanged by later downloads
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Make `handle` the target of subsequent saves
    pub(crate) fn retain(&mut self, handle: Box<dyn FileHandle>) -> &dyn FileHandle {
        self.display_name = Some(handle.name());
        &**self.retained.insert(handle)
    }

    pub(crate) fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Record the file a document was read from without keeping a handle
    pub(crate) fn set_source_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.display_name = Some(name.clone());
        self.source_name = Some(name);
    }
}

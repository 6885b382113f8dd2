//! Host file capabilities
//!
//! A host offers one of two capability sets. Capability A hands out reusable,
//! writable handles to user-chosen files. Capability B can only take a
//! one-shot upload and offer a download. Pickers report a dismissal as
//! `Ok(None)`; `Err` is reserved for a host that failed outright.

use std::fmt;
use std::path::Path;

use crate::error::RentlogResult;

/// A reusable reference to one file chosen by the user
pub trait FileHandle {
    /// File name shown to the user
    fn name(&self) -> String;

    /// Read the whole file
    fn read(&self) -> RentlogResult<String>;

    /// Replace the file's contents
    ///
    /// Failures are reported as `RentlogError::Write` and leave the file as
    /// it was.
    fn write(&self, contents: &str) -> RentlogResult<()>;

    /// Location on the local file system, if the host exposes one
    fn location(&self) -> Option<&Path> {
        None
    }
}

impl fmt::Debug for dyn FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name())
            .field("location", &self.location())
            .finish()
    }
}

/// Capability A: pickers that return reusable handles
pub trait HandleHost {
    /// Let the user choose an existing file to open
    fn pick_file_to_open(&mut self) -> RentlogResult<Option<Box<dyn FileHandle>>>;

    /// Let the user choose where to save, suggesting a file name
    fn pick_file_to_save_as(
        &mut self,
        suggested_name: &str,
    ) -> RentlogResult<Option<Box<dyn FileHandle>>>;
}

/// A file the user handed over through a one-shot upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub contents: String,
}

/// Capability B: one-shot upload and download
pub trait FallbackHost {
    /// Ask the user for a file to upload
    fn prompt_upload(&mut self) -> RentlogResult<Option<UploadedFile>>;

    /// Offer `contents` to the user as a download named `filename`
    ///
    /// Returns the name the download actually received.
    fn offer_download(&mut self, contents: &str, filename: &str) -> RentlogResult<String>;
}

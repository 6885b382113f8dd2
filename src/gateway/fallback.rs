//! Gateway for hosts limited to upload and download
//!
//! No handle can be kept, so every save is a download.

use chrono::{Local, NaiveDate};

use crate::error::RentlogResult;
use crate::models::Document;
use crate::storage::{parse_document_with_report, serialize_document};

use super::host::FallbackHost;
use super::session::PersistenceSession;
use super::{dated_file_name, DocumentGateway, HostProfile, OpenOutcome, OpenedDocument, SaveOutcome};

/// Reads uploads and offers downloads
pub struct FallbackGateway<F> {
    host: F,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<F: FallbackHost> FallbackGateway<F> {
    pub fn new(host: F) -> Self {
        Self {
            host,
            today: local_today,
        }
    }

    /// Use a fixed calendar for generated file names
    pub fn with_calendar(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn host(&self) -> &F {
        &self.host
    }

    fn download(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
        filename: &str,
    ) -> RentlogResult<SaveOutcome> {
        let text = serialize_document(document)?;
        let name = self.host.offer_download(&text, filename).map_err(|e| {
            tracing::error!(file = %filename, error = %e, "download failed");
            e
        })?;
        tracing::info!(file = %name, bytes = text.len(), "document downloaded");
        session.set_display_name(name.clone());
        Ok(SaveOutcome::Saved { name })
    }
}

impl<F: FallbackHost> DocumentGateway for FallbackGateway<F> {
    fn profile(&self) -> HostProfile {
        HostProfile::Fallback
    }

    fn open_document(&mut self, session: &mut PersistenceSession) -> RentlogResult<OpenOutcome> {
        let Some(upload) = self.host.prompt_upload()? else {
            tracing::debug!("upload dismissed");
            return Ok(OpenOutcome::Cancelled);
        };

        let (document, report) = parse_document_with_report(&upload.contents).map_err(|e| {
            tracing::warn!(file = %upload.name, error = %e, "rejected data file");
            e
        })?;
        for step in &report.applied {
            tracing::info!(file = %upload.name, step, "migrated document");
        }

        session.set_source_name(upload.name.clone());
        tracing::info!(file = %upload.name, "document uploaded");

        Ok(OpenOutcome::Opened(OpenedDocument {
            name: upload.name,
            document,
        }))
    }

    /// Download under the opened file's name, or a dated default
    fn save_document(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
    ) -> RentlogResult<SaveOutcome> {
        let filename = match session.source_name() {
            Some(name) => name.to_string(),
            None => dated_file_name((self.today)()),
        };
        self.download(session, document, &filename)
    }

    /// Download under a freshly generated dated name
    fn save_document_as(
        &mut self,
        session: &mut PersistenceSession,
        document: &Document,
    ) -> RentlogResult<SaveOutcome> {
        let filename = dated_file_name((self.today)());
        self.download(session, document, &filename)
    }
}

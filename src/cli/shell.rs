//! Application shell
//!
//! Owns the gateway and the persistence session for one command run. Every
//! command opens a document, reads or mutates it, and (for edits) saves it
//! back through the same gateway.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::config::{RentlogPaths, Settings};
use crate::error::{RentlogError, RentlogResult};
use crate::gateway::{
    build_gateway, DocumentGateway, HostProfile, OpenOutcome, PathPrompt, PersistenceSession,
    PresetPrompt, SaveOutcome, StdinPrompt,
};
use crate::models::{Document, Money};

/// The gateway, its session and the user's settings
pub struct Shell {
    paths: RentlogPaths,
    settings: Settings,
    gateway: Box<dyn DocumentGateway>,
    session: PersistenceSession,
}

impl Shell {
    /// Build a shell whose pickers take `answers` first and then ask on stdin
    pub fn new(
        paths: RentlogPaths,
        settings: Settings,
        profile: HostProfile,
        answers: Vec<PathBuf>,
    ) -> Self {
        let prompt = PresetPrompt::new(answers).then_ask(Box::new(StdinPrompt));
        Self::with_prompt(paths, settings, profile, Box::new(prompt))
    }

    /// Build a shell around any prompt
    pub fn with_prompt(
        paths: RentlogPaths,
        settings: Settings,
        profile: HostProfile,
        prompt: Box<dyn PathPrompt>,
    ) -> Self {
        let gateway = build_gateway(
            profile,
            prompt,
            paths.downloads_dir(),
            &settings.default_file_name,
        );
        Self {
            paths,
            settings,
            gateway,
            session: PersistenceSession::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn profile(&self) -> HostProfile {
        self.gateway.profile()
    }

    pub fn session(&self) -> &PersistenceSession {
        &self.session
    }

    /// Where the fallback profile puts downloaded files
    pub fn downloads_dir(&self) -> PathBuf {
        self.paths.downloads_dir()
    }

    /// Currency symbol for amounts
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Format an amount with the configured currency
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Open a document; `None` when the picker was dismissed
    pub fn open(&mut self) -> RentlogResult<Option<Document>> {
        match self.gateway.open_document(&mut self.session)? {
            OpenOutcome::Opened(opened) => {
                tracing::debug!(file = %opened.name, "opened");
                self.remember_current_file();
                Ok(Some(opened.document))
            }
            OpenOutcome::Cancelled => Ok(None),
        }
    }

    /// Save to the current file (or choose one)
    pub fn save(&mut self, document: &Document) -> RentlogResult<SaveOutcome> {
        let outcome = self.gateway.save_document(&mut self.session, document)?;
        self.report(&outcome);
        Ok(outcome)
    }

    /// Save to a newly chosen file
    pub fn save_as(&mut self, document: &Document) -> RentlogResult<SaveOutcome> {
        // The new target is retained even if the write fails
        let result = self.gateway.save_document_as(&mut self.session, document);
        self.remember_current_file();
        let outcome = result?;
        self.report(&outcome);
        Ok(outcome)
    }

    /// Open, apply `change`, and save
    ///
    /// Returns `None` when either picker was dismissed; nothing is written in
    /// that case.
    pub fn edit<T>(
        &mut self,
        change: impl FnOnce(&mut Document) -> RentlogResult<T>,
    ) -> RentlogResult<Option<T>> {
        let Some(mut document) = self.open()? else {
            return Ok(None);
        };

        let value = change(&mut document)?;

        match self.save(&document)? {
            SaveOutcome::Saved { .. } => Ok(Some(value)),
            SaveOutcome::Cancelled => {
                eprintln!("Changes were not saved.");
                Ok(None)
            }
        }
    }

    /// Open and read without saving
    pub fn view<T>(&mut self, read: impl FnOnce(&Document) -> T) -> RentlogResult<Option<T>> {
        Ok(self.open()?.map(|document| read(&document)))
    }

    fn report(&mut self, outcome: &SaveOutcome) {
        if let SaveOutcome::Saved { name } = outcome {
            if self.gateway.affordances().saves_in_place {
                eprintln!("Saved {}", name);
            } else {
                eprintln!("Downloaded {} to {}", name, self.downloads_dir().display());
            }
            self.remember_current_file();
        }
    }

    /// Keep the retained file as the default for the next run
    ///
    /// Failing to record it never fails the command.
    fn remember_current_file(&mut self) {
        if let Err(e) = self.try_remember_current_file() {
            tracing::warn!(error = %e, "could not remember the current file");
        }
    }

    fn try_remember_current_file(&mut self) -> RentlogResult<()> {
        let location = match self.session.retained_location() {
            Some(path) if path.is_relative() => Some(std::env::current_dir()?.join(path)),
            Some(path) => Some(path.to_path_buf()),
            None => None,
        };
        if self.settings.remember_recent_file(location) {
            self.settings.save(&self.paths)?;
            tracing::debug!(file = ?self.settings.recent_file, "remembered current file");
        }
        Ok(())
    }
}

/// Today's date on the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date argument, defaulting to today
pub fn parse_date_arg(value: Option<&str>) -> RentlogResult<NaiveDate> {
    match value {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            RentlogError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(today()),
    }
}

/// Parse an amount argument such as "5000" or "1,250.50"
pub fn parse_money_arg(value: &str) -> RentlogResult<Money> {
    Money::parse(value).map_err(|e| {
        RentlogError::Validation(format!(
            "Invalid amount: '{}'. Use format like '5000' or '5000.50'. Error: {}",
            value, e
        ))
    })
}

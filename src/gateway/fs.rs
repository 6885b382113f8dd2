//! Filesystem hosts
//!
//! Both host capabilities implemented over local files. A [`PathPrompt`]
//! stands in for the native picker: it asks the user for a path, and an empty
//! answer dismisses it.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{RentlogError, RentlogResult};
use crate::storage::{decode_document_text, read_bytes, write_text_atomic};

use super::host::{FallbackHost, FileHandle, HandleHost, UploadedFile};
use super::DEFAULT_FILE_NAME;

/// What a picker is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRequest<'a> {
    /// An existing file to read
    Open,
    /// Somewhere to write, with a suggested file name
    SaveAs { suggested_name: &'a str },
}

/// Answers file pickers with a path, or `None` when dismissed
pub trait PathPrompt {
    fn ask(&mut self, request: PromptRequest<'_>) -> RentlogResult<Option<PathBuf>>;
}

/// Asks on the terminal
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl PathPrompt for StdinPrompt {
    fn ask(&mut self, request: PromptRequest<'_>) -> RentlogResult<Option<PathBuf>> {
        let message = match request {
            PromptRequest::Open => "RentLog file to open (empty to cancel): ".to_string(),
            PromptRequest::SaveAs { suggested_name } => {
                format!("Save as (file or folder, suggested {}; empty to cancel): ", suggested_name)
            }
        };

        let mut stderr = io::stderr();
        write!(stderr, "{}", message)?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }
}

/// Answers from a queue, then defers to another prompt (or cancels)
pub struct PresetPrompt {
    answers: VecDeque<PathBuf>,
    fallback: Option<Box<dyn PathPrompt>>,
}

impl PresetPrompt {
    pub fn new(answers: Vec<PathBuf>) -> Self {
        Self {
            answers: answers.into(),
            fallback: None,
        }
    }

    /// Ask `prompt` once the preset answers run out
    pub fn then_ask(mut self, prompt: Box<dyn PathPrompt>) -> Self {
        self.fallback = Some(prompt);
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PathPrompt for PresetPrompt {
    fn ask(&mut self, request: PromptRequest<'_>) -> RentlogResult<Option<PathBuf>> {
        if let Some(answer) = self.answers.pop_front() {
            return Ok(Some(answer));
        }
        match self.fallback.as_mut() {
            Some(prompt) => prompt.ask(request),
            None => Ok(None),
        }
    }
}

/// Handle to a local file
#[derive(Debug, Clone)]
pub struct FsFileHandle {
    path: PathBuf,
}

impl FsFileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileHandle for FsFileHandle {
    fn name(&self) -> String {
        file_name_of(&self.path)
    }

    fn read(&self) -> RentlogResult<String> {
        decode_document_text(read_bytes(&self.path)?)
    }

    fn write(&self, contents: &str) -> RentlogResult<()> {
        write_text_atomic(&self.path, contents)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Capability A over the local file system
pub struct FsHandleHost {
    prompt: Box<dyn PathPrompt>,
}

impl FsHandleHost {
    pub fn new(prompt: Box<dyn PathPrompt>) -> Self {
        Self { prompt }
    }
}

impl HandleHost for FsHandleHost {
    fn pick_file_to_open(&mut self) -> RentlogResult<Option<Box<dyn FileHandle>>> {
        let Some(path) = self.prompt.ask(PromptRequest::Open)? else {
            return Ok(None);
        };
        if !path.is_file() {
            return Err(RentlogError::Io(format!("No such file: {}", path.display())));
        }
        Ok(Some(Box::new(FsFileHandle::new(path))))
    }

    fn pick_file_to_save_as(
        &mut self,
        suggested_name: &str,
    ) -> RentlogResult<Option<Box<dyn FileHandle>>> {
        let Some(path) = self.prompt.ask(PromptRequest::SaveAs { suggested_name })? else {
            return Ok(None);
        };
        let path = if path.is_dir() {
            path.join(suggested_name)
        } else {
            path
        };
        Ok(Some(Box::new(FsFileHandle::new(path))))
    }
}

/// Capability B over the local file system
///
/// Downloads land in one directory and never overwrite an existing file.
pub struct FsFallbackHost {
    prompt: Box<dyn PathPrompt>,
    downloads_dir: PathBuf,
}

impl FsFallbackHost {
    pub fn new(prompt: Box<dyn PathPrompt>, downloads_dir: PathBuf) -> Self {
        Self {
            prompt,
            downloads_dir,
        }
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }
}

/// First free name in `dir`, adding " (n)" before the extension as needed
fn unused_download_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let original = Path::new(filename);
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = original
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| dir.join(format!("{} ({}){}", stem, n, extension)))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

impl FallbackHost for FsFallbackHost {
    fn prompt_upload(&mut self) -> RentlogResult<Option<UploadedFile>> {
        let Some(path) = self.prompt.ask(PromptRequest::Open)? else {
            return Ok(None);
        };
        let contents = decode_document_text(read_bytes(&path)?)?;
        Ok(Some(UploadedFile {
            name: file_name_of(&path),
            contents,
        }))
    }

    fn offer_download(&mut self, contents: &str, filename: &str) -> RentlogResult<String> {
        // Only the final component; a download cannot pick its directory
        let filename = Path::new(filename)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        std::fs::create_dir_all(&self.downloads_dir).map_err(|e| {
            RentlogError::Write(format!(
                "Failed to create {}: {}",
                self.downloads_dir.display(),
                e
            ))
        })?;

        let path = unused_download_path(&self.downloads_dir, &filename);
        write_text_atomic(&path, contents)?;
        Ok(file_name_of(&path))
    }
}

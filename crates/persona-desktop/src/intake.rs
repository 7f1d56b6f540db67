//! File intake: turns file selections on an input control into generated
//! documents.
//!
//! A [`FileInput`] publishes [`Selection`]s. [`FileIntake::attach`] binds a
//! handler to it and returns a [`Subscription`]; each selection then runs one
//! independent pipeline (type check, async read, parse, render).

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use persona_export::sink::ContextHandle;

use crate::error::GenerateError;
use crate::generator::Generator;

pub const FILE_INPUT_ID: &str = "json-file-input";
pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    /// Media type declared for the file. Only this is checked, never the
    /// contents.
    pub media_type: Option<String>,
}

impl SelectedFile {
    /// Declare the media type from the extension, the way a browser file
    /// picker does.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = media_type_for(&path).map(str::to_string);
        Self::with_media_type(path, media_type)
    }

    pub fn with_media_type(path: impl Into<PathBuf>, media_type: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path,
            media_type,
        }
    }
}

pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let media_type = match ext.as_str() {
        "json" => JSON_MEDIA_TYPE,
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "js" | "mjs" => "text/javascript",
        "xml" => "text/xml",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(media_type)
}

/// One change event: the files chosen on the control. Only the first one is
/// considered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub files: Vec<SelectedFile>,
}

impl Selection {
    pub fn single(file: SelectedFile) -> Self {
        Self { files: vec![file] }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// A file-input control identified by a fixed id.
///
/// At most one handler is attached at a time. Selections queue without bound
/// until the handler takes them, so none is ever skipped.
pub struct FileInput {
    id: String,
    handler: Mutex<Option<mpsc::UnboundedSender<Selection>>>,
}

impl FileInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            handler: Mutex::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Publish a selection. Returns `false` when no handler is attached.
    pub fn select(&self, selection: Selection) -> bool {
        let handler = self.handler.lock().unwrap_or_else(PoisonError::into_inner);
        let delivered = handler
            .as_ref()
            .is_some_and(|tx| tx.send(selection).is_ok());
        if !delivered {
            tracing::debug!(input = %self.id, "selection dropped, no handler attached");
        }
        delivered
    }

    /// Install a new handler channel, replacing any previous one.
    fn connect(&self) -> mpsc::UnboundedReceiver<Selection> {
        let (tx, rx) = mpsc::unbounded_channel();
        let previous = self
            .handler
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(tx);
        if previous.is_some() {
            tracing::debug!(input = %self.id, "replacing attached handler");
        }
        rx
    }
}

/// Counts of selections handled by a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakeStats {
    pub handled: usize,
    pub failed: usize,
}

/// Handle to an attached intake. Dropping it (or calling [`dispose`]) stops
/// handling further selections.
///
/// [`dispose`]: Subscription::dispose
pub struct Subscription {
    task: Option<JoinHandle<IntakeStats>>,
}

impl Subscription {
    pub fn dispose(self) {
        drop(self);
    }

    /// Wait until the control is gone and every pending selection has been
    /// handled.
    pub async fn join(mut self) -> IntakeStats {
        let Some(task) = self.task.take() else {
            return IntakeStats::default();
        };
        match task.await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!(error = %e, "file intake task ended abnormally");
                IntakeStats::default()
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[derive(Clone)]
pub struct FileIntake {
    generator: Generator,
}

impl FileIntake {
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    /// Bind a handler to `input`. Selections are handled one at a time, in
    /// the order they were made. Must be called within a tokio runtime.
    pub fn attach(input: &FileInput, generator: Generator) -> Subscription {
        let intake = Self::new(generator);
        let mut events = input.connect();
        let id = input.id().to_string();

        let task = tokio::spawn(async move {
            let mut stats = IntakeStats::default();
            while let Some(selection) = events.recv().await {
                stats.handled += 1;
                if intake.process(selection).await.is_err() {
                    stats.failed += 1;
                }
            }
            tracing::debug!(input = %id, handled = stats.handled, "file input closed");
            stats
        });

        Subscription { task: Some(task) }
    }

    /// Run the pipeline for one selection and report any failure.
    pub async fn process(&self, selection: Selection) -> Result<ContextHandle, GenerateError> {
        self.generator.report(self.run(selection).await)
    }

    /// Run the pipeline for one selection without reporting.
    ///
    /// A file not declared as JSON is rejected before it is read.
    pub async fn run(&self, selection: Selection) -> Result<ContextHandle, GenerateError> {
        let file = selection
            .files
            .into_iter()
            .next()
            .ok_or(GenerateError::InvalidFileType { media_type: None })?;

        if file.media_type.as_deref() != Some(JSON_MEDIA_TYPE) {
            return Err(GenerateError::InvalidFileType {
                media_type: file.media_type,
            });
        }

        tracing::info!(file = %file.name, "reading configuration");
        let text = read_text(&file.path).await?;
        self.generator.try_generate_text(&text)
    }
}

/// Read a whole file as UTF-8 text. A leading byte-order mark is dropped and
/// invalid sequences become U+FFFD.
pub async fn read_text(path: &Path) -> Result<String, GenerateError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| GenerateError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text.as_ref()).to_string())
}

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::error::SinkError;

/// Where a rendered document ended up. Once returned, the browsing context
/// belongs to whoever displays it; the handle only describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextHandle {
    pub location: String,
}

/// A destination that opens a new browsing context for an HTML document,
/// writes the document into it and finalizes it.
pub trait DocumentSink: Send + Sync {
    fn render(&self, html: &str) -> Result<ContextHandle, SinkError>;
}

/// Keeps rendered documents in memory. Can be told to refuse every render,
/// standing in for a browser that blocks new windows.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<Vec<String>>,
    blocked: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocked() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            blocked: true,
        }
    }

    /// Every document rendered so far, oldest first.
    pub fn documents(&self) -> Vec<String> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DocumentSink for MemorySink {
    fn render(&self, html: &str) -> Result<ContextHandle, SinkError> {
        if self.blocked {
            return Err(SinkError::Blocked(
                "memory sink refuses new contexts".to_string(),
            ));
        }

        let mut documents = self
            .documents
            .lock()
            .map_err(|e| SinkError::Write(e.to_string()))?;
        documents.push(html.to_string());

        Ok(ContextHandle {
            location: format!("memory:{}", documents.len() - 1),
        })
    }
}

/// Writes each document to an `io::Write` (e.g. stdout) and flushes it.
pub struct WriterSink<W> {
    writer: Mutex<W>,
    label: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> DocumentSink for WriterSink<W> {
    fn render(&self, html: &str) -> Result<ContextHandle, SinkError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| SinkError::Write(e.to_string()))?;
        writer.write_all(html.as_bytes())?;
        writer.flush()?;

        Ok(ContextHandle {
            location: self.label.clone(),
        })
    }
}

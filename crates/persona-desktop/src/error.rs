use std::path::PathBuf;

use thiserror::Error;

use persona_core::error::CoreError;
use persona_export::error::{ExportError, SinkError};

/// Why one run of the generation pipeline stopped.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid file type: {}", .media_type.as_deref().unwrap_or("none"))]
    InvalidFileType { media_type: Option<String> },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ParseFailure(#[source] CoreError),

    #[error("popup blocked: {0}")]
    PopupBlocked(String),

    #[error("failed to generate document: {0}")]
    RenderFailure(String),

    #[error("not a DNA profile file: {}", .path.display())]
    InvalidProfile { path: PathBuf },
}

impl GenerateError {
    /// The text shown to the user in an alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => "Please upload a valid JSON file.",
            Self::ReadFailure { .. } => "Failed to read the file. Please try again.",
            Self::ParseFailure(_) => "Failed to parse JSON file. Please check the file format.",
            Self::PopupBlocked(_) => {
                "Popup blocked by the browser. Please allow popups to generate the theme."
            }
            Self::RenderFailure(_) => "Failed to generate theme. Please check your DNA file.",
            Self::InvalidProfile { .. } => "Invalid file. Please upload a valid DNA JSON file.",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => "invalid_file_type",
            Self::ReadFailure { .. } => "read_failure",
            Self::ParseFailure(_) => "parse_failure",
            Self::PopupBlocked(_) => "popup_blocked",
            Self::RenderFailure(_) => "render_failure",
            Self::InvalidProfile { .. } => "invalid_profile",
        }
    }
}

impl From<ExportError> for GenerateError {
    fn from(e: ExportError) -> Self {
        GenerateError::RenderFailure(e.to_string())
    }
}

impl From<SinkError> for GenerateError {
    fn from(e: SinkError) -> Self {
        match e {
            SinkError::Blocked(reason) => GenerateError::PopupBlocked(reason),
            SinkError::Write(reason) => GenerateError::RenderFailure(reason),
        }
    }
}

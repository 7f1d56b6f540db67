use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}

/// Failure to put a finished document in front of the user.
#[derive(Debug, Error)]
pub enum SinkError {
    /// No browsing context could be created (e.g. the browser refused or
    /// could not be launched).
    #[error("browsing context blocked: {0}")]
    Blocked(String),

    #[error("failed to write document: {0}")]
    Write(String),
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Write(e.to_string())
    }
}

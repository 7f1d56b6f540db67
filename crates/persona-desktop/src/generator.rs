use std::sync::Arc;

use persona_core::models::configuration::Configuration;
use persona_export::render::build_document;
use persona_export::sink::{ContextHandle, DocumentSink};

use crate::error::GenerateError;
use crate::notify::Notifier;

/// Turns a configuration into a rendered document. Failures are reported
/// exactly once: an alert for the user plus an error log.
#[derive(Clone)]
pub struct Generator {
    sink: Arc<dyn DocumentSink>,
    notifier: Arc<dyn Notifier>,
}

impl Generator {
    pub fn new(sink: Arc<dyn DocumentSink>, notifier: Arc<dyn Notifier>) -> Self {
        Self { sink, notifier }
    }

    /// Parse JSON text and render it, reporting any failure.
    pub fn generate_text(&self, text: &str) -> Result<ContextHandle, GenerateError> {
        self.report(self.try_generate_text(text))
    }

    /// Render an already-parsed configuration, reporting any failure.
    pub fn generate_config(&self, config: &Configuration) -> Result<ContextHandle, GenerateError> {
        self.report(self.try_generate_config(config))
    }

    /// Parse and render without reporting. Malformed JSON stops the run
    /// before any browsing context is requested.
    pub fn try_generate_text(&self, text: &str) -> Result<ContextHandle, GenerateError> {
        let config = Configuration::parse(text).map_err(GenerateError::ParseFailure)?;
        self.try_generate_config(&config)
    }

    pub fn try_generate_config(
        &self,
        config: &Configuration,
    ) -> Result<ContextHandle, GenerateError> {
        let html = build_document(config)?;
        let handle = self.sink.render(&html)?;
        tracing::info!(location = %handle.location, "document rendered");
        Ok(handle)
    }

    /// Surface a failed run to the user and the log; successes pass through.
    pub fn report<T>(&self, result: Result<T, GenerateError>) -> Result<T, GenerateError> {
        if let Err(e) = &result {
            tracing::error!(kind = e.kind(), error = %e, "generation failed");
            self.notifier.alert(e.user_message());
        }
        result
    }
}

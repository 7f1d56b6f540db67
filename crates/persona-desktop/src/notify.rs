use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// User-facing notification channel for pipeline failures.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Native modal dialog. Must be driven from the main thread on macOS, which
/// holds as long as the binary runs a current-thread runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Persona")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Prints alerts to stderr, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

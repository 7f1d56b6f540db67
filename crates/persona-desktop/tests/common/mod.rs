#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use persona_desktop::generator::Generator;
use persona_desktop::notify::Notifier;
use persona_export::sink::MemorySink;

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub struct Harness {
    pub sink: Arc<MemorySink>,
    pub notifier: Arc<RecordingNotifier>,
    pub generator: Generator,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_sink(MemorySink::new())
    }

    pub fn blocked() -> Self {
        Self::with_sink(MemorySink::blocked())
    }

    fn with_sink(sink: MemorySink) -> Self {
        let sink = Arc::new(sink);
        let notifier = Arc::new(RecordingNotifier::default());
        let generator = Generator::new(sink.clone(), notifier.clone());
        Self {
            sink,
            notifier,
            generator,
        }
    }
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

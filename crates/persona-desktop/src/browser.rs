use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use persona_export::error::SinkError;
use persona_export::sink::{ContextHandle, DocumentSink};

/// How a generated document is handed to a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    /// The platform's default handler (`open`, `xdg-open`, `start`).
    System,
    /// A user-supplied command line; the document path is appended. Words
    /// are split on whitespace, and double quotes group a word that contains
    /// spaces, e.g. `"C:\Program Files\Firefox\firefox.exe" --new-tab`.
    Command(String),
}

impl Launcher {
    pub fn from_setting(command: Option<&str>) -> Self {
        match command.map(str::trim) {
            Some(cmd) if !cmd.is_empty() => Self::Command(cmd.to_string()),
            _ => Self::System,
        }
    }

    fn open(&self, path: &Path) -> Result<(), SinkError> {
        match self {
            Self::System => {
                let status = system_command(path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .map_err(|e| SinkError::Blocked(format!("cannot launch browser: {e}")))?;
                if !status.success() {
                    return Err(SinkError::Blocked(format!(
                        "browser launcher exited with {status}"
                    )));
                }
                Ok(())
            }
            Self::Command(cmd) => {
                let words = command_words(cmd);
                let (program, args) = words
                    .split_first()
                    .ok_or_else(|| SinkError::Blocked("empty browser command".to_string()))?;
                Command::new(program)
                    .args(args)
                    .arg(path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|e| SinkError::Blocked(format!("cannot launch `{program}`: {e}")))?;
                Ok(())
            }
        }
    }
}

/// Split a command line into words. Double quotes group text containing
/// whitespace and are dropped from the result.
pub fn command_words(cmd: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in cmd.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    words.push(std::mem::take(&mut word));
                    pending = false;
                }
            }
            c => {
                word.push(c);
                pending = true;
            }
        }
    }
    if pending {
        words.push(word);
    }
    words
}

#[cfg(target_os = "macos")]
fn system_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn system_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn system_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Opens each document in a new browser tab.
///
/// The document is written to a uniquely named `.html` file which is left
/// behind for the browser; if the browser cannot be launched the file is
/// removed again.
#[derive(Debug, Clone)]
pub struct BrowserSink {
    launcher: Launcher,
    dir: PathBuf,
}

impl BrowserSink {
    pub fn new(launcher: Launcher, dir: Option<PathBuf>) -> Self {
        Self {
            launcher,
            dir: dir.unwrap_or_else(std::env::temp_dir),
        }
    }

    fn write_document(&self, html: &str) -> Result<PathBuf, SinkError> {
        std::fs::create_dir_all(&self.dir)?;
        let mut file = tempfile::Builder::new()
            .prefix("persona-")
            .suffix(".html")
            .tempfile_in(&self.dir)?;
        file.write_all(html.as_bytes())?;
        file.flush()?;

        let (_, path) = file.keep().map_err(|e| SinkError::Write(e.to_string()))?;
        Ok(path)
    }
}

impl DocumentSink for BrowserSink {
    fn render(&self, html: &str) -> Result<ContextHandle, SinkError> {
        let path = self.write_document(html)?;

        if let Err(e) = self.launcher.open(&path) {
            if let Err(rm) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), error = %rm, "failed to remove unopened document");
            }
            return Err(e);
        }

        tracing::debug!(path = %path.display(), "document handed to browser");
        Ok(ContextHandle {
            location: path.display().to_string(),
        })
    }
}

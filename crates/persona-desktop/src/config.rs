use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current settings version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides [`Settings::browser`] when set.
pub const BROWSER_ENV: &str = "PERSONA_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version. Missing or 0 = pre-versioned settings.
    #[serde(default)]
    pub config_version: u32,
    /// Command used to open generated documents. `None` uses the system
    /// default browser.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub browser: Option<String>,
    /// Show failures in native dialogs rather than on stderr.
    #[serde(default = "default_dialogs")]
    pub dialogs: bool,
    /// Where generated documents are written before opening. Defaults to the
    /// system temp directory.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output_dir: Option<PathBuf>,
}

fn default_dialogs() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            browser: None,
            dialogs: default_dialogs(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// Apply environment overrides.
    pub fn with_browser_override(mut self, browser: Option<String>) -> Self {
        if let Some(cmd) = browser.filter(|c| !c.trim().is_empty()) {
            self.browser = Some(cmd);
        }
        self
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.persona.desktop"))
}

pub fn settings_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

/// Load settings from the user's config directory, with environment
/// overrides applied. A missing file yields defaults.
pub fn load_settings() -> eyre::Result<Settings> {
    let settings = load_settings_from(&settings_path()?)?;
    Ok(settings.with_browser_override(std::env::var(BROWSER_ENV).ok()))
}

pub fn load_settings_from(path: &Path) -> eyre::Result<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read settings at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let settings: Settings = serde_json::from_value(migrated)?;
    Ok(settings)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Persona."
        ));
    }

    // v0 → v1: `browser_command` renamed to `browser`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("settings are not a JSON object"))?;
        if let Some(cmd) = obj.remove("browser_command") {
            obj.entry("browser").or_insert(cmd);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated settings v0 → v1");
    }

    Ok(json)
}

pub fn save_settings(settings: &Settings) -> eyre::Result<()> {
    save_settings_to(&settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("settings path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = settings.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}

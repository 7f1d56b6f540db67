//! Theme derivation from a DNA profile file.

use std::path::Path;

use persona_core::models::configuration::Configuration;
use persona_core::models::dna::DnaProfile;
use persona_core::theme::{Theme, derive_theme};
use persona_export::sink::ContextHandle;

use crate::error::GenerateError;
use crate::generator::Generator;
use crate::intake::read_text;

const PROFILE_EXTENSION: &str = "json";

/// Name shown for a profile that carries none.
const ANONYMOUS: &str = "User";

/// A derived theme together with the configuration it maps onto.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTheme {
    pub name: String,
    pub theme: Theme,
    pub configuration: Configuration,
}

impl DerivedTheme {
    pub fn from_profile(profile: &DnaProfile) -> Self {
        let theme = derive_theme(profile);
        let configuration = theme.to_configuration();
        Self {
            name: profile.name.clone().unwrap_or_else(|| ANONYMOUS.to_string()),
            theme,
            configuration,
        }
    }

    /// Human-readable report: colors, font, layout, the explanation and the
    /// configuration as JSON.
    pub fn summary(&self) -> Result<String, serde_json::Error> {
        let theme = &self.theme;
        Ok(format!(
            "Theme for {name}\n\
             \x20 primary: {primary}\n\
             \x20 accent:  {accent}\n\
             \x20 font:    {font} ({font_desc})\n\
             \x20 layout:  {layout} ({layout_desc})\n\n\
             {explanation}\n\n\
             {json}",
            name = self.name,
            primary = theme.primary,
            accent = theme.accent,
            font = theme.font.name(),
            font_desc = theme.font.description(),
            layout = theme.layout.name(),
            layout_desc = theme.layout.description(),
            explanation = theme.explanation,
            json = serde_json::to_string_pretty(&self.configuration)?,
        ))
    }
}

/// Read and parse a DNA profile. Files without a `.json` extension are
/// rejected before they are read.
pub async fn load_profile(path: &Path) -> Result<DnaProfile, GenerateError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROFILE_EXTENSION));
    if !is_json {
        return Err(GenerateError::InvalidProfile {
            path: path.to_path_buf(),
        });
    }

    let text = read_text(path).await?;
    DnaProfile::parse(&text).map_err(GenerateError::ParseFailure)
}

/// Derive a theme from the profile at `path`, reporting any failure through
/// the generator.
pub async fn derive_file(
    generator: &Generator,
    path: &Path,
) -> Result<DerivedTheme, GenerateError> {
    let profile = generator.report(load_profile(path).await)?;
    tracing::info!(file = %path.display(), "theme derived");
    Ok(DerivedTheme::from_profile(&profile))
}

/// Render the page for a derived theme, reporting any failure.
pub fn render_theme(
    generator: &Generator,
    derived: &DerivedTheme,
) -> Result<ContextHandle, GenerateError> {
    generator.generate_config(&derived.configuration)
}

use serde::{Deserialize, Serialize};

use persona_core::models::configuration::{
    Configuration, DEFAULT_BACKGROUND_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_LAYOUT_GAP,
    DEFAULT_LAYOUT_TYPE, DEFAULT_TEXT_COLOR,
};

/// Concrete style values substituted into the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// CSS `font-family` list for the body (e.g. "Arial, sans-serif").
    pub font_family: String,

    /// Body text color.
    pub text_color: String,

    /// Body background color.
    pub background_color: String,

    /// `display` of the layout container (e.g. "block", "flex").
    pub layout_type: String,

    /// `gap` between children of the layout container.
    pub layout_gap: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            layout_type: DEFAULT_LAYOUT_TYPE.to_string(),
            layout_gap: DEFAULT_LAYOUT_GAP.to_string(),
        }
    }
}

impl From<&Configuration> for DocumentStyles {
    fn from(config: &Configuration) -> Self {
        Self {
            font_family: config.font_family().to_string(),
            text_color: config.text_color().to_string(),
            background_color: config.background_color().to_string(),
            layout_type: config.layout_type().to_string(),
            layout_gap: config.layout_gap().to_string(),
        }
    }
}

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::CoreError;

pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";
pub const DEFAULT_TEXT_COLOR: &str = "#000";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#fff";
pub const DEFAULT_LAYOUT_TYPE: &str = "block";
pub const DEFAULT_LAYOUT_GAP: &str = "10px";

/// Styling configuration read from a user-supplied JSON file.
///
/// Every field is optional and defaults independently. Parsing never fails
/// because of the document's shape, only because of malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub typography: Typography,
    pub color_palette: ColorPalette,
    pub layout: Layout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// CSS `display` value.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// CSS length used for `gap`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

impl Configuration {
    /// Parse raw JSON text. Only syntax errors are reported; any valid JSON
    /// value yields a configuration.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Extract the recognized fields from an already-parsed JSON value.
    ///
    /// Missing, `null`, empty or falsy values fall back to their defaults, as
    /// does a parent that is not an object. Numbers and `true` are kept in
    /// their textual form, with integral floats written without a fraction
    /// (`12.0` becomes `12`). Unknown fields are ignored.
    pub fn from_value(root: &Value) -> Self {
        Self {
            typography: Typography {
                font_family: field(root, "typography", "fontFamily"),
            },
            color_palette: ColorPalette {
                text_color: field(root, "colorPalette", "textColor"),
                background_color: field(root, "colorPalette", "backgroundColor"),
            },
            layout: Layout {
                kind: field(root, "layout", "type"),
                gap: field(root, "layout", "gap"),
            },
        }
    }

    pub fn font_family(&self) -> &str {
        self.typography
            .font_family
            .as_deref()
            .unwrap_or(DEFAULT_FONT_FAMILY)
    }

    pub fn text_color(&self) -> &str {
        self.color_palette
            .text_color
            .as_deref()
            .unwrap_or(DEFAULT_TEXT_COLOR)
    }

    pub fn background_color(&self) -> &str {
        self.color_palette
            .background_color
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
    }

    pub fn layout_type(&self) -> &str {
        self.layout.kind.as_deref().unwrap_or(DEFAULT_LAYOUT_TYPE)
    }

    pub fn layout_gap(&self) -> &str {
        self.layout.gap.as_deref().unwrap_or(DEFAULT_LAYOUT_GAP)
    }
}

fn field(root: &Value, parent: &str, key: &str) -> Option<String> {
    match root.get(parent)?.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Format a number the way a browser stringifies it: `12.0` is `12`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

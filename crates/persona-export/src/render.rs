use std::collections::HashMap;

use tera::{Context, Tera, Value};

use persona_core::models::configuration::Configuration;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Registered without an `.html` suffix so Tera leaves values unescaped:
/// entities are not decoded inside `<style>`, so escaping would change the
/// computed CSS.
const TEMPLATE_NAME: &str = "personalized_site";

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Personalized Website</title>
    <style>
        body {
            font-family: {{ styles.font_family | css_text }};
            color: {{ styles.text_color | css_text }};
            background-color: {{ styles.background_color | css_text }};
        }
        .layout {
            display: {{ styles.layout_type | css_text }};
            gap: {{ styles.layout_gap | css_text }};
        }
    </style>
</head>
<body>
    <div class="layout">
        <h1>Welcome to Your Personalized Website</h1>
        <p>This is a dynamically generated page based on your JSON file.</p>
    </div>
</body>
</html>
"#;

/// Build the standalone HTML document for a configuration.
///
/// Pure: the output depends only on the configuration, so identical input
/// always yields byte-identical documents. Absent fields use their defaults.
pub fn build_document(config: &Configuration) -> Result<String, ExportError> {
    render_styles(&DocumentStyles::from(config))
}

/// Render the document template with already-resolved styles.
pub fn render_styles(styles: &DocumentStyles) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("css_text", css_text);
    tera.add_raw_template(TEMPLATE_NAME, DOCUMENT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("styles", &serde_json::to_value(styles)?);

    let html = tera.render(TEMPLATE_NAME, &context)?;
    tracing::debug!(bytes = html.len(), "document built");
    Ok(html)
}

/// Keep a style value from terminating the `<style>` element.
///
/// `</` becomes `<\/`; in CSS `\/` is an escaped `/`, so the computed value
/// is unchanged.
fn css_text(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!("css_text", "value", String, value);
    Ok(Value::String(text.replace("</", "<\\/")))
}

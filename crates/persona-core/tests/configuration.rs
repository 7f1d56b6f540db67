use persona_core::models::configuration::{
    Configuration, DEFAULT_BACKGROUND_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_LAYOUT_GAP,
    DEFAULT_LAYOUT_TYPE, DEFAULT_TEXT_COLOR,
};

#[test]
fn empty_object_uses_every_default() {
    let config = Configuration::parse("{}").unwrap();
    assert_eq!(config, Configuration::default());
    assert_eq!(config.font_family(), "Arial, sans-serif");
    assert_eq!(config.text_color(), "#000");
    assert_eq!(config.background_color(), "#fff");
    assert_eq!(config.layout_type(), "block");
    assert_eq!(config.layout_gap(), "10px");
}

#[test]
fn partial_configuration_defaults_only_missing_fields() {
    let config = Configuration::parse(
        r##"{"colorPalette":{"textColor":"#fff","backgroundColor":"#222"},"layout":{"type":"flex","gap":"20px"}}"##,
    )
    .unwrap();

    assert_eq!(config.font_family(), DEFAULT_FONT_FAMILY);
    assert_eq!(config.text_color(), "#fff");
    assert_eq!(config.background_color(), "#222");
    assert_eq!(config.layout_type(), "flex");
    assert_eq!(config.layout_gap(), "20px");
}

#[test]
fn each_field_defaults_independently() {
    let fields = [
        ("typography", "fontFamily", "Georgia, serif"),
        ("colorPalette", "textColor", "rebeccapurple"),
        ("colorPalette", "backgroundColor", "#123456"),
        ("layout", "type", "grid"),
        ("layout", "gap", "2rem"),
    ];

    for (parent, key, value) in fields {
        let json = serde_json::json!({ parent: { key: value } }).to_string();
        let config = Configuration::parse(&json).unwrap();
        let resolved = [
            config.font_family(),
            config.text_color(),
            config.background_color(),
            config.layout_type(),
            config.layout_gap(),
        ];
        let defaults = [
            DEFAULT_FONT_FAMILY,
            DEFAULT_TEXT_COLOR,
            DEFAULT_BACKGROUND_COLOR,
            DEFAULT_LAYOUT_TYPE,
            DEFAULT_LAYOUT_GAP,
        ];

        let hits = resolved.iter().filter(|v| **v == value).count();
        assert_eq!(hits, 1, "{parent}.{key} should appear exactly once");
        for (got, default) in resolved.iter().zip(defaults) {
            assert!(*got == value || *got == default);
        }
    }
}

#[test]
fn falsy_and_misshapen_values_fall_back() {
    let config = Configuration::parse(
        r#"{"typography":"serif","colorPalette":{"textColor":"","backgroundColor":null},"layout":{"type":false,"gap":0}}"#,
    )
    .unwrap();
    assert_eq!(config, Configuration::default());
}

#[test]
fn numbers_are_kept_as_text() {
    let config = Configuration::parse(r#"{"layout":{"gap":12}}"#).unwrap();
    assert_eq!(config.layout_gap(), "12");
}

#[test]
fn integral_floats_drop_the_fraction() {
    let config = Configuration::parse(r#"{"layout":{"gap":12.0,"type":-3.0}}"#).unwrap();
    assert_eq!(config.layout_gap(), "12");
    assert_eq!(config.layout_type(), "-3");

    let config = Configuration::parse(r#"{"layout":{"gap":1.5}}"#).unwrap();
    assert_eq!(config.layout_gap(), "1.5");

    let config = Configuration::parse(r#"{"layout":{"gap":0.0}}"#).unwrap();
    assert_eq!(config.layout_gap(), "10px");
}

#[test]
fn non_object_document_yields_defaults() {
    for text in ["[]", "42", "\"hello\"", "null"] {
        let config = Configuration::parse(text).unwrap();
        assert_eq!(config, Configuration::default(), "input {text}");
    }
}

#[test]
fn unknown_fields_are_ignored() {
    let config = Configuration::parse(
        r#"{"version":3,"typography":{"fontFamily":"Inter","size":"14px"},"extra":[1,2]}"#,
    )
    .unwrap();
    assert_eq!(config.font_family(), "Inter");
    assert_eq!(config.text_color(), DEFAULT_TEXT_COLOR);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Configuration::parse("not json").is_err());
    assert!(Configuration::parse("{\"layout\":").is_err());
}

#[test]
fn serializes_only_present_fields() {
    let config = Configuration::parse(r#"{"layout":{"type":"flex"}}"#).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "typography": {},
            "colorPalette": {},
            "layout": { "type": "flex" }
        })
    );
}

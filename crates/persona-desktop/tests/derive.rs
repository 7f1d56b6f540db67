mod common;

use std::path::Path;

use common::{Harness, write_file};
use persona_core::theme::{FontChoice, LayoutStyle};
use persona_desktop::derive::{DerivedTheme, derive_file, load_profile, render_theme};
use persona_desktop::error::GenerateError;

const BOLD_PROFILE: &str = r#"{
    "name": "Ada",
    "personality_traits": {"extroversion": 0.9, "creativity": 0.9, "risk_taking": 0.9},
    "ancestry": {"nordic": 0.6, "asian": 0.4}
}"#;

#[tokio::test]
async fn derived_theme_renders_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "dna.json", BOLD_PROFILE);

    let h = Harness::new();
    let derived = derive_file(&h.generator, &path).await.unwrap();
    assert_eq!(derived.name, "Ada");
    assert_eq!(derived.theme.font, FontChoice::PlayfairDisplay);
    assert_eq!(derived.theme.layout, LayoutStyle::Bold);

    render_theme(&h.generator, &derived).unwrap();

    let documents = h.sink.documents();
    assert_eq!(documents.len(), 1);
    let primary = derived.theme.primary.to_hex();
    assert!(documents[0].contains(&format!("background-color: {primary};")));
    assert!(documents[0].contains("display: flex;"));
    assert!(documents[0].contains("gap: 32px;"));
    assert!(documents[0].contains("font-family: 'Playfair Display', serif;"));
    assert!(h.notifier.alerts().is_empty());
}

#[tokio::test]
async fn summary_lists_theme_and_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "dna.json", "{}");

    let profile = load_profile(&path).await.unwrap();
    let derived = DerivedTheme::from_profile(&profile);
    let summary = derived.summary().unwrap();

    assert!(summary.starts_with("Theme for User\n"));
    assert!(summary.contains("primary: #36d877"));
    assert!(summary.contains("Nunito"));
    assert!(summary.contains("Harmonious & Balanced"));
    assert!(summary.contains(&derived.theme.explanation));
    assert!(summary.contains(r#""type": "block""#));
    assert!(summary.contains(r#""gap": "16px""#));
}

#[tokio::test]
async fn non_json_profile_is_rejected_without_reading() {
    let h = Harness::new();

    // The path does not exist: a read attempt would surface as ReadFailure.
    let err = derive_file(&h.generator, Path::new("/nonexistent/dna.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::InvalidProfile { .. }));
    assert_eq!(
        h.notifier.alerts(),
        vec!["Invalid file. Please upload a valid DNA JSON file."]
    );
    assert!(h.sink.documents().is_empty());
}

#[tokio::test]
async fn malformed_profile_alerts_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "dna.json", r#"{"personality_traits": "#);

    let h = Harness::new();
    let err = derive_file(&h.generator, &path).await.unwrap_err();

    assert!(matches!(err, GenerateError::ParseFailure(_)));
    assert_eq!(
        h.notifier.alerts(),
        vec!["Failed to parse JSON file. Please check the file format."]
    );
}

#[tokio::test]
async fn missing_profile_alerts_once() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::new();

    let err = derive_file(&h.generator, &dir.path().join("gone.json"))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::ReadFailure { .. }));
    assert_eq!(h.notifier.alerts().len(), 1);
}

#[tokio::test]
async fn blocked_browser_reports_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "dna.json", BOLD_PROFILE);

    let h = Harness::blocked();
    let derived = derive_file(&h.generator, &path).await.unwrap();
    let err = render_theme(&h.generator, &derived).unwrap_err();

    assert!(matches!(err, GenerateError::PopupBlocked(_)));
    assert_eq!(h.notifier.alerts().len(), 1);
}

use persona_desktop::browser::{BrowserSink, Launcher, command_words};
use persona_export::error::SinkError;
use persona_export::sink::DocumentSink;

#[test]
fn launcher_setting_falls_back_to_system() {
    assert_eq!(Launcher::from_setting(None), Launcher::System);
    assert_eq!(Launcher::from_setting(Some("  ")), Launcher::System);
    assert_eq!(
        Launcher::from_setting(Some("firefox --new-tab")),
        Launcher::Command("firefox --new-tab".to_string())
    );
}

#[test]
fn quoted_command_words_keep_their_spaces() {
    assert_eq!(
        command_words(r#""C:\Program Files\Firefox\firefox.exe" --new-tab"#),
        vec![r"C:\Program Files\Firefox\firefox.exe", "--new-tab"]
    );
    assert_eq!(command_words("  firefox   --new-tab "), vec!["firefox", "--new-tab"]);
    assert_eq!(command_words(r#"run "" x"#), vec!["run", "", "x"]);
    assert!(command_words("   ").is_empty());
}

#[cfg(unix)]
#[test]
fn browser_path_with_spaces_is_launched() {
    let bin = tempfile::tempdir().unwrap();
    let program = bin.path().join("my browser");
    std::os::unix::fs::symlink("/bin/sh", &program).unwrap();

    let out = tempfile::tempdir().unwrap();
    let sink = BrowserSink::new(
        Launcher::Command(format!("\"{}\" -c true", program.display())),
        Some(out.path().to_path_buf()),
    );

    let handle = sink.render("<html></html>").unwrap();
    assert!(std::path::Path::new(&handle.location).exists());
}

#[cfg(unix)]
#[test]
fn document_is_written_and_handed_to_the_browser() {
    let dir = tempfile::tempdir().unwrap();
    let sink = BrowserSink::new(
        Launcher::Command("true".to_string()),
        Some(dir.path().to_path_buf()),
    );

    let handle = sink.render("<!DOCTYPE html><html></html>").unwrap();
    let path = std::path::PathBuf::from(&handle.location);

    assert!(path.starts_with(dir.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "<!DOCTYPE html><html></html>"
    );
}

#[test]
fn missing_browser_blocks_and_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let sink = BrowserSink::new(
        Launcher::Command("/nonexistent/persona-browser".to_string()),
        Some(dir.path().to_path_buf()),
    );

    let err = sink.render("<html></html>").unwrap_err();
    assert!(matches!(err, SinkError::Blocked(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn each_render_gets_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let launcher = if cfg!(windows) { "cmd /C rem" } else { "true" };
    let sink = BrowserSink::new(
        Launcher::Command(launcher.to_string()),
        Some(dir.path().to_path_buf()),
    );

    let first = sink.render("<p>1</p>").unwrap();
    let second = sink.render("<p>2</p>").unwrap();
    assert_ne!(first.location, second.location);
}

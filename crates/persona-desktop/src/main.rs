use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use persona_desktop::browser::{BrowserSink, Launcher};
use persona_desktop::config::{self, Settings};
use persona_desktop::derive::{derive_file, render_theme};
use persona_desktop::generator::Generator;
use persona_desktop::intake::{FILE_INPUT_ID, FileInput, FileIntake, SelectedFile, Selection};
use persona_desktop::notify::{ConsoleNotifier, DialogNotifier, Notifier};
use persona_export::sink::{DocumentSink, WriterSink};

#[derive(Parser)]
#[command(name = "persona", version, about = "Generate a personalized web page from a JSON file")]
struct Cli {
    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    /// Report failures on stderr instead of in dialogs.
    #[arg(long, global = true)]
    console: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a page from a styling configuration file.
    Generate {
        /// Configuration file. Opens a file picker when omitted.
        path: Option<PathBuf>,

        /// Write the document to stdout instead of opening a browser.
        #[arg(long)]
        stdout: bool,
    },
    /// Derive a theme from a DNA profile.
    Derive {
        path: PathBuf,

        /// Also open the themed page in a browser.
        #[arg(long)]
        open: bool,

        /// Also write the themed page to stdout.
        #[arg(long, conflicts_with = "open")]
        stdout: bool,
    },
    /// Show or update saved settings.
    Settings {
        /// Browser command; pass an empty string to use the system default.
        #[arg(long)]
        browser: Option<String>,

        #[arg(long)]
        dialogs: Option<bool>,

        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Generate { path, stdout } => {
            let settings = config::load_settings()?;
            let generator = build_generator(&settings, cli.console, stdout);
            generate(generator, path).await
        }
        Commands::Derive { path, open, stdout } => {
            let settings = config::load_settings()?;
            let generator = build_generator(&settings, cli.console, stdout);
            derive(&generator, &path, open || stdout, stdout).await
        }
        Commands::Settings {
            browser,
            dialogs,
            output_dir,
        } => {
            // Read the file as-is so environment overrides are never saved.
            let settings = config::load_settings_from(&config::settings_path()?)?;
            update_settings(settings, browser, dialogs, output_dir)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_generator(settings: &Settings, console: bool, stdout: bool) -> Generator {
    let notifier: Arc<dyn Notifier> = if console || !settings.dialogs {
        Arc::new(ConsoleNotifier)
    } else {
        Arc::new(DialogNotifier)
    };

    let sink: Arc<dyn DocumentSink> = if stdout {
        Arc::new(WriterSink::new(std::io::stdout(), "stdout"))
    } else {
        Arc::new(BrowserSink::new(
            Launcher::from_setting(settings.browser.as_deref()),
            settings.output_dir.clone(),
        ))
    };

    Generator::new(sink, notifier)
}

async fn generate(generator: Generator, path: Option<PathBuf>) -> Result<ExitCode> {
    let path = match path {
        Some(path) => path,
        None => match pick_file().await {
            Some(path) => path,
            None => {
                tracing::info!("no file selected");
                return Ok(ExitCode::SUCCESS);
            }
        },
    };

    let input = FileInput::new(FILE_INPUT_ID);
    let subscription = FileIntake::attach(&input, generator);
    input.select(Selection::single(SelectedFile::from_path(path)));
    drop(input);

    let stats = subscription.join().await;
    Ok(if stats.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn pick_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a configuration file")
        .add_filter("JSON", &["json"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

async fn derive(
    generator: &Generator,
    path: &Path,
    render: bool,
    stdout: bool,
) -> Result<ExitCode> {
    let Ok(derived) = derive_file(generator, path).await else {
        return Ok(ExitCode::FAILURE);
    };

    let summary = derived.summary()?;
    // Keep stdout for the document itself when it is being written there.
    if stdout {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }

    if !render {
        return Ok(ExitCode::SUCCESS);
    }
    Ok(match render_theme(generator, &derived) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

fn update_settings(
    mut settings: Settings,
    browser: Option<String>,
    dialogs: Option<bool>,
    output_dir: Option<PathBuf>,
) -> Result<ExitCode> {
    let changed = browser.is_some() || dialogs.is_some() || output_dir.is_some();

    if let Some(cmd) = browser {
        settings.browser = Some(cmd).filter(|c| !c.trim().is_empty());
    }
    if let Some(dialogs) = dialogs {
        settings.dialogs = dialogs;
    }
    if let Some(dir) = output_dir {
        settings.output_dir = Some(dir);
    }

    if changed {
        config::save_settings(&settings)?;
    }

    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(ExitCode::SUCCESS)
}

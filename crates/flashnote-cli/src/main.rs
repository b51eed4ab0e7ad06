//! Command-line host for flashnote.
//!
//! Creates Anki notes from Markdown files through AnkiConnect. Each command
//! that talks to Anki runs the permission handshake first.

mod console;
mod entry;
mod front_matter;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use flashnote_engine::catalog::CatalogSnapshot;
use flashnote_engine::config::{ConfigStore, JsonFileStore, Settings};
use flashnote_engine::extract::{self, NoteParameters};
use flashnote_engine::notice::{Notice, Notifier};
use flashnote_engine::prefill::Prefill;
use flashnote_engine::{ClientBuilder, Engine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use console::ConsoleNotifier;
use entry::Overrides;

const APP_NAME: &str = "flashnote";
const SETTINGS_FILE: &str = "data.json";

/// Create Anki flashcards from Markdown notes.
#[derive(Parser, Debug)]
#[command(name = "flashnote", version, about, long_about = None)]
struct Args {
    /// AnkiConnect host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// AnkiConnect port
    #[arg(long, default_value_t = 8765)]
    port: u16,

    /// AnkiConnect API key, if one is configured
    #[arg(long)]
    api_key: Option<String>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask AnkiConnect for permission and report the answer
    Connect,

    /// Fetch decks and note types from Anki into the settings file
    Sync,

    /// Print the stored decks and note types
    Catalog,

    /// Create a deck
    CreateDeck {
        /// Deck name, e.g. "Japanese::Vocabulary"
        name: String,
    },

    /// Add a note from command-line values
    Add {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Add a note pre-filled from the file's AnkiIntegration block
    AddFromBlock {
        /// Markdown file to read
        file: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Add a note pre-filled from the file's YAML front matter
    AddFromFrontMatter {
        /// Markdown file to read
        file: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Show or change preferences
    Prefs {
        /// Hide AnkiIntegration blocks when notes are rendered
        #[arg(long)]
        invisible_code_block: Option<bool>,
    },
}

impl Command {
    fn needs_anki(&self) -> bool {
        !matches!(self, Command::Catalog | Command::Prefs { .. })
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME).join(SETTINGS_FILE))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("[error] {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<bool, Box<dyn Error>> {
    let url = format!("http://{}:{}", args.host, args.port);
    let settings_path = args.config.unwrap_or_else(default_settings_path);
    info!(
        anki_url = %url,
        settings = %settings_path.display(),
        command = ?args.command,
        "Starting flashnote"
    );

    let mut builder = ClientBuilder::new().url(&url);
    if let Some(key) = args.api_key {
        builder = builder.api_key(key);
    }
    let engine = Engine::from_client(builder.build()).with_notifier(Arc::new(ConsoleNotifier));
    let store = JsonFileStore::new(settings_path);

    let granted = if args.command.needs_anki() {
        engine.gate().request_permission().await
    } else {
        false
    };

    match args.command {
        Command::Connect => Ok(granted),
        Command::Sync => {
            let report = engine.catalog().synchronize(&store).await;
            Ok(report.decks_updated || report.templates_updated)
        }
        Command::Catalog => {
            print!("{}", render_catalog(&store.load()?.catalog));
            Ok(true)
        }
        Command::CreateDeck { name } => Ok(engine.entries().create_deck(&name).await),
        Command::Add { overrides } => add(&engine, &store, None, &overrides).await,
        Command::AddFromBlock { file, overrides } => {
            let text = read_note(&file)?;
            let params = extract::from_document(Some(&text));
            if params.is_none() {
                engine.notifier().notify(Notice::info(format!(
                    "No {} block found in {}.",
                    extract::CODE_BLOCK_LANGUAGE,
                    file.display()
                )));
            }
            add(&engine, &store, params, &overrides).await
        }
        Command::AddFromFrontMatter { file, overrides } => {
            let text = read_note(&file)?;
            let params = match front_matter::parse(&text)? {
                Some(map) => Some(extract::from_front_matter(&map)),
                None => {
                    engine.notifier().notify(Notice::info(format!(
                        "No front matter found in {}.",
                        file.display()
                    )));
                    None
                }
            };
            add(&engine, &store, params, &overrides).await
        }
        Command::Prefs {
            invisible_code_block,
        } => {
            let settings = update_prefs(&store, invisible_code_block)?;
            println!("invisible-code-block = {}", settings.invisible_code_block);
            Ok(true)
        }
    }
}

async fn add(
    engine: &Engine,
    store: &dyn ConfigStore,
    params: Option<NoteParameters>,
    overrides: &Overrides,
) -> Result<bool, Box<dyn Error>> {
    let settings = store.load()?;
    if settings.catalog.is_empty() {
        engine.notifier().notify(Notice::info(
            "No decks or note types stored yet. Run `flashnote sync` first.",
        ));
    }

    let prefill = Prefill::resolve(params.as_ref(), &settings.catalog);
    let draft = match entry::build_draft(
        prefill,
        overrides,
        params.as_ref(),
        &settings.catalog,
        engine.notifier(),
    ) {
        Ok(draft) => draft,
        Err(message) => {
            engine.notifier().notify(Notice::error(message));
            return Ok(false);
        }
    };

    Ok(engine.entries().submit(&draft).await)
}

fn read_note(path: &Path) -> Result<String, Box<dyn Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

/// Apply a preference change, if any, and return the resulting settings.
fn update_prefs(
    store: &dyn ConfigStore,
    invisible_code_block: Option<bool>,
) -> flashnote_engine::Result<Settings> {
    let mut settings = store.load()?;
    if let Some(value) = invisible_code_block {
        settings.invisible_code_block = value;
        store.save(&settings)?;
        debug!(invisible_code_block = value, "Preferences saved");
    }
    Ok(settings)
}

fn render_catalog(catalog: &CatalogSnapshot) -> String {
    if catalog.is_empty() {
        return "Nothing stored yet. Run `flashnote sync` first.\n".to_string();
    }

    let mut out = String::from("Decks:\n");
    for deck in &catalog.decks {
        out.push_str(&format!("  {} ({})\n", deck.name, deck.id));
    }
    out.push_str("Note types:\n");
    for template in &catalog.templates {
        out.push_str(&format!("  {}: {}\n", template.name, template.fields.join(", ")));
    }
    out
}

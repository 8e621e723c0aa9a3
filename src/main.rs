mod cli;

use std::path::Path;

use anyhow::{anyhow, bail, Context};
use clap::{CommandFactory, Parser};

use booru_browser::clipboard::ClipboardHandler;
use booru_browser::config::{
    preferences_path, FileBackend, PrefKey, PreferenceStore, PreferenceUpdate,
};
use booru_browser::image::{Image, NetworkKind};
use booru_browser::logging;
use booru_browser::navigation::{self, Destination};
use booru_browser::search::SearchQuery;
use booru_browser::ui::settings::SettingsState;
use booru_browser::ui::sheet::SheetContent;
use cli::{Cli, Commands, PrefsCommand, RouteCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let args = Cli::parse();
    let prefs_path = args.prefs.clone().unwrap_or_else(preferences_path);

    let Some(command) = args.command else {
        let _ = Cli::command().print_long_help();
        return Ok(());
    };

    match command {
        Commands::Prefs(PrefsCommand::Show) => {
            let store = open_store(&prefs_path)?;
            print!("{}", SettingsState::new(store.read()).render_text());
        }
        Commands::Prefs(PrefsCommand::Set { key, value }) => {
            let pref_key = PrefKey::parse(&key).ok_or_else(|| {
                let known: Vec<&str> = PrefKey::all().iter().map(|k| k.as_str()).collect();
                anyhow!(
                    "unknown preference '{key}' (expected one of: {})",
                    known.join(", ")
                )
            })?;
            let Some(update) = PreferenceUpdate::parse(pref_key, &value) else {
                bail!("invalid value '{value}' for {key}");
            };
            let store = open_store(&prefs_path)?;
            let snapshot = store.update(update).await?;
            tracing::info!(version = snapshot.version, key = %key, "preference updated");
            print!("{}", SettingsState::new(snapshot.preferences).render_text());
        }
        Commands::Prefs(PrefsCommand::Reset) => {
            let store = open_store(&prefs_path)?;
            let snapshot = store.reset().await?;
            print!("{}", SettingsState::new(snapshot.preferences).render_text());
        }
        Commands::Route(RouteCommand::Encode { destination }) => {
            let destination: Destination = destination.into();
            println!("{}", navigation::encode(&destination));
        }
        Commands::Route(RouteCommand::Decode { token }) => {
            let destination = navigation::decode(&token)?;
            println!("{destination:?}");
        }
        Commands::Search { tags } => {
            let store = open_store(&prefs_path)?;
            let query = SearchQuery::new(&tags.join(" "));
            let destination = query.destination_for(&store.read());
            println!("{}", navigation::encode(&destination));
        }
        Commands::Sheet {
            path,
            copy_all,
            metered,
        } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let image: Image = serde_json::from_str(&raw)
                .with_context(|| format!("parsing image record {}", path.display()))?;

            let store = open_store(&prefs_path)?;
            let network = if metered {
                NetworkKind::Metered
            } else {
                NetworkKind::Unmetered
            };
            println!("{}", image.display_url(store.read().data_saver, network));

            let Some(content) = SheetContent::for_image(&image) else {
                println!("No metadata for {}", image.file_name());
                return Ok(());
            };
            print!("\n{}", content.render_text());

            if copy_all {
                match &content.copy_all {
                    Some(action) => {
                        let mut clipboard = ClipboardHandler::new()?;
                        println!("{}", clipboard.copy(action)?);
                    }
                    None => println!("No tags to copy"),
                }
            }
        }
    }

    Ok(())
}

fn open_store(path: &Path) -> anyhow::Result<PreferenceStore> {
    PreferenceStore::open(FileBackend::new(path))
        .with_context(|| format!("opening preferences at {}", path.display()))
}

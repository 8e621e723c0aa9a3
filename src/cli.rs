use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use booru_browser::config::ImageSource;
use booru_browser::navigation::Destination;

/// Preferences, routes and image sheets for the booru browser
#[derive(Debug, Parser)]
#[command(name = "booru-browser", long_about = None)]
pub struct Cli {
    /// Preferences file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect or change preferences
    #[command(subcommand)]
    Prefs(PrefsCommand),
    /// Encode or decode route tokens
    #[command(subcommand)]
    Route(RouteCommand),
    /// Build the results route for a tag search using the saved preferences
    Search {
        /// Tags, whitespace separated
        tags: Vec<String>,
    },
    /// Show the info sheet for an image record (JSON)
    Sheet {
        path: PathBuf,
        /// Copy every tag to the clipboard
        #[arg(long)]
        copy_all: bool,
        /// Treat the current network as metered when picking the display URL
        #[arg(long)]
        metered: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Print the settings screen
    Show,
    /// Set one preference, e.g. `set image_source danbooru`
    Set { key: String, value: String },
    /// Restore defaults
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum RouteCommand {
    /// Print the token for a destination
    Encode {
        #[command(subcommand)]
        destination: DestinationArg,
    },
    /// Decode a token and print the destination
    Decode { token: String },
}

#[derive(Debug, Subcommand)]
pub enum DestinationArg {
    Search,
    Favourites,
    Settings,
    Results {
        #[arg(long, value_enum, default_value_t = SourceArg::R34)]
        source: SourceArg,
        #[arg(long, default_value = "")]
        tags: String,
    },
    ImageView {
        #[arg(long, value_enum, default_value_t = SourceArg::R34)]
        source: SourceArg,
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    R34,
    Safebooru,
    Danbooru,
    Gelbooru,
}

impl From<SourceArg> for ImageSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::R34 => ImageSource::R34,
            SourceArg::Safebooru => ImageSource::Safebooru,
            SourceArg::Danbooru => ImageSource::Danbooru,
            SourceArg::Gelbooru => ImageSource::Gelbooru,
        }
    }
}

impl From<DestinationArg> for Destination {
    fn from(arg: DestinationArg) -> Self {
        match arg {
            DestinationArg::Search => Destination::Search,
            DestinationArg::Favourites => Destination::Favourites,
            DestinationArg::Settings => Destination::Settings,
            DestinationArg::Results { source, tags } => Destination::results(source.into(), tags),
            DestinationArg::ImageView { source, id } => Destination::image_view(source.into(), id),
        }
    }
}

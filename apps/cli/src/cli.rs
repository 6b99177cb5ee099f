use std::io::Write;

use bandsintown_client::{ArtistIdentifier, BandsintownClient, EventDate};
use bandsintown_shared_config::BandsintownConfig;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bandsintown")]
#[command(version, about = "Look up artists and events on Bandsintown", long_about = None)]
pub struct Cli {
    /// App id to send instead of BANDSINTOWN_APP_ID
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// API base URL to use instead of BANDSINTOWN_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print an artist as JSON
    Artist {
        /// Artist name (or ID, see --by)
        artist: String,

        #[arg(long, value_enum, default_value_t = IdKind::Name)]
        by: IdKind,
    },
    /// Print an artist's events as JSON
    Events {
        /// Artist name (or ID, see --by)
        artist: String,

        #[arg(long, value_enum, default_value_t = IdKind::Name)]
        by: IdKind,

        /// upcoming, all, yyyy-mm-dd or yyyy-mm-dd,yyyy-mm-dd
        #[arg(long)]
        date: Option<String>,
    },
}

/// How the positional artist argument is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdKind {
    Name,
    Fbid,
    Mbid,
}

impl IdKind {
    pub fn identifier(self, value: &str) -> ArtistIdentifier {
        match self {
            Self::Name => ArtistIdentifier::Name(value.to_string()),
            Self::Fbid => ArtistIdentifier::FacebookId(value.to_string()),
            Self::Mbid => ArtistIdentifier::MusicBrainzId(value.to_string()),
        }
    }
}

/// Whether the lookup found anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

fn parse_date(raw: &str) -> EventDate {
    match raw {
        "upcoming" => EventDate::Upcoming,
        "all" => EventDate::All,
        other => EventDate::Raw(other.to_string()),
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<BandsintownConfig> {
    let mut config = match &cli.app_id {
        Some(app_id) => BandsintownConfig::new(app_id.as_str()),
        None => BandsintownConfig::load()?,
    };
    if let Some(api_url) = &cli.api_url {
        config = config.with_base_url(api_url.as_str());
    }
    Ok(config)
}

pub async fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let config = build_config(&cli)?;
    let client = BandsintownClient::with_config(&config)?;

    match cli.command {
        Commands::Artist { artist, by } => {
            let identifier = by.identifier(&artist);
            match client.artists(identifier).await? {
                Some(found) => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
                    Ok(Outcome::Found)
                }
                None => {
                    info!(%artist, "Artist not found");
                    Ok(Outcome::NotFound)
                }
            }
        }
        Commands::Events { artist, by, date } => {
            let identifier = by.identifier(&artist);
            let date = date.as_deref().map(parse_date);
            match client.artists_events(identifier, date).await? {
                Some(events) => {
                    info!(%artist, count = events.len(), "Fetched events");
                    writeln!(out, "{}", serde_json::to_string_pretty(&events)?)?;
                    Ok(Outcome::Found)
                }
                None => {
                    info!(%artist, "Artist not found");
                    Ok(Outcome::NotFound)
                }
            }
        }
    }
}

use anyhow::{Context, bail};
use citycast_core::{
    Config, HistoryStore, JsonHistoryStore, config::DEFAULT_BASE_URL, provider_from_config,
};
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use tracing::{error, info};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "City weather and forecast lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the provider base URL and API key.
    Configure,

    /// Show current conditions and the daily forecast for a city.
    Weather {
        /// City name, e.g. "Boston".
        city: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the search history.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List previously searched cities.
    List {
        /// Print the entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Remove one entry by id.
    Remove {
        /// Entry id as shown by `history list`.
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Weather { city, json } => {
                let config = Config::load()?;
                weather(&config, &city, json).await
            }
            Command::History { action } => {
                let config = Config::load()?;
                let store = JsonHistoryStore::new(config.history_file_path()?);
                history(&store, action).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let default_url = if config.base_url.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        config.base_url.clone()
    };

    config.base_url = Text::new("API base URL:")
        .with_default(&default_url)
        .prompt()
        .context("Failed to read base URL")?;

    config.api_key = Password::new("API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn weather(config: &Config, city: &str, json: bool) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        bail!("City name is required");
    }

    let provider = provider_from_config(config);
    let result = match provider.get_weather_for_city(city).await {
        Ok(result) => result,
        Err(e) => {
            error!("Weather lookup for {} failed: {}", city, e);
            return Err(e).context("Failed to fetch weather data");
        }
    };

    let store = JsonHistoryStore::new(config.history_file_path()?);
    let entry = store.add_city(city).await?;
    info!("Recorded {} in history as {}", entry.name, entry.id);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::weather(&result));
    }

    Ok(())
}

async fn history(store: &dyn HistoryStore, action: HistoryAction) -> anyhow::Result<()> {
    match action {
        HistoryAction::List { json } => {
            let entries = store
                .list_cities()
                .await
                .context("Failed to fetch search history")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", render::history(&entries));
            }
        }
        HistoryAction::Remove { id } => {
            let removed = store
                .remove_city(&id)
                .await
                .context("Failed to delete city from search history")?;

            match removed {
                Some(entry) => println!("Removed {} ({})", entry.name, entry.id),
                None => bail!("No history entry with id '{id}'"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_weather_command() {
        let cli = Cli::try_parse_from(["citycast", "weather", "New York", "--json"]).unwrap();

        match cli.command {
            Command::Weather { city, json } => {
                assert_eq!(city, "New York");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_history_remove() {
        let cli = Cli::try_parse_from(["citycast", "history", "remove", "abc-123"]).unwrap();

        assert!(matches!(
            cli.command,
            Command::History { action: HistoryAction::Remove { id } } if id == "abc-123"
        ));
    }

    #[tokio::test]
    async fn blank_city_is_rejected_without_touching_history() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            history_file: Some(dir.path().join("history.json")),
            ..Config::default()
        };

        let err = weather(&config, "   ", false).await.unwrap_err();

        assert_eq!(err.to_string(), "City name is required");
        assert!(!dir.path().join("history.json").exists());
    }

    #[tokio::test]
    async fn failed_lookup_does_not_record_history() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            history_file: Some(dir.path().join("history.json")),
            ..Config::default()
        };

        // empty base URL: lookup fails at the transport layer
        let err = weather(&config, "Boston", false).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch weather data");
        assert!(!dir.path().join("history.json").exists());
    }
}

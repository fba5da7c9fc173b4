use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use weatherbook_core::{Config, WeatherBook};

use crate::{prompt, session::Session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherbook", version, about = "Weather record book")]
pub struct Cli {
    /// Enable debug logging (otherwise RUST_LOG is used).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive session (the default).
    Run {
        /// Store capacity for this session; overrides the config file.
        #[arg(long)]
        capacity: Option<usize>,

        /// Print query results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Persist settings to the config file.
    Configure {
        /// Number of records a session can hold.
        #[arg(long)]
        capacity: usize,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Run { capacity: None, json: false }) {
            Command::Run { capacity, json } => {
                let mut config = Config::load().context("Failed to load configuration")?;
                if let Some(capacity) = capacity {
                    config.set_capacity(capacity)?;
                }
                tracing::debug!(?config, "starting session");

                let session = Session::new(
                    WeatherBook::new(config.capacity),
                    Local::now().naive_local(),
                    json,
                );
                prompt::run(session)?;
            }
            Command::Configure { capacity } => {
                let mut config = Config::load().context("Failed to load configuration")?;
                config.set_capacity(capacity)?;
                config.save()?;

                println!(
                    "Capacity set to {capacity} in {}",
                    Config::config_file_path()?.display()
                );
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use inquire::Text;
use weather_core::{Config, Dashboard, ProxyClient, Screen, provider_from_config};

use crate::{logging, plain, tui};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the proxy address, default city and proxy upstream interactively.
    Configure,

    /// Show the dashboard (the default when no command is given).
    Show {
        /// City to show first; falls back to the configured default city.
        city: Option<String>,

        /// Print the dashboard once as plain text instead of the full-screen view.
        #[arg(long)]
        plain: bool,

        /// Where the full-screen view writes its logs.
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Command::Show {
            city: None,
            plain: false,
            log_file: None,
        });

        match command {
            Command::Configure => {
                logging::init_stderr();
                configure(self.config.as_deref())
            }
            Command::Show { city, plain, log_file } => {
                let config = load_config(self.config.as_deref())?;
                let city = initial_city(city.as_deref(), &config);

                if plain {
                    logging::init_stderr();
                    show_plain(&config, city).await
                } else {
                    let log_path = match log_file {
                        Some(path) => path,
                        None => Config::default_log_path()?,
                    };
                    logging::init_file(&log_path)?;
                    let client = ProxyClient::new(&config.dashboard.api_url)?;
                    tui::run(client, Dashboard::new(city)).await
                }
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// The city from the command line, trimmed, unless it is blank.
fn initial_city(arg: Option<&str>, config: &Config) -> String {
    arg.map(str::trim)
        .filter(|city| !city.is_empty())
        .unwrap_or(config.dashboard.default_city.as_str())
        .to_string()
}

async fn show_plain(config: &Config, city: String) -> anyhow::Result<()> {
    let client = ProxyClient::new(&config.dashboard.api_url)?;
    let mut dashboard = Dashboard::new(city);

    let target = dashboard.start_fetch();
    let result = client.fetch(&target).await;
    dashboard.finish_fetch(&target, result);

    // A failed fetch has already been logged; there is nothing to paint.
    if let Screen::Weather(snapshot) = dashboard.screen() {
        print!("{}", plain::render(snapshot));
    }

    Ok(())
}

fn configure(path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = load_config(path)?;

    config.dashboard.api_url = ask("Proxy API URL:", &config.dashboard.api_url)?;
    config.dashboard.default_city = ask("Default city:", &config.dashboard.default_city)?;
    config.proxy.listen = ask("Proxy listen address:", &config.proxy.listen)?;
    config.proxy.upstream_url = ask("Upstream weather URL:", &config.proxy.upstream_url)?;

    // Reject unusable URLs before they reach disk.
    ProxyClient::new(&config.dashboard.api_url)?;
    provider_from_config(&config.proxy)?;

    let saved = match path {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };

    tracing::info!(path = %saved.display(), "configuration saved");
    println!("Configuration saved to {}", saved.display());
    Ok(())
}

/// Prompt with the current value as default; blank answers keep it.
fn ask(message: &str, current: &str) -> anyhow::Result<String> {
    let answer = Text::new(message).with_default(current).prompt()?;
    let answer = answer.trim();

    Ok(if answer.is_empty() { current } else { answer }.to_string())
}

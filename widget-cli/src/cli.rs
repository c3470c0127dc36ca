use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_widget_core::{
    Config, WeatherApiProvider, WeatherProvider, Widget, provider_from_config,
    render::{PLACEHOLDER, render},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city")]
pub struct Cli {
    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key (and an optional endpoint override).
    Configure,

    /// Look up one city and print the widget.
    Show {
        /// City or place name, passed to the provider as typed.
        city: String,

        /// Print the weather record as JSON instead of the widget.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, json }) => show(&city, json).await,
            Some(Command::Interactive) | None => interactive().await,
        }
    }
}

fn load_widget() -> anyhow::Result<Widget<WeatherApiProvider>> {
    let config = Config::load()?;
    if config.resolved_api_key().is_none() {
        tracing::warn!("no API key configured; lookups will be rejected by the provider");
    }
    Ok(Widget::new(provider_from_config(&config)))
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let base_url = Text::new("Endpoint override (blank for default):")
        .with_initial_value(config.base_url.as_deref().unwrap_or_default())
        .prompt()
        .context("Failed to read endpoint override")?;

    config.api_key = Some(api_key.trim().to_string()).filter(|key| !key.is_empty());
    config.base_url = Some(base_url.trim().to_string()).filter(|url| !url.is_empty());

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

async fn show(city: &str, json: bool) -> anyhow::Result<ExitCode> {
    let mut widget = load_widget()?;
    show_with(&mut widget, city, json, &mut io::stdout().lock()).await
}

/// One submission for `city`, writing the view (or the record as JSON) to `out`.
///
/// Fails the exit status whenever the widget ends up showing an error.
async fn show_with<P: WeatherProvider>(
    widget: &mut Widget<P>,
    city: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    widget.set_input(city);
    let outcome = widget.submit().await;

    if json {
        match (&widget.state().last_result, outcome) {
            (Some(record), Ok(())) => {
                writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
            }
            (_, Err(err)) => eprintln!("{err}"),
            (None, Ok(())) => {}
        }
    } else {
        writeln!(out, "{}", widget.render())?;
    }

    Ok(if widget.state().last_error.is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn interactive() -> anyhow::Result<ExitCode> {
    let mut widget = load_widget()?;
    println!("{}\n", widget.render());

    loop {
        let answer = Text::new("City:")
            .with_placeholder(PLACEHOLDER)
            .with_initial_value(&widget.state().location_input)
            .prompt();

        let text = match answer {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        widget.set_input(text);
        // The outcome is already part of the state and shows up in the view.
        let _ = widget.submit_with(|state| println!("{}\n", render(state))).await;
    }

    Ok(ExitCode::SUCCESS)
}

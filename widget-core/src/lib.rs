//! Core library for the weather widget.
//!
//! This crate defines:
//! - The widget state and its search handler
//! - Message formatters and the state-to-view renderer
//! - The WeatherAPI.com client behind a provider trait
//! - Configuration (API key, endpoint override)
//!
//! It is used by the `weather-widget` terminal host, but any front end can
//! drive a [`Widget`] and draw its [`View`].

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod render;
pub mod widget;

pub use config::Config;
pub use error::SearchError;
pub use model::{CELSIUS, WeatherRecord};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use render::{Icon, View, render, render_at};
pub use widget::{Widget, WidgetState};

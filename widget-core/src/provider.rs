use crate::{Config, WeatherRecord, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a free-text location query.
///
/// The query is passed through untouched; resolving it to a place is the
/// provider's job.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(&self, query: &str) -> anyhow::Result<WeatherRecord>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_conditions(&self, query: &str) -> anyhow::Result<WeatherRecord> {
        (**self).current_conditions(query).await
    }
}

/// Construct the WeatherAPI.com client from config.
///
/// A missing API key is not an error here: an empty key is sent and the
/// provider's rejection surfaces as an ordinary failed lookup.
pub fn provider_from_config(config: &Config) -> WeatherApiProvider {
    let api_key = config.resolved_api_key().unwrap_or_default();

    match config.base_url.as_deref() {
        Some(base_url) => WeatherApiProvider::with_base_url(api_key, base_url),
        None => WeatherApiProvider::new(api_key),
    }
}

use serde::{Deserialize, Serialize};

/// Unit tag for degrees Celsius, the only unit the search handler produces.
pub const CELSIUS: &str = "C";

/// Display-ready current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: f64,
    /// Provider-defined condition label, e.g. "Partly cloudy".
    pub description: String,
    /// Place name as resolved by the provider, which may differ from the query.
    pub location: String,
    pub unit: String,
}

impl WeatherRecord {
    pub fn celsius(
        temperature: f64,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            description: description.into(),
            location: location.into(),
            unit: CELSIUS.to_string(),
        }
    }

    pub fn is_celsius(&self) -> bool {
        self.unit == CELSIUS
    }
}

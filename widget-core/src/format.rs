//! Pure message formatters for the fields of a [`WeatherRecord`](crate::WeatherRecord).
//!
//! The wording is the widget's established user-facing copy and is kept as-is.

use std::borrow::Cow;

use chrono::{Local, Timelike};

use crate::model::CELSIUS;

/// Known condition labels (lowercase) and the sentence shown for each.
///
/// The thunderstorm key is spelled "thunderstrom", so the provider's
/// "Thunderstorm" label falls through to the identity fallback. Kept until
/// the copy owner signs off on correcting it.
const DESCRIPTION_MESSAGES: &[(&str, &str)] = &[
    ("sunny", " It's a beautiful sunny day!"),
    ("partly cloudy", "Expect some clouds and sunshine!"),
    ("overcast", "The sky is overcast"),
    ("rain", " Don't forget your umberalla! It's raining."),
    ("thunderstrom", "Thunderstorms are expected today"),
    ("snow", "Bundle up! It's snowing"),
    ("mist", "It's misty outside"),
    ("fog", "Be casreful, there's fog outside"),
];

/// Night runs from 18:00 up to (not including) 06:00.
const NIGHT_STARTS: u32 = 18;
const DAY_STARTS: u32 = 6;

/// Qualitative message for a temperature.
///
/// Celsius values are banded at 0, 10, 20 and 30, each band including its
/// lower edge. Any other unit gets a bare `<value>°<unit>`.
pub fn temperature_message(temperature: f64, unit: &str) -> String {
    let t = display_number(temperature);

    if unit != CELSIUS {
        return format!("{t}°{unit}");
    }

    if temperature < 0.0 {
        format!("It's freezing at {t}°C! Bundle Up!")
    } else if temperature < 10.0 {
        format!("It's quit cold at {t}°C! Wear warm clothes!")
    } else if temperature < 20.0 {
        format!("The temperature is {t}°C. Comfortable for a light jacket.")
    } else if temperature < 30.0 {
        format!(" It's pleasent {t}°C. Enjoy the nice weather!")
    } else {
        format!(" It's hot at {t}°C. Stay hyderated! ")
    }
}

/// Sentence for a known condition label, or the label itself when unknown.
pub fn description_message(description: &str) -> Cow<'_, str> {
    let key = description.to_lowercase();

    DESCRIPTION_MESSAGES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, message)| Cow::Borrowed(*message))
        .unwrap_or(Cow::Borrowed(description))
}

/// Location line qualified by the current local time of day.
///
/// Reads the wall clock on every call.
pub fn location_message(location: &str) -> String {
    location_message_at(location, Local::now().hour())
}

/// Location line for an explicit local hour (0-23).
pub fn location_message_at(location: &str, hour: u32) -> String {
    let qualifier = if is_night(hour) { "at night" } else { "During the day!" };
    format!(" {location} {qualifier}")
}

fn is_night(hour: u32) -> bool {
    hour >= NIGHT_STARTS || hour < DAY_STARTS
}

/// Prints integral values without a fractional part and folds `-0` into `0`.
fn display_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

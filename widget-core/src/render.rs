//! Projection of [`WidgetState`] into a view.
//!
//! Rendering has no side effects; it only reads the state (and the wall
//! clock, for the time-of-day qualifier on the location line).

use std::fmt;

use crate::{
    format::{description_message, location_message, location_message_at, temperature_message},
    widget::WidgetState,
};

pub const TITLE: &str = "Weather Widget App";
pub const SUBTITLE: &str = "Search For The Current Weather Conditions Of The City";
pub const PLACEHOLDER: &str = "Enter a city name:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Thermometer,
    Cloud,
    MapPin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Thermometer => "🌡",
            Icon::Cloud => "☁",
            Icon::MapPin => "📍",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub icon: Icon,
    pub text: String,
}

/// Everything the widget shows for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input: InputView,
    pub button: ButtonView,
    pub error: Option<String>,
    /// Temperature, condition and location lines; empty when there is no result.
    pub lines: Vec<ResultLine>,
}

/// Renders `state`, reading the current local hour for the location line.
pub fn render(state: &WidgetState) -> View {
    build(state, location_message)
}

/// Renders `state` as if the local hour were `hour`.
pub fn render_at(state: &WidgetState, hour: u32) -> View {
    build(state, |location| location_message_at(location, hour))
}

fn build(state: &WidgetState, location_line: impl Fn(&str) -> String) -> View {
    let button = if state.is_searching {
        ButtonView { label: "Loading...", disabled: true }
    } else {
        ButtonView { label: "Search", disabled: false }
    };

    let lines = state
        .last_result
        .as_ref()
        .map(|record| {
            vec![
                ResultLine {
                    icon: Icon::Thermometer,
                    text: temperature_message(record.temperature, &record.unit),
                },
                ResultLine {
                    icon: Icon::Cloud,
                    text: description_message(&record.description).into_owned(),
                },
                ResultLine { icon: Icon::MapPin, text: location_line(&record.location) },
            ]
        })
        .unwrap_or_default();

    View {
        title: TITLE,
        subtitle: SUBTITLE,
        input: InputView { value: state.location_input.clone(), placeholder: PLACEHOLDER },
        button,
        error: state.error_message(),
        lines,
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;

        let field = if self.input.value.is_empty() {
            self.input.placeholder
        } else {
            self.input.value.as_str()
        };
        write!(f, "[ {field} ] [{}]", self.button.label)?;

        if let Some(error) = &self.error {
            write!(f, "\n\n{error}")?;
        }

        if !self.lines.is_empty() {
            writeln!(f)?;
        }
        for line in &self.lines {
            write!(f, "\n{} {}", line.icon.glyph(), line.text.trim())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::SearchError, model::WeatherRecord};

    fn with_result() -> WidgetState {
        WidgetState {
            location_input: "london".into(),
            last_result: Some(WeatherRecord::celsius(-2.0, "Snow", "London")),
            ..WidgetState::default()
        }
    }

    #[test]
    fn idle_state_shows_an_enabled_search_button() {
        let view = render_at(&WidgetState::default(), 12);

        assert_eq!(view.button, ButtonView { label: "Search", disabled: false });
        assert_eq!(view.input.value, "");
        assert_eq!(view.error, None);
        assert!(view.lines.is_empty());
    }

    #[test]
    fn searching_state_disables_the_button() {
        let state = WidgetState { is_searching: true, ..WidgetState::default() };
        let view = render_at(&state, 12);

        assert_eq!(view.button, ButtonView { label: "Loading...", disabled: true });
    }

    #[test]
    fn result_lines_go_through_the_formatters() {
        let view = render_at(&with_result(), 9);

        let texts: Vec<_> = view.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "It's freezing at -2°C! Bundle Up!",
                "Bundle up! It's snowing",
                " London During the day!",
            ]
        );
        assert_eq!(view.input.value, "london");
    }

    #[test]
    fn error_and_result_are_rendered_independently() {
        let state = WidgetState { last_error: Some(SearchError::LookupFailed), ..with_result() };
        let view = render_at(&state, 12);

        assert_eq!(view.error.as_deref(), Some("City not found. Please try again!"));
        assert_eq!(view.lines.len(), 3);
    }

    #[test]
    fn wall_clock_render_matches_one_of_the_fixed_hours() {
        let state = with_result();
        let view = render(&state);

        assert!(view == render_at(&state, 12) || view == render_at(&state, 22));
    }

    #[test]
    fn display_shows_placeholder_error_and_glyphs() {
        let empty = render_at(&WidgetState::default(), 12).to_string();
        assert!(empty.starts_with("Weather Widget App\n"));
        assert!(empty.contains("[ Enter a city name: ] [Search]"));

        let state = WidgetState {
            last_error: Some(SearchError::EmptyInput),
            ..WidgetState::default()
        };
        let failed = render_at(&state, 12).to_string();
        assert!(failed.ends_with("\n\nPlease enter a valid location!"));

        let shown = render_at(&with_result(), 23).to_string();
        assert!(shown.contains("[ london ] [Search]"));
        assert!(shown.contains("🌡 It's freezing at -2°C! Bundle Up!"));
        assert!(shown.contains("☁ Bundle up! It's snowing"));
        assert!(shown.ends_with("📍 London at night"));
    }
}

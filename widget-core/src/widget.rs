//! The widget's state and its search handler.
//!
//! State changes only through [`WidgetState::set_input`],
//! [`WidgetState::begin_search`] and [`WidgetState::finish_search`]; the view
//! is re-derived from the state after each of them (see [`crate::render`]).

use crate::{
    error::SearchError,
    model::WeatherRecord,
    provider::WeatherProvider,
    render::{View, render},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    /// Current contents of the text field.
    pub location_input: String,
    pub last_result: Option<WeatherRecord>,
    pub last_error: Option<SearchError>,
    /// True only while a lookup is in flight.
    pub is_searching: bool,
}

impl WidgetState {
    /// Text field change. No validation happens here.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.location_input = text.into();
    }

    /// Validates the input and marks a lookup as started.
    ///
    /// Returns the trimmed query to send. On empty input the error slot is
    /// set, any shown result is cleared and `is_searching` is left alone.
    pub fn begin_search(&mut self) -> Result<String, SearchError> {
        let query = self.location_input.trim();

        if query.is_empty() {
            self.last_error = Some(SearchError::EmptyInput);
            self.last_result = None;
            return Err(SearchError::EmptyInput);
        }

        let query = query.to_string();
        self.is_searching = true;
        self.last_error = None;
        Ok(query)
    }

    /// Applies the outcome of a lookup started with [`begin_search`](Self::begin_search).
    ///
    /// Every failure collapses into [`SearchError::LookupFailed`]; its cause is
    /// logged and never stored.
    pub fn finish_search(
        &mut self,
        outcome: anyhow::Result<WeatherRecord>,
    ) -> Result<(), SearchError> {
        let result = match outcome {
            Ok(record) => {
                tracing::debug!(location = %record.location, "weather lookup succeeded");
                self.last_result = Some(record);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = ?err, "Error fetching weather data");
                self.last_error = Some(SearchError::LookupFailed);
                self.last_result = None;
                Err(SearchError::LookupFailed)
            }
        };

        self.is_searching = false;
        result
    }

    /// Text for the error slot, if any.
    pub fn error_message(&self) -> Option<String> {
        self.last_error.map(|err| err.to_string())
    }
}

/// One widget instance: its own state plus the provider it queries.
#[derive(Debug)]
pub struct Widget<P> {
    state: WidgetState,
    provider: P,
}

impl<P: WeatherProvider> Widget<P> {
    pub fn new(provider: P) -> Self {
        Self { state: WidgetState::default(), provider }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    pub fn render(&self) -> View {
        render(&self.state)
    }

    /// Form submission.
    pub async fn submit(&mut self) -> Result<(), SearchError> {
        self.submit_with(|_| {}).await
    }

    /// Form submission, calling `on_change` after every state update so the
    /// host can re-render.
    ///
    /// Failures are already reflected in the state when this returns; the
    /// returned error is informational.
    pub async fn submit_with<F>(&mut self, mut on_change: F) -> Result<(), SearchError>
    where
        F: FnMut(&WidgetState),
    {
        let query = match self.state.begin_search() {
            Ok(query) => query,
            Err(err) => {
                on_change(&self.state);
                return Err(err);
            }
        };
        on_change(&self.state);

        tracing::debug!(%query, "looking up current conditions");
        let outcome = self.provider.current_conditions(&query).await;

        let result = self.state.finish_search(outcome);
        on_change(&self.state);
        result
    }
}

use thiserror::Error;

/// User-visible outcome of a failed search.
///
/// The `Display` text is exactly what the widget shows in its error slot. The
/// underlying cause of a `LookupFailed` is only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a valid location!")]
    EmptyInput,

    /// Network failure, non-OK status and unparseable body all end up here.
    #[error("City not found. Please try again!")]
    LookupFailed,
}

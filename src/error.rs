use thiserror::Error;

/// Result type alias for travel operations.
pub type Result<T> = std::result::Result<T, TravelError>;

/// Errors that can occur when using the wanderlust library.
#[derive(Error, Debug)]
pub enum TravelError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The service answered with a non-OK status
    #[error("Service returned status: {0}")]
    ServiceStatus(String),

    /// Geocoding found nothing for the given text
    #[error("No geocoding results for the given address")]
    NoResults,

    /// Missing API key
    #[error("API key required. Set GOOGLE_MAPS_API_KEY or use TravelClient::new() with a key.")]
    MissingApiKey,
}

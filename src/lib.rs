//! # wanderlust
//!
//! An async Rust library for virtual travel: type a destination, resolve it
//! to a real place, and explore it through Street View.
//!
//! This library provides:
//! - City autocomplete suggestions for partial destination text
//! - Geocoding of free text to a canonical address and coordinate
//! - Panorama availability lookup with a satellite-map fallback
//! - A session that tracks the places visited during one trip
//!
//! ## Example
//!
//! ```no_run
//! use wanderlust::{explorer, TravelClient, TripState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TravelClient::from_env()?;
//!
//!     let mut state = TripState::new();
//!     state.mark_provider_ready();
//!
//!     // Geocode "Paris" and pick a panorama or map view for it
//!     explorer::explore(&client, &mut state, Some("Paris")).await;
//!
//!     if let Some(place) = &state.session.current {
//!         println!("Now visiting {}", place.address);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod autocomplete;
mod error;
mod geocode;
mod panorama;
mod types;
pub mod debounce;
pub mod explorer;
pub mod input;
pub mod provider;
pub mod session;

pub use autocomplete::MAX_SUGGESTIONS;
pub use error::{Result, TravelError};
pub use explorer::{DESTINATIONS, RANDOM_EXPLORE_DELAY};
pub use input::{InputController, DEBOUNCE_DELAY};
pub use panorama::PANORAMA_SEARCH_RADIUS_M;
pub use provider::TravelProvider;
pub use session::{Session, TripState};
pub use types::{
    Coordinate, PointOfView, ResolvedPlace, SceneView, Suggestion, FALLBACK_MAP_ZOOM, INITIAL_POV,
};

use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Environment variable holding the Google Maps API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Client for the Google Maps web services the travel workflow uses:
/// Places Autocomplete, Geocoding, and Street View metadata.
///
/// Maintains a reusable HTTP client for efficient connection pooling. All
/// three endpoints require an API key.
#[derive(Clone)]
pub struct TravelClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TravelClient {
    /// Creates a new client with the given Google Maps API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from the `GOOGLE_MAPS_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`TravelError::MissingApiKey`] when the variable is unset or
    /// empty. There is no degraded mode without a key.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(TravelError::MissingApiKey),
        }
    }

    /// Creates a client with a custom reqwest Client.
    ///
    /// This allows you to configure the HTTP client with custom settings
    /// such as proxies, timeouts, or custom headers.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL (self-hosted proxy, mock
    /// server in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// City suggestions for a partial destination text, at most
    /// [`MAX_SUGGESTIONS`], in service order.
    pub async fn suggest(&self, input: &str) -> Result<Vec<Suggestion>> {
        autocomplete::fetch_suggestions(&self.client, &self.base_url, &self.api_key, input).await
    }

    /// Resolve free text to a canonical address and coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`TravelError::ServiceStatus`] for a non-OK status and
    /// [`TravelError::NoResults`] for an empty result set.
    pub async fn geocode(&self, address: &str) -> Result<ResolvedPlace> {
        geocode::geocode_address(&self.client, &self.base_url, &self.api_key, address).await
    }

    /// Check whether a panorama exists within `radius_m` meters of a
    /// coordinate.
    pub async fn find_panorama(&self, location: Coordinate, radius_m: u32) -> Result<bool> {
        panorama::find_panorama(
            &self.client,
            &self.base_url,
            &self.api_key,
            location,
            radius_m,
        )
        .await
    }
}

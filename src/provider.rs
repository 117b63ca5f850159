use crate::error::Result;
use crate::types::{Coordinate, ResolvedPlace, Suggestion};
use crate::TravelClient;

/// The three requests the exploration workflow needs from the external
/// mapping service.
///
/// [`TravelClient`] implements this against the live Google endpoints; tests
/// drive the handlers with in-memory implementations.
#[async_trait::async_trait]
pub trait TravelProvider: Send + Sync {
    /// City suggestions for a partial destination text.
    async fn suggest(&self, input: &str) -> Result<Vec<Suggestion>>;

    /// Resolve free text to a canonical address and coordinate.
    async fn geocode(&self, address: &str) -> Result<ResolvedPlace>;

    /// Whether a panorama exists within `radius_m` meters of a coordinate.
    async fn find_panorama(&self, location: Coordinate, radius_m: u32) -> Result<bool>;
}

#[async_trait::async_trait]
impl TravelProvider for TravelClient {
    async fn suggest(&self, input: &str) -> Result<Vec<Suggestion>> {
        TravelClient::suggest(self, input).await
    }

    async fn geocode(&self, address: &str) -> Result<ResolvedPlace> {
        TravelClient::geocode(self, address).await
    }

    async fn find_panorama(&self, location: Coordinate, radius_m: u32) -> Result<bool> {
        TravelClient::find_panorama(self, location, radius_m).await
    }
}

use crate::error::{Result, TravelError};
use crate::types::{Coordinate, ResolvedPlace};
use reqwest::Client;
use serde::Deserialize;

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Internal structure for parsing the geocoding response
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LocationResponse,
}

#[derive(Debug, Deserialize)]
struct LocationResponse {
    lat: f64,
    lng: f64,
}

/// Parse a geocoding response body into the first result.
///
/// Only the first result matters: it carries the canonical address the
/// session records. Non-OK statuses and empty result sets are errors the
/// caller absorbs.
fn parse_geocode(body: &str) -> Result<ResolvedPlace> {
    let data: GeocodeResponse = serde_json::from_str(body)
        .map_err(|e| TravelError::ParseError(format!("geocode JSON: {e}")))?;

    if data.status != "OK" {
        return Err(TravelError::ServiceStatus(data.status));
    }

    let first = data.results.into_iter().next().ok_or(TravelError::NoResults)?;

    Ok(ResolvedPlace {
        address: first.formatted_address,
        coordinate: Coordinate {
            lat: first.geometry.location.lat,
            lng: first.geometry.location.lng,
        },
    })
}

/// Resolve free text to a canonical address and coordinate.
pub async fn geocode_address(
    client: &Client,
    base_url: &str,
    api_key: &str,
    address: &str,
) -> Result<ResolvedPlace> {
    let url = format!("{base_url}{GEOCODE_PATH}");
    let response = client
        .get(&url)
        .query(&[("address", address), ("key", api_key)])
        .send()
        .await?;
    let text = response.text().await?;
    parse_geocode(&text)
}

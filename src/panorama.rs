use crate::error::{Result, TravelError};
use crate::types::Coordinate;
use reqwest::Client;
use serde::Deserialize;

const METADATA_PATH: &str = "/maps/api/streetview/metadata";

/// Search radius in meters around the coordinate when looking for a panorama.
pub const PANORAMA_SEARCH_RADIUS_M: u32 = 50;

/// Internal structure for parsing the metadata response.
///
/// The metadata endpoint does not consume quota, so availability checks are
/// free. Only the status field matters here.
#[derive(Debug, Deserialize)]
struct MetadataResponse {
    status: String,
}

/// Map a metadata status to panorama availability.
///
/// `OK` means a panorama exists near the coordinate; `ZERO_RESULTS` and
/// `NOT_FOUND` mean none does. Anything else is a service error.
fn parse_availability(body: &str) -> Result<bool> {
    let data: MetadataResponse = serde_json::from_str(body)
        .map_err(|e| TravelError::ParseError(format!("metadata JSON: {e}")))?;

    match data.status.as_str() {
        "OK" => Ok(true),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(false),
        other => Err(TravelError::ServiceStatus(other.to_string())),
    }
}

/// Check whether a panorama exists within `radius_m` meters of a coordinate.
pub async fn find_panorama(
    client: &Client,
    base_url: &str,
    api_key: &str,
    location: Coordinate,
    radius_m: u32,
) -> Result<bool> {
    let url = format!("{base_url}{METADATA_PATH}");
    let location_param = format!("{},{}", location.lat, location.lng);
    let radius_param = radius_m.to_string();
    let response = client
        .get(&url)
        .query(&[
            ("location", location_param.as_str()),
            ("radius", radius_param.as_str()),
            ("key", api_key),
        ])
        .send()
        .await?;
    let text = response.text().await?;
    parse_availability(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_availability_ok() {
        let body = r#"{
            "status": "OK",
            "pano_id": "abc123",
            "location": {"lat": 48.85, "lng": 2.35},
            "date": "2023-05",
            "copyright": "© Google"
        }"#;
        assert!(parse_availability(body).unwrap());
    }

    #[test]
    fn test_parse_availability_zero_results() {
        assert!(!parse_availability(r#"{"status": "ZERO_RESULTS"}"#).unwrap());
        assert!(!parse_availability(r#"{"status": "NOT_FOUND"}"#).unwrap());
    }

    #[test]
    fn test_parse_availability_error_status() {
        match parse_availability(r#"{"status": "OVER_QUERY_LIMIT"}"#) {
            Err(TravelError::ServiceStatus(s)) => assert_eq!(s, "OVER_QUERY_LIMIT"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

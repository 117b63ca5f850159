use crate::error::{Result, TravelError};
use crate::types::Suggestion;
use reqwest::Client;
use serde::Deserialize;

const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";

/// Place-type filter applied to every suggestion request.
const CITY_TYPES: &str = "(cities)";

/// Maximum number of suggestions kept from a response.
pub const MAX_SUGGESTIONS: usize = 5;

/// Internal structure for parsing the autocomplete response
#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
    structured_formatting: StructuredFormatting,
}

#[derive(Debug, Deserialize)]
struct StructuredFormatting {
    main_text: String,
    #[serde(default)]
    secondary_text: String,
}

/// Turn a raw response body into an ordered suggestion list.
///
/// `OK` yields up to [`MAX_SUGGESTIONS`] suggestions in service order,
/// `ZERO_RESULTS` yields an empty list, any other status is an error.
fn parse_predictions(body: &str) -> Result<Vec<Suggestion>> {
    let data: AutocompleteResponse = serde_json::from_str(body)
        .map_err(|e| TravelError::ParseError(format!("autocomplete JSON: {e}")))?;

    match data.status.as_str() {
        "OK" => Ok(data
            .predictions
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|p| Suggestion {
                place_id: p.place_id,
                primary: p.structured_formatting.main_text,
                secondary: p.structured_formatting.secondary_text,
                description: p.description,
            })
            .collect()),
        "ZERO_RESULTS" => Ok(Vec::new()),
        other => Err(TravelError::ServiceStatus(other.to_string())),
    }
}

/// Fetch city suggestions for a partial destination text.
pub async fn fetch_suggestions(
    client: &Client,
    base_url: &str,
    api_key: &str,
    input: &str,
) -> Result<Vec<Suggestion>> {
    let url = format!("{base_url}{AUTOCOMPLETE_PATH}");
    let response = client
        .get(&url)
        .query(&[("input", input), ("types", CITY_TYPES), ("key", api_key)])
        .send()
        .await?;
    let text = response.text().await?;
    parse_predictions(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predictions_ok() {
        let body = r#"{
            "status": "OK",
            "predictions": [
                {
                    "place_id": "p1",
                    "description": "Paris, France",
                    "structured_formatting": {"main_text": "Paris", "secondary_text": "France"}
                },
                {
                    "place_id": "p2",
                    "description": "Paris, TX, USA",
                    "structured_formatting": {"main_text": "Paris", "secondary_text": "TX, USA"}
                }
            ]
        }"#;

        let suggestions = parse_predictions(body).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].place_id, "p1");
        assert_eq!(suggestions[0].primary, "Paris");
        assert_eq!(suggestions[0].secondary, "France");
        assert_eq!(suggestions[1].description, "Paris, TX, USA");
    }

    #[test]
    fn test_parse_predictions_caps_at_five() {
        let prediction = r#"{
            "place_id": "p",
            "description": "D",
            "structured_formatting": {"main_text": "M", "secondary_text": "S"}
        }"#;
        let body = format!(
            r#"{{"status": "OK", "predictions": [{}]}}"#,
            vec![prediction; 7].join(",")
        );

        let suggestions = parse_predictions(&body).unwrap();
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_parse_predictions_zero_results() {
        let body = r#"{"status": "ZERO_RESULTS", "predictions": []}"#;
        assert!(parse_predictions(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_predictions_denied() {
        let body = r#"{"status": "REQUEST_DENIED"}"#;
        match parse_predictions(body) {
            Err(TravelError::ServiceStatus(s)) => assert_eq!(s, "REQUEST_DENIED"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

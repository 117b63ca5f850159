use httpmock::prelude::*;
use wanderlust::{explorer, SceneView, TravelClient, TripState};

fn geocode_body(address: &str, lat: f64, lng: f64) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": address,
                "geometry": {"location": {"lat": lat, "lng": lng}}
            }
        ]
    })
}

fn ready_state() -> TripState {
    let mut state = TripState::new();
    state.mark_provider_ready();
    state
}

#[tokio::test]
async fn test_explore_end_to_end_with_panorama() {
    let server = MockServer::start();

    let geocode_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/api/geocode/json")
            .query_param("address", "Paris")
            .query_param("key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(geocode_body("Paris, France", 48.856614, 2.3522219));
    });

    let metadata_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/api/streetview/metadata")
            .query_param("radius", "50")
            .query_param("key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "OK",
                "pano_id": "pano-1",
                "location": {"lat": 48.856614, "lng": 2.3522219},
                "date": "2023-05",
                "copyright": "© Google"
            }));
    });

    let client = TravelClient::new("test-key").with_base_url(server.base_url());
    let mut state = ready_state();

    explorer::explore(&client, &mut state, Some("Paris")).await;

    geocode_mock.assert();
    metadata_mock.assert();

    assert!(state.session.trip_active);
    assert_eq!(state.session.visited, vec!["Paris, France"]);
    assert_eq!(
        state.session.current.as_ref().unwrap().address,
        "Paris, France"
    );
    match state.view.as_ref().unwrap() {
        SceneView::Panorama {
            position,
            navigation_controls,
            address_overlay,
            ..
        } => {
            assert!((position.lat - 48.856614).abs() < 1e-6);
            assert!(*navigation_controls);
            assert!(!*address_overlay);
        }
        other => panic!("expected panorama, got {other:?}"),
    }
    assert!(!state.loading);
}

#[tokio::test]
async fn test_explore_falls_back_when_no_panorama_nearby() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/maps/api/geocode/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(geocode_body("Antarctica", -82.862752, 135.0));
    });

    server.mock(|when, then| {
        when.method(GET).path("/maps/api/streetview/metadata");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "ZERO_RESULTS"}));
    });

    let client = TravelClient::new("test-key").with_base_url(server.base_url());
    let mut state = ready_state();

    explorer::explore(&client, &mut state, Some("Antarctica Base X")).await;

    match state.view.as_ref().unwrap() {
        SceneView::SatelliteMap { marker_label, .. } => {
            assert_eq!(marker_label, "Antarctica");
        }
        other => panic!("expected satellite map, got {other:?}"),
    }
    assert_eq!(state.session.visited, vec!["Antarctica"]);
}

#[tokio::test]
async fn test_failed_geocode_changes_nothing() {
    let server = MockServer::start();

    let geocode_mock = server.mock(|when, then| {
        when.method(GET).path("/maps/api/geocode/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "ZERO_RESULTS", "results": []}));
    });

    let client = TravelClient::new("test-key").with_base_url(server.base_url());
    let mut state = ready_state();

    explorer::explore(&client, &mut state, Some("asdkjhasjkdh")).await;

    geocode_mock.assert();
    assert!(!state.session.trip_active);
    assert!(state.session.current.is_none());
    assert!(state.session.visited.is_empty());
    assert!(state.view.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_suggest_sends_city_filter() {
    let server = MockServer::start();

    let autocomplete_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/api/place/autocomplete/json")
            .query_param("input", "Par")
            .query_param("types", "(cities)")
            .query_param("key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "OK",
                "predictions": [
                    {
                        "place_id": "p1",
                        "description": "Paris, France",
                        "structured_formatting": {
                            "main_text": "Paris",
                            "secondary_text": "France"
                        }
                    }
                ]
            }));
    });

    let client = TravelClient::new("test-key").with_base_url(server.base_url());
    let suggestions = client.suggest("Par").await.unwrap();

    autocomplete_mock.assert();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].primary, "Paris");
    assert_eq!(suggestions[0].description, "Paris, France");
}

use crate::panorama::PANORAMA_SEARCH_RADIUS_M;
use crate::provider::TravelProvider;
use crate::session::TripState;
use crate::types::SceneView;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Curated destinations for [`explore_random`].
pub const DESTINATIONS: [&str; 10] = [
    "Santorini, Greece",
    "Kyoto, Japan",
    "Banff National Park, Canada",
    "Machu Picchu, Peru",
    "Maldives",
    "Swiss Alps, Switzerland",
    "Bora Bora, French Polynesia",
    "Iceland Northern Lights",
    "Tuscany, Italy",
    "Great Barrier Reef, Australia",
];

/// Pause between picking a random destination and exploring it, so the
/// embedder can render the updated text field first.
pub const RANDOM_EXPLORE_DELAY: Duration = Duration::from_millis(100);

/// Explore a destination: geocode it, record the visit, and pick the view.
///
/// Uses `place` if given, otherwise the current destination text. No-op when
/// the trimmed name is empty or the provider is not ready. Strictly
/// sequential, no retries:
///
/// 1. Geocode. Any failure silently aborts with no state change.
/// 2. On success, the resolved place becomes current, its address joins the
///    visited list, and the trip is active.
/// 3. If a panorama exists within 50 m of the coordinate, the view becomes a
///    panorama there; otherwise (including lookup failure) a satellite map
///    with one marker at the coordinate. Exactly one of the two.
/// 4. The loading flag clears regardless of step 3.
///
/// Overlapping calls are last-write-wins; no cancellation or sequencing is
/// applied to in-flight requests.
pub async fn explore<P: TravelProvider>(provider: &P, state: &mut TripState, place: Option<&str>) {
    let target = place.unwrap_or(&state.destination).trim().to_string();
    if target.is_empty() || !state.provider_ready {
        return;
    }

    state.loading = true;

    let resolved = match provider.geocode(&target).await {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!("geocode failed for {target:?}: {e}");
            state.loading = false;
            return;
        }
    };

    tracing::debug!("resolved {target:?} to {:?}", resolved.address);
    state.session.record_visit(resolved.clone());

    state.view = Some(
        match provider
            .find_panorama(resolved.coordinate, PANORAMA_SEARCH_RADIUS_M)
            .await
        {
            Ok(true) => SceneView::panorama(resolved.coordinate),
            Ok(false) => SceneView::satellite_fallback(resolved.coordinate, resolved.address),
            Err(e) => {
                tracing::debug!("panorama lookup failed: {e}");
                SceneView::satellite_fallback(resolved.coordinate, resolved.address)
            }
        },
    );

    state.loading = false;
}

/// Pick one of the ten curated destinations at random, put it in the text
/// field, and explore it after a short delay.
pub async fn explore_random<P: TravelProvider>(provider: &P, state: &mut TripState) {
    let pick = DESTINATIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DESTINATIONS[0]);
    state.destination = pick.to_string();

    tokio::time::sleep(RANDOM_EXPLORE_DELAY).await;
    explore(provider, state, None).await;
}

/// End the trip: clears the session, the text field, and the view handle.
pub fn reset(state: &mut TripState) {
    tracing::debug!("trip reset");
    state.reset();
}

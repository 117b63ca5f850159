use crate::types::{ResolvedPlace, SceneView, Suggestion};
use serde::{Deserialize, Serialize};

/// In-memory record of one trip: active flag, current location, and the
/// ordered list of addresses visited so far.
///
/// The visited list is append-only for the session's lifetime and allows
/// duplicates. Invariant: while a trip is active, the last visited entry
/// equals the current location's address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Whether a trip is underway
    pub trip_active: bool,
    /// The place currently on display, if any
    pub current: Option<ResolvedPlace>,
    /// Canonical addresses of every place visited this session, in order
    pub visited: Vec<String>,
}

impl Session {
    /// Record a successful resolution: the place becomes current, its
    /// address is appended to the visited list, and the trip is active.
    pub fn record_visit(&mut self, place: ResolvedPlace) {
        self.visited.push(place.address.clone());
        self.current = Some(place);
        self.trip_active = true;
    }

    /// Forget everything about the trip.
    pub fn clear(&mut self) {
        self.trip_active = false;
        self.current = None;
        self.visited.clear();
    }
}

/// The single state object for one user session, owned by the embedding
/// application and passed `&mut` to the input and exploration handlers.
#[derive(Debug, Clone, Default)]
pub struct TripState {
    /// Trip record
    pub session: Session,
    /// Raw destination text as typed or selected
    pub destination: String,
    /// True while an explore call is in flight
    pub loading: bool,
    /// True once the external service has finished initializing; all
    /// handlers no-op until then
    pub provider_ready: bool,
    /// The scene currently on display; `None` when no trip is active
    pub view: Option<SceneView>,
    /// Current autocomplete suggestions, service order
    pub suggestions: Vec<Suggestion>,
    /// Whether the suggestion list is shown
    pub suggestions_visible: bool,
}

impl TripState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the external service ready. Called once from the embedder's
    /// bootstrap callback.
    pub fn mark_provider_ready(&mut self) {
        self.provider_ready = true;
    }

    /// Start over: no trip, empty text, no location, no view. Idempotent.
    /// Readiness survives a reset; the provider only loads once.
    pub fn reset(&mut self) {
        self.session.clear();
        self.destination.clear();
        self.loading = false;
        self.view = None;
        self.suggestions.clear();
        self.suggestions_visible = false;
    }
}

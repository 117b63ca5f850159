use serde::{Deserialize, Serialize};

/// GPS location with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude coordinate
    pub lat: f64,
    /// Longitude coordinate
    pub lng: f64,
}

/// An autocomplete suggestion for a destination.
///
/// Produced by the Places Autocomplete request and consumed only to populate
/// a selectable list; discarded once a selection is made or the input changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique place identifier
    pub place_id: String,
    /// Primary label (e.g. "Paris")
    pub primary: String,
    /// Secondary label (e.g. "France")
    pub secondary: String,
    /// Full description used as the destination text when selected
    pub description: String,
}

/// A destination resolved by geocoding.
///
/// Immutable once produced; held as the current location until the next
/// successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Canonical formatted address
    pub address: String,
    /// Geographic coordinate
    pub coordinate: Coordinate,
}

/// Camera orientation for the initial panorama render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointOfView {
    /// Camera heading in degrees (0-360)
    pub heading: f64,
    /// Camera pitch in degrees
    pub pitch: f64,
    /// Panorama zoom level
    pub zoom: f64,
}

/// Initial point of view for every freshly rendered panorama.
pub const INITIAL_POV: PointOfView = PointOfView {
    heading: 34.0,
    pitch: 10.0,
    zoom: 1.0,
};

/// Zoom level for the satellite-map fallback.
pub const FALLBACK_MAP_ZOOM: u8 = 15;

/// Description of the scene currently on display.
///
/// Owned exclusively by the exploration handlers and replaced wholesale on
/// every successful resolution. The embedding application renders it with
/// whatever viewer it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneView {
    /// A 360-degree panorama centered at `position`.
    Panorama {
        position: Coordinate,
        pov: PointOfView,
        /// Navigation links and pan controls
        navigation_controls: bool,
        /// Address overlay in the viewer chrome
        address_overlay: bool,
    },
    /// Overhead satellite map with a single labeled marker.
    SatelliteMap {
        center: Coordinate,
        zoom: u8,
        marker_label: String,
    },
}

impl SceneView {
    /// Panorama view at a coordinate with the fixed initial orientation.
    pub fn panorama(position: Coordinate) -> Self {
        SceneView::Panorama {
            position,
            pov: INITIAL_POV,
            navigation_controls: true,
            address_overlay: false,
        }
    }

    /// Satellite-map fallback with one marker labeled by the address.
    pub fn satellite_fallback(center: Coordinate, marker_label: impl Into<String>) -> Self {
        SceneView::SatelliteMap {
            center,
            zoom: FALLBACK_MAP_ZOOM,
            marker_label: marker_label.into(),
        }
    }

    /// True if this is the immersive panorama variant.
    pub fn is_panorama(&self) -> bool {
        matches!(self, SceneView::Panorama { .. })
    }
}

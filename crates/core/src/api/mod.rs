//! Wire contracts for the services the core consumes.
//!
//! The backing implementations (routing, geocoding, isochrone) are external;
//! only their request/response shapes live here.

pub mod client;

use serde::{Deserialize, Serialize};

use kommute_transit::models::types::{Coordinate, Itinerary, LegMode};

// ============================================================================
// Nearest properties
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitPropertiesRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres
    pub walk_distance: f64,
    pub min_transfer: u32,
    pub max_transfer: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalkablePropertiesRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres
    pub walk_distance: f64,
}

// ============================================================================
// Directions
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsOptions {
    pub walk_reluctance: f64,
    pub transport_modes: Vec<LegMode>,
}

impl Default for DirectionsOptions {
    fn default() -> Self {
        Self {
            walk_reluctance: 10.0,
            transport_modes: vec![LegMode::Subway, LegMode::Tram],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub options: DirectionsOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub itineraries: Vec<Itinerary>,
}

// ============================================================================
// Isochrone
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsochroneRequest {
    pub origin: Coordinate,
    /// Metres
    pub walk_distance: f64,
}

// ============================================================================
// Place search
// ============================================================================

/// Raw geocoder hit. Coordinates arrive as strings.
#[derive(Clone, Debug, Deserialize)]
pub struct PlaceSearchResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub boundingbox: Vec<String>,
}

/// Normalized geocoder hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub address: String,
    pub bounding_box: Vec<f64>,
}

impl SearchItem {
    /// Parse a raw hit; `None` when the coordinates are unparsable.
    pub fn from_wire(raw: PlaceSearchResult) -> Option<Self> {
        Some(Self {
            latitude: raw.lat.parse().ok()?,
            longitude: raw.lon.parse().ok()?,
            name: raw.name,
            address: raw.display_name,
            bounding_box: raw
                .boundingbox
                .iter()
                .filter_map(|value| value.parse().ok())
                .collect(),
        })
    }
}

//! Core data types for coordinates, stops and itineraries.
//!
//! The serde attributes track the wire shapes of the directions and
//! nearest-properties services: envelopes are snake_case, itinerary payloads
//! are camelCase.

use chrono::{DateTime, FixedOffset};
use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::identifiers::StopIdentifier;

// ============================================================================
// Coordinates
// ============================================================================

/// Immutable geographic position. Equality is component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(c: Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

// ============================================================================
// Stops
// ============================================================================

/// A logical transit station.
///
/// One station may group several physical platforms, so `stop_ids` carries
/// every raw identifier sharing the display group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "stop_id")]
    pub stop_ids: Vec<StopIdentifier>,
    pub name: String,
    pub display_name: String,
    pub coordinates: Coordinate,
}

impl Stop {
    /// Primary raw identifier, used for line-color lookup.
    pub fn primary_id(&self) -> Option<&StopIdentifier> {
        self.stop_ids.first()
    }
}

// ============================================================================
// Itineraries
// ============================================================================

/// Travel mode of a single itinerary leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegMode {
    Walk,
    Bus,
    Subway,
    Tram,
}

impl LegMode {
    pub fn is_transit(self) -> bool {
        !matches!(self, LegMode::Walk)
    }
}

/// Route metadata, present only on transit legs.
///
/// `color` is a hex RGB string without the leading `#`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub short_name: String,
    pub long_name: String,
    pub color: String,
}

/// Named endpoint of a leg (stop or street corner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegPlace {
    pub name: String,
}

/// Scheduled/estimated times for one end of a leg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LegTiming {
    #[serde(default)]
    pub scheduled_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub estimated: Option<DateTime<FixedOffset>>,
}

/// Encoded geometry of one leg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct LegGeometry {
    /// Google-encoded polyline, 1e5 precision.
    pub points: String,
    #[serde(default)]
    pub length: Option<u32>,
}

/// One uninterrupted segment of an itinerary using a single mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub mode: LegMode,
    pub from: LegPlace,
    pub to: LegPlace,
    /// Seconds
    pub duration: f64,
    /// Metres
    pub distance: f64,
    #[serde(default)]
    pub leg_geometry: LegGeometry,
    #[serde(default)]
    pub route: Option<RouteInfo>,
    #[serde(default)]
    pub start: Option<LegTiming>,
    #[serde(default)]
    pub end: Option<LegTiming>,
}

/// One complete proposed journey from origin to destination.
///
/// Legs are temporally ordered, so leg i's arrival point is leg i+1's
/// departure point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Seconds
    pub duration: f64,
    /// Metres
    #[serde(default)]
    pub walk_distance: f64,
    /// Seconds
    #[serde(default)]
    pub walk_time: Option<f64>,
    /// Seconds
    #[serde(default)]
    pub waiting_time: Option<f64>,
    #[serde(default)]
    pub transfers: u32,
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub start: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end: Option<DateTime<FixedOffset>>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("invalid leg geometry: {0}")]
    InvalidGeometry(#[from] polyline::errors::PolylineError),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_deserializes_from_wire_shape() {
        let json = r#"{
            "mode": "SUBWAY",
            "duration": 540,
            "distance": 4820.5,
            "from": { "name": "KLCC" },
            "to": { "name": "Pasar Seni" },
            "legGeometry": { "points": "_p~iF~ps|U", "length": 2 },
            "route": {
                "shortName": "KJL",
                "longName": "Kelana Jaya Line",
                "color": "76232f"
            }
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();
        assert_eq!(leg.mode, LegMode::Subway);
        assert!(leg.mode.is_transit());
        assert_eq!(leg.from.name, "KLCC");
        assert_eq!(leg.route.as_ref().unwrap().color, "76232f");
        assert_eq!(leg.leg_geometry.length, Some(2));
    }

    #[test]
    fn walk_leg_has_no_route() {
        let json = r#"{
            "mode": "WALK",
            "duration": 120,
            "distance": 150,
            "from": { "name": "Origin" },
            "to": { "name": "KLCC" },
            "legGeometry": { "points": "" }
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();
        assert_eq!(leg.mode, LegMode::Walk);
        assert!(!leg.mode.is_transit());
        assert!(leg.route.is_none());
    }

    #[test]
    fn stop_wire_shape() {
        let json = r#"{
            "stop_id": ["KJ10", "KJ10B"],
            "name": "KLCC",
            "display_name": "KLCC LRT Station",
            "coordinates": { "latitude": 3.1579, "longitude": 101.7133 }
        }"#;

        let stop: Stop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.stop_ids.len(), 2);
        assert_eq!(stop.primary_id().unwrap().as_str(), "KJ10");
    }

    #[test]
    fn coordinate_point_round_trip() {
        let c = Coordinate::new(3.1598, 101.7134);
        let p: Point<f64> = c.into();
        assert_eq!(p.x(), 101.7134);
        assert_eq!(p.y(), 3.1598);
        let back: Coordinate = p.0.into();
        assert_eq!(back, c);
    }
}

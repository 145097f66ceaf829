//! Rental property models as returned by the nearest-properties services.
//!
//! Property payloads are camelCase on the wire; the envelope around them is
//! snake_case. Identity is `id`; a property is never mutated once fetched —
//! the whole result set is replaced on each search.

use serde::{Deserialize, Serialize};

use kommute_transit::identifiers::PropertyIdentifier;
use kommute_transit::models::types::{Coordinate, Stop};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRange {
    pub from_price: f64,
    pub to_price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyIdentifier,
    #[serde(default)]
    pub cell_id: String,
    #[serde(default)]
    pub district: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub rental_range: Option<RentalRange>,
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinate,
    /// Straight-line metres from the search origin.
    #[serde(default)]
    pub distance: f64,
}

/// A candidate property annotated with its nearest-stop relationship.
///
/// `score` is an opaque desirability number from the ranking service; lower
/// is better. `nearest_stop` is absent in walking mode, where there is no
/// stop concept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredProperty {
    pub property: Property,
    pub score: f64,
    /// Metres
    #[serde(default)]
    pub walk_distance_nearest_stop: f64,
    /// Seconds
    #[serde(default)]
    pub walk_time_nearest_stop: f64,
    #[serde(default)]
    pub nearest_stop: Option<Stop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_envelope() {
        let json = r#"{
            "property": {
                "id": "prop-1",
                "cellId": "35f2a8c",
                "district": "KLCC",
                "name": "The Horizon Residences",
                "address": "Jalan Tun Razak, 50400 Kuala Lumpur",
                "facilities": ["pool", "gym"],
                "link": "https://example.com/prop-1",
                "rentalRange": { "fromPrice": 3000, "toPrice": 5000 },
                "type": "condominium",
                "coordinates": { "latitude": 3.1598, "longitude": 101.7134 },
                "distance": 850.0
            },
            "score": 1980,
            "walk_distance_nearest_stop": 420.0,
            "walk_time_nearest_stop": 360.0,
            "nearest_stop": {
                "stop_id": ["KJ10"],
                "name": "KLCC",
                "display_name": "KLCC LRT Station",
                "coordinates": { "latitude": 3.1579, "longitude": 101.7133 }
            }
        }"#;

        let scored: ScoredProperty = serde_json::from_str(json).unwrap();
        assert_eq!(scored.property.id.as_str(), "prop-1");
        assert_eq!(scored.property.kind, "condominium");
        assert_eq!(scored.property.rental_range.unwrap().to_price, 5000.0);
        assert_eq!(scored.nearest_stop.as_ref().unwrap().name, "KLCC");
    }

    #[test]
    fn walking_mode_payload_omits_stop() {
        let json = r#"{
            "property": {
                "id": "prop-2",
                "name": "Vortex Suites",
                "address": "Jalan Sultan Ismail",
                "type": "serviced apartment",
                "coordinates": { "latitude": 3.1558, "longitude": 101.7108 }
            },
            "score": 120
        }"#;

        let scored: ScoredProperty = serde_json::from_str(json).unwrap();
        assert!(scored.nearest_stop.is_none());
        assert_eq!(scored.walk_distance_nearest_stop, 0.0);
    }
}

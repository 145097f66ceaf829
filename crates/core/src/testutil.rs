//! Shared builders for unit tests.

use kommute_transit::identifiers::{PropertyIdentifier, StopIdentifier};
use kommute_transit::models::types::{Coordinate, Stop};

use crate::property::{Property, ScoredProperty};

pub(crate) fn stop(name: &str, id: &str, lat: f64, lon: f64) -> Stop {
    Stop {
        stop_ids: vec![StopIdentifier::new(id)],
        name: name.to_string(),
        display_name: format!("{name} LRT Station"),
        coordinates: Coordinate::new(lat, lon),
    }
}

pub(crate) fn property_at(id: &str, lat: f64, lon: f64) -> Property {
    Property {
        id: PropertyIdentifier::new(id),
        cell_id: String::new(),
        district: String::new(),
        name: format!("Property {id}"),
        address: "Jalan Ampang".to_string(),
        facilities: vec![],
        link: String::new(),
        rental_range: None,
        kind: "condominium".to_string(),
        coordinates: Coordinate::new(lat, lon),
        distance: 0.0,
    }
}

pub(crate) fn scored(id: &str, score: f64, near: Option<Stop>) -> ScoredProperty {
    scored_at(id, score, 3.1598, 101.7134, near)
}

pub(crate) fn scored_at(
    id: &str,
    score: f64,
    lat: f64,
    lon: f64,
    near: Option<Stop>,
) -> ScoredProperty {
    ScoredProperty {
        property: property_at(id, lat, lon),
        score,
        walk_distance_nearest_stop: 400.0,
        walk_time_nearest_stop: 300.0,
        nearest_stop: near,
    }
}

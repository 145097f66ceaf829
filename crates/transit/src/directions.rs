//! Itinerary normalization: decoded leg geometry plus display metadata.
//!
//! The directions service may return several itineraries; only the first one
//! is rendered. That is a deliberate simplification kept behind
//! [`normalize_directions`] so an itinerary picker can slot in later without
//! touching callers.

use geo::LineString;

use crate::geometry::bounds::Bounds;
use crate::geometry::polyline;
use crate::models::types::{Coordinate, Itinerary, Leg, LegMode, RouteInfo};

/// Line color for walking legs.
pub const WALK_LEG_COLOR: &str = "#B7B7B7";

/// Override color for the leg currently hovered in the timeline.
pub const HOVERED_LEG_COLOR: &str = "#FFFF00";

/// One renderable line layer for a single leg.
#[derive(Clone, Debug, PartialEq)]
pub struct LegLine {
    pub index: usize,
    pub mode: LegMode,
    /// Decoded `(lon, lat)` path for this leg only.
    pub path: LineString<f64>,
    /// CSS hex color the layer should be painted with.
    pub color: String,
    pub from: String,
    pub to: String,
    /// Seconds
    pub duration: f64,
    /// Metres
    pub distance: f64,
    pub route: Option<RouteInfo>,
}

/// Normalized geometry for the first itinerary of a directions response.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteGeometry {
    /// Simplified path for lightweight framing: the first leg's geometry with
    /// the origin prepended and the destination appended. Not the true
    /// multi-leg path.
    pub preview: LineString<f64>,
    /// Every leg decoded independently; legs are never merged into one path.
    pub legs: Vec<LegLine>,
    /// Box over the concatenated coordinates of all legs, for camera fitting.
    pub bounds: Bounds,
}

/// Color a leg renders with. The hovered leg wins regardless of mode.
pub fn leg_color(leg: &Leg, index: usize, hovered: Option<usize>) -> String {
    if hovered == Some(index) {
        return HOVERED_LEG_COLOR.to_string();
    }
    match (&leg.mode, &leg.route) {
        (LegMode::Walk, _) | (_, None) => WALK_LEG_COLOR.to_string(),
        (_, Some(route)) => format!("#{}", route.color),
    }
}

/// Normalize a directions response into renderable geometry.
///
/// Returns `None` when there is no itinerary, an itinerary has no legs, or
/// any leg's geometry is missing or undecodable. Degrading to no geometry at
/// all keeps the map from rendering a partial route; callers fall back to
/// framing on the origin and destination anchors.
pub fn normalize_directions(
    itineraries: &[Itinerary],
    origin: Coordinate,
    destination: Coordinate,
    hovered_leg: Option<usize>,
) -> Option<RouteGeometry> {
    let itinerary = itineraries.first()?;
    if itinerary.legs.is_empty() {
        return None;
    }

    let mut legs = Vec::with_capacity(itinerary.legs.len());
    for (index, leg) in itinerary.legs.iter().enumerate() {
        if leg.leg_geometry.points.is_empty() {
            return None;
        }
        let path = polyline::decode(&leg.leg_geometry.points).ok()?;
        if path.0.is_empty() {
            return None;
        }
        legs.push(LegLine {
            index,
            mode: leg.mode,
            color: leg_color(leg, index, hovered_leg),
            from: leg.from.name.clone(),
            to: leg.to.name.clone(),
            duration: leg.duration,
            distance: leg.distance,
            route: leg.route.clone(),
            path,
        });
    }

    let mut preview_coords = vec![origin.into()];
    preview_coords.extend(legs[0].path.coords().copied());
    preview_coords.push(destination.into());
    let preview = LineString::new(preview_coords);

    let bounds = Bounds::from_coords(
        legs.iter()
            .flat_map(|leg| leg.path.coords().copied()),
    )?;

    Some(RouteGeometry {
        preview,
        legs,
        bounds,
    })
}

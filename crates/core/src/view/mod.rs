//! View state controller.
//!
//! A single-writer state container over origin, destination, selection, mode
//! and the per-slice fetch results. Every mutation goes through a named
//! transition that applies atomically and hands back at most one
//! [`CameraFrame`] — the map performs exactly one bounds-fit per state
//! change, and recomputing the frame for an unchanged state yields the same
//! bounds.

pub mod slices;

use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use tracing::warn;

use kommute_transit::directions::{normalize_directions, RouteGeometry};
use kommute_transit::geometry::bounds::Bounds;
use kommute_transit::models::types::{Coordinate, Itinerary};

use crate::aggregate::{group_by_nearest_stop, TransitableStop};
use crate::api::{
    DirectionsOptions, DirectionsRequest, IsochroneRequest, TransitPropertiesRequest,
    WalkablePropertiesRequest,
};
use crate::cluster::{cluster_viewport, MapMarker};
use crate::property::ScoredProperty;
use crate::view::slices::{FetchSlice, RequestToken};

/// Walk budget used when framing a selected stop's reachable area.
pub const STOP_ISOCHRONE_WALK_DISTANCE: f64 = 500.0;

const CAMERA_BEARING: f64 = 40.0;
const CAMERA_PITCH: f64 = 40.0;

// ============================================================================
// Inputs
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Transit,
}

/// Search parameters beyond the origin itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConstraints {
    /// Metres
    pub walk_distance: f64,
    pub min_transfers: u32,
    pub max_transfers: u32,
}

impl Default for SearchConstraints {
    fn default() -> Self {
        Self {
            walk_distance: 2000.0,
            min_transfers: 2,
            max_transfers: 5,
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

/// One bounds-fit instruction for the map widget.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraFrame {
    pub bounds: Bounds,
    pub zoom: Option<f64>,
    pub bearing: f64,
    pub pitch: f64,
    pub padding: Option<f64>,
    /// Screen-space offset in pixels, for keeping UI chrome clear.
    pub offset: Option<[f64; 2]>,
}

impl CameraFrame {
    fn fit(bounds: Bounds, zoom: f64) -> Self {
        Self {
            bounds,
            zoom: Some(zoom),
            bearing: CAMERA_BEARING,
            pitch: CAMERA_PITCH,
            padding: None,
            offset: None,
        }
    }
}

/// Tokens for the fetches a search submission kicks off.
#[derive(Clone, Copy, Debug)]
pub struct SearchTokens {
    pub properties: RequestToken,
    pub isochrone: RequestToken,
}

// ============================================================================
// State
// ============================================================================

pub struct ViewState {
    origin: Option<Coordinate>,
    destination: Option<Coordinate>,
    mode: TravelMode,
    constraints: SearchConstraints,
    selected_property: Option<ScoredProperty>,
    selected_stop: Option<TransitableStop>,
    hovered_leg: Option<usize>,
    properties: FetchSlice<Vec<ScoredProperty>>,
    directions: FetchSlice<Vec<Itinerary>>,
    isochrone: FetchSlice<FeatureCollection>,
    stop_isochrone: FetchSlice<FeatureCollection>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            origin: None,
            destination: None,
            mode: TravelMode::Walking,
            constraints: SearchConstraints::default(),
            selected_property: None,
            selected_stop: None,
            hovered_leg: None,
            properties: FetchSlice::default(),
            directions: FetchSlice::default(),
            isochrone: FetchSlice::default(),
            stop_isochrone: FetchSlice::default(),
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start a new search from `origin`. Clears every selection, replaces
    /// the whole property set lifecycle, and invalidates any directions
    /// still in flight.
    pub fn submit_search(
        &mut self,
        origin: Coordinate,
        mode: TravelMode,
        constraints: SearchConstraints,
    ) -> (SearchTokens, Option<CameraFrame>) {
        self.origin = Some(origin);
        self.mode = mode;
        self.constraints = constraints;
        self.destination = None;
        self.selected_property = None;
        self.selected_stop = None;
        self.hovered_leg = None;
        self.directions.invalidate();
        self.stop_isochrone.invalidate();

        let tokens = SearchTokens {
            properties: self.properties.begin(),
            isochrone: self.isochrone.begin(),
        };
        (tokens, self.camera_frame())
    }

    /// Apply a nearest-properties outcome. A stale token is discarded and
    /// triggers no refit.
    pub fn resolve_properties(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<ScoredProperty>, String>,
    ) -> Option<CameraFrame> {
        if !self.properties.resolve(token, outcome) {
            return None;
        }
        self.camera_frame()
    }

    pub fn resolve_isochrone(&mut self, token: RequestToken, outcome: Result<FeatureCollection, String>) {
        self.isochrone.resolve(token, outcome);
    }

    /// Select a property as the commute destination. Mutually exclusive
    /// with a stop selection. Returns a directions token when the origin is
    /// known; without an origin the fetch is simply not issued.
    pub fn select_property(
        &mut self,
        scored: ScoredProperty,
    ) -> (Option<RequestToken>, Option<CameraFrame>) {
        self.destination = Some(scored.property.coordinates);
        self.selected_property = Some(scored);
        self.selected_stop = None;
        self.hovered_leg = None;

        let token = self.origin.is_some().then(|| self.directions.begin());
        (token, self.camera_frame())
    }

    /// Apply a directions outcome. A failure leaves the property list
    /// untouched; it only marks the directions slice.
    pub fn resolve_directions(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Itinerary>, String>,
    ) -> Option<CameraFrame> {
        if !self.directions.resolve(token, outcome) {
            return None;
        }
        self.camera_frame()
    }

    /// Select a stop cluster. Mutually exclusive with a property selection.
    /// Kicks off the stop's own reachability isochrone.
    pub fn select_stop(
        &mut self,
        transitable: TransitableStop,
    ) -> (RequestToken, Option<CameraFrame>) {
        self.selected_property = None;
        self.selected_stop = Some(transitable);
        self.hovered_leg = None;

        let token = self.stop_isochrone.begin();
        (token, self.camera_frame())
    }

    pub fn resolve_stop_isochrone(
        &mut self,
        token: RequestToken,
        outcome: Result<FeatureCollection, String>,
    ) {
        self.stop_isochrone.resolve(token, outcome);
    }

    pub fn clear_selection(&mut self) -> Option<CameraFrame> {
        self.selected_property = None;
        self.selected_stop = None;
        self.destination = None;
        self.hovered_leg = None;
        self.directions.invalidate();
        self.stop_isochrone.invalidate();
        self.camera_frame()
    }

    /// Switch travel mode. Any nearest-properties result still in flight for
    /// the previous mode must not apply once it resolves.
    pub fn set_mode(&mut self, mode: TravelMode) {
        if self.mode != mode {
            self.mode = mode;
            self.properties.invalidate();
        }
    }

    /// Hover a timeline leg by index. Affects styling only, never framing.
    pub fn set_hovered_leg(&mut self, leg: Option<usize>) {
        self.hovered_leg = leg;
    }

    /// Zoom the camera onto one leg of the current route.
    pub fn select_leg(&mut self, index: usize) -> Option<CameraFrame> {
        let geometry = self.route_geometry()?;
        let leg = geometry.legs.get(index)?;
        let bounds = Bounds::from_coords(leg.path.coords().copied())?;
        Some(CameraFrame::fit(bounds, 15.0))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn selected_property(&self) -> Option<&ScoredProperty> {
        self.selected_property.as_ref()
    }

    pub fn selected_stop(&self) -> Option<&TransitableStop> {
        self.selected_stop.as_ref()
    }

    pub fn properties(&self) -> &[ScoredProperty] {
        self.properties.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn properties_slice(&self) -> &FetchSlice<Vec<ScoredProperty>> {
        &self.properties
    }

    pub fn directions_slice(&self) -> &FetchSlice<Vec<Itinerary>> {
        &self.directions
    }

    pub fn isochrone_slice(&self) -> &FetchSlice<FeatureCollection> {
        &self.isochrone
    }

    pub fn stop_isochrone_slice(&self) -> &FetchSlice<FeatureCollection> {
        &self.stop_isochrone
    }

    // ------------------------------------------------------------------
    // Request builders
    // ------------------------------------------------------------------

    /// Transit nearest-properties request for the current state, when the
    /// inputs for one are ready.
    pub fn transit_properties_request(&self) -> Option<TransitPropertiesRequest> {
        if self.mode != TravelMode::Transit {
            return None;
        }
        let origin = self.origin?;
        Some(TransitPropertiesRequest {
            latitude: origin.latitude,
            longitude: origin.longitude,
            walk_distance: self.constraints.walk_distance,
            min_transfer: self.constraints.min_transfers,
            max_transfer: self.constraints.max_transfers,
        })
    }

    pub fn walkable_properties_request(&self) -> Option<WalkablePropertiesRequest> {
        if self.mode != TravelMode::Walking {
            return None;
        }
        let origin = self.origin?;
        Some(WalkablePropertiesRequest {
            latitude: origin.latitude,
            longitude: origin.longitude,
            walk_distance: self.constraints.walk_distance,
        })
    }

    pub fn directions_request(&self) -> Option<DirectionsRequest> {
        Some(DirectionsRequest {
            origin: self.origin?,
            destination: self.destination?,
            options: DirectionsOptions::default(),
        })
    }

    /// Reachability contour around the search origin, at the search's own
    /// walk budget.
    pub fn isochrone_request(&self) -> Option<IsochroneRequest> {
        Some(IsochroneRequest {
            origin: self.origin?,
            walk_distance: self.constraints.walk_distance,
        })
    }

    /// Reachability contour around the selected stop, at the fixed stop walk
    /// budget rather than the search one.
    pub fn stop_isochrone_request(&self) -> Option<IsochroneRequest> {
        let selected = self.selected_stop.as_ref()?;
        Some(IsochroneRequest {
            origin: selected.stop.coordinates,
            walk_distance: STOP_ISOCHRONE_WALK_DISTANCE,
        })
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Stop groups for the current property set. Empty outside transit mode,
    /// where there is no stop concept.
    pub fn transitable_stops(&self) -> Vec<TransitableStop> {
        if self.mode != TravelMode::Transit {
            return Vec::new();
        }
        group_by_nearest_stop(self.properties())
    }

    /// Markers for one viewport. Recomputed from scratch; absent or failed
    /// property data behaves as an empty input.
    pub fn markers(&self, viewport: Bounds, zoom: f64) -> Vec<MapMarker> {
        cluster_viewport(self.properties(), viewport, zoom)
    }

    /// Normalized geometry of the current route, when origin, destination
    /// and a decodable itinerary are all present.
    pub fn route_geometry(&self) -> Option<RouteGeometry> {
        let origin = self.origin?;
        let destination = self.destination?;
        let itineraries = self.directions.data()?;
        let geometry = normalize_directions(itineraries, origin, destination, self.hovered_leg);
        if geometry.is_none() && !itineraries.is_empty() {
            warn!("itinerary geometry missing or undecodable; framing on anchors");
        }
        geometry
    }

    /// The camera frame for the current state.
    ///
    /// Priority: selected stop, then selected property with loaded
    /// directions, then selected property alone, then origin + property
    /// list, then origin alone.
    pub fn camera_frame(&self) -> Option<CameraFrame> {
        if let Some(selected) = &self.selected_stop {
            let mut bounds = Bounds::from_coordinate(selected.stop.coordinates);
            for scored in &selected.properties_near_stop {
                bounds.extend(scored.property.coordinates);
            }
            let mut frame = CameraFrame::fit(bounds, 16.0);
            frame.padding = Some(50.0);
            return Some(frame);
        }

        if let Some(selected) = &self.selected_property {
            if let Some(geometry) = self.route_geometry() {
                return Some(CameraFrame::fit(geometry.bounds, 15.0));
            }
            // Directions absent, empty or degraded: frame on the anchors.
            let mut bounds = Bounds::from_coordinate(selected.property.coordinates);
            if let Some(origin) = self.origin {
                bounds.extend(origin);
            }
            return Some(CameraFrame::fit(bounds, 15.0));
        }

        if self.origin.is_some() {
            if let Some(bounds) =
                Bounds::from_coordinates(self.properties().iter().map(|s| s.property.coordinates))
            {
                return Some(CameraFrame::fit(bounds, 14.0));
            }
        }

        self.origin.map(|origin| {
            let mut frame = CameraFrame::fit(Bounds::from_coordinate(origin), 15.0);
            frame.offset = Some([0.0, -200.0]);
            frame
        })
    }
}

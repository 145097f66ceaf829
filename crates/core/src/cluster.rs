//! Viewport clustering of property markers.
//!
//! Greedy pixel-radius clustering over an R-tree built in normalized
//! web-mercator space, recomputed from scratch whenever the property set,
//! viewport bounds or zoom changes. Iteration follows input order, so the
//! partition is deterministic for a fixed input.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use kommute_transit::geometry::bounds::Bounds;
use kommute_transit::geometry::mercator;
use kommute_transit::identifiers::PropertyIdentifier;
use kommute_transit::models::types::Coordinate;

use crate::property::ScoredProperty;

/// Cluster radius in screen pixels.
pub const CLUSTER_RADIUS_PX: f64 = 50.0;

/// Strictly above this zoom every point renders individually.
pub const MAX_CLUSTER_ZOOM: f64 = 15.0;

// ============================================================================
// Output markers
// ============================================================================

/// An aggregate marker covering two or more nearby properties.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCluster {
    pub centroid: Coordinate,
    pub count: usize,
    /// Member property ids in input order; no duplicates.
    pub member_ids: Vec<PropertyIdentifier>,
}

/// Size band of a cluster bubble, keyed by contained-point count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterSize {
    Small,
    Medium,
    Large,
}

const SIZE_RULES: [(fn(usize) -> bool, ClusterSize); 3] = [
    (|n| n <= 5, ClusterSize::Small),
    (|n| n >= 5, ClusterSize::Medium),
    (|n| n >= 10, ClusterSize::Large),
];

impl PointCluster {
    /// Ordered threshold rules in stylesheet fashion; the last match wins,
    /// so a count of exactly 5 lands in the medium band.
    pub fn size_band(&self) -> ClusterSize {
        let mut band = ClusterSize::Small;
        for (applies, candidate) in SIZE_RULES {
            if applies(self.count) {
                band = candidate;
            }
        }
        band
    }
}

/// One renderable marker: either a cluster bubble or a single property.
#[derive(Clone, Debug, PartialEq)]
pub enum MapMarker {
    Cluster(PointCluster),
    Single(ScoredProperty),
}

impl MapMarker {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            MapMarker::Cluster(c) => c.centroid,
            MapMarker::Single(s) => s.property.coordinates,
        }
    }
}

// ============================================================================
// Spatial node
// ============================================================================

#[derive(Clone)]
struct ProjectedNode {
    index: usize,
    xy: [f64; 2],
}

impl RTreeObject for ProjectedNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.xy)
    }
}

impl PointDistance for ProjectedNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.xy[0] - point[0];
        let dy = self.xy[1] - point[1];
        dx * dx + dy * dy
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Cluster the property set for one viewport.
///
/// Points within [`CLUSTER_RADIUS_PX`] of an unclaimed point (in screen
/// space at `zoom`) merge into one bubble whose centroid is the mean of its
/// member coordinates. Markers outside `viewport` are dropped after
/// clustering, so membership does not depend on the visible window.
pub fn cluster_viewport(
    properties: &[ScoredProperty],
    viewport: Bounds,
    zoom: f64,
) -> Vec<MapMarker> {
    debug!(count = properties.len(), zoom, "recomputing viewport clusters");

    let mut markers: Vec<MapMarker> = Vec::new();

    if zoom > MAX_CLUSTER_ZOOM {
        markers.extend(properties.iter().cloned().map(MapMarker::Single));
    } else {
        let nodes: Vec<ProjectedNode> = properties
            .iter()
            .enumerate()
            .map(|(index, scored)| ProjectedNode {
                index,
                xy: mercator::project(scored.property.coordinates),
            })
            .collect();
        let tree = RTree::bulk_load(nodes.clone());

        let radius = CLUSTER_RADIUS_PX / mercator::world_size(zoom);
        let radius_sq = radius * radius;

        let mut claimed = vec![false; properties.len()];
        for node in &nodes {
            if claimed[node.index] {
                continue;
            }
            claimed[node.index] = true;

            let mut members = vec![node.index];
            members.extend(
                tree.locate_within_distance(node.xy, radius_sq)
                    .map(|n| n.index)
                    .filter(|&j| !claimed[j]),
            );

            if members.len() == 1 {
                markers.push(MapMarker::Single(properties[node.index].clone()));
                continue;
            }

            members.sort_unstable();
            let mut lat = 0.0;
            let mut lon = 0.0;
            for &i in &members {
                claimed[i] = true;
                let c = properties[i].property.coordinates;
                lat += c.latitude;
                lon += c.longitude;
            }
            let n = members.len() as f64;
            markers.push(MapMarker::Cluster(PointCluster {
                centroid: Coordinate::new(lat / n, lon / n),
                count: members.len(),
                member_ids: members
                    .iter()
                    .map(|&i| properties[i].property.id.clone())
                    .collect(),
            }));
        }
    }

    markers.retain(|marker| viewport.contains(marker.coordinate()));
    markers
}

// ============================================================================
// GeoJSON export
// ============================================================================

/// Property point features for the map's cluster source, each carrying the
/// attributes the marker layer styles by.
pub fn property_features(properties: &[ScoredProperty]) -> FeatureCollection {
    let features = properties
        .iter()
        .map(|scored| {
            let c = scored.property.coordinates;
            let mut attributes = JsonObject::new();
            attributes.insert(
                "property".to_string(),
                serde_json::to_value(&scored.property).unwrap_or_default(),
            );
            attributes.insert(
                "nearestStop".to_string(),
                serde_json::to_value(&scored.nearest_stop).unwrap_or_default(),
            );
            attributes.insert("score".to_string(), scored.score.into());
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![c.longitude, c.latitude]))),
                id: None,
                properties: Some(attributes),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

//! # kommute-transit
//!
//! Transit itinerary models and pure geometry for the kommute client core.
//!
//! ## Features
//!
//! - **Itinerary models**: multi-leg journeys as returned by the directions
//!   service, with per-leg mode, route and encoded geometry
//! - **Polyline codec**: standalone decode/encode of Google-encoded polylines
//!   at 1e5 precision
//! - **Bounding boxes**: minimal boxes over coordinate sets, used for camera
//!   framing
//! - **Directions normalization**: stitch decoded leg geometry into renderable
//!   line layers with per-leg styling
//!
//! ## Example
//!
//! ```
//! use kommute_transit::prelude::*;
//!
//! let klcc = Coordinate::new(3.1579, 101.7116);
//! let pasar_seni = Coordinate::new(3.1425, 101.6953);
//!
//! let mut bounds = Bounds::from_coordinate(klcc);
//! bounds.extend(pasar_seni);
//! assert!(bounds.contains(Coordinate::new(3.15, 101.70)));
//! ```

pub mod directions;
pub mod geometry;
pub mod identifiers;
pub mod models;
pub mod units;

// Re-exports for convenience
pub mod prelude {
    pub use crate::directions::{normalize_directions, LegLine, RouteGeometry};
    pub use crate::geometry::bounds::Bounds;
    pub use crate::identifiers::*;
    pub use crate::models::types::*;
}

pub use prelude::*;

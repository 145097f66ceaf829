//! # kommute-core
//!
//! Client-side core for the kommute rental commute finder: property scoring
//! and aggregation, viewport clustering, service contracts, and the view
//! state machine driving camera framing.
//!
//! The map widget, forms and HTTP transport are external collaborators; this
//! crate owns the logic between them — normalization, scoring-driven
//! clustering and styling, bounds computation, and itinerary geometry
//! assembly (the latter via [`kommute_transit`]).
//!
//! ## Example
//!
//! ```
//! use kommute_core::prelude::*;
//!
//! let mut view = ViewState::new();
//! let origin = Coordinate::new(3.1598, 101.7134);
//! let (tokens, frame) = view.submit_search(
//!     origin,
//!     TravelMode::Transit,
//!     SearchConstraints::default(),
//! );
//! assert!(frame.is_some());
//!
//! // A stale resolution is discarded, the latest one applies.
//! let refit = view.resolve_properties(tokens.properties, Ok(vec![]));
//! assert!(refit.is_some());
//! ```

pub mod aggregate;
pub mod api;
pub mod cluster;
pub mod property;
pub mod score;
pub mod style;
pub mod view;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports for convenience
pub mod prelude {
    pub use crate::aggregate::{group_by_nearest_stop, TransitableStop};
    pub use crate::api::client::{ApiConfig, ApiError, CommuteApi, HttpApi};
    pub use crate::cluster::{cluster_viewport, ClusterSize, MapMarker, PointCluster};
    pub use crate::property::{Property, RentalRange, ScoredProperty};
    pub use crate::score::{classify_score, ScoreTier};
    pub use crate::view::{CameraFrame, SearchConstraints, TravelMode, ViewState};
    pub use kommute_transit::prelude::*;
}

pub use prelude::*;

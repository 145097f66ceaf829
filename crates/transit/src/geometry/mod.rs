//! Pure geometry: bounding boxes, web-mercator projection, polyline codec.

pub mod bounds;
pub mod mercator;
pub mod polyline;

pub use bounds::Bounds;

//! Normalized Web-Mercator projection.
//!
//! Projects geographic coordinates into the unit square, with y=0 at the
//! north edge. Pixel distances at a given zoom are `world_size(zoom)` times
//! the normalized distance.

use std::f64::consts::PI;

use crate::models::types::Coordinate;

/// Tile extent in pixels at zoom 0.
pub const TILE_EXTENT: f64 = 512.0;

/// Project to normalized `[x, y]` in `[0, 1]`.
pub fn project(c: Coordinate) -> [f64; 2] {
    let x = c.longitude / 360.0 + 0.5;
    let sin = c.latitude.to_radians().sin();
    let y = 0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI;
    [x, y.clamp(0.0, 1.0)]
}

/// Inverse of [`project`].
pub fn unproject([x, y]: [f64; 2]) -> Coordinate {
    let longitude = (x - 0.5) * 360.0;
    let latitude = ((PI - 2.0 * PI * y).sinh().atan()).to_degrees();
    Coordinate::new(latitude, longitude)
}

/// World size in pixels at a (possibly fractional) zoom level.
pub fn world_size(zoom: f64) -> f64 {
    TILE_EXTENT * zoom.exp2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn null_island_maps_to_center() {
        let [x, y] = project(Coordinate::new(0.0, 0.0));
        assert_relative_eq!(x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn project_round_trips() {
        let c = Coordinate::new(3.1598, 101.7134);
        let back = unproject(project(c));
        assert_relative_eq!(back.latitude, c.latitude, epsilon = 1e-9);
        assert_relative_eq!(back.longitude, c.longitude, epsilon = 1e-9);
    }

    #[test]
    fn world_size_doubles_per_zoom() {
        assert_relative_eq!(world_size(0.0), 512.0);
        assert_relative_eq!(world_size(1.0), 1024.0);
        assert_relative_eq!(world_size(15.0), 512.0 * 32768.0);
    }
}

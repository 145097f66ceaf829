//! Minimal bounding boxes over coordinate sets.
//!
//! Stored as `[west, south, east, north]` degrees, matching the array form
//! map widgets expect for camera fitting.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::models::types::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    /// Degenerate box around a single coordinate.
    pub fn from_coordinate(c: Coordinate) -> Self {
        Self {
            west: c.longitude,
            south: c.latitude,
            east: c.longitude,
            north: c.latitude,
        }
    }

    /// Minimal box enclosing every coordinate. `None` for an empty input.
    pub fn from_coordinates<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let mut bounds = Self::from_coordinate(iter.next()?);
        for c in iter {
            bounds.extend(c);
        }
        Some(bounds)
    }

    /// Minimal box enclosing a `(lon, lat)` coordinate sequence.
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        Self::from_coordinates(coords.into_iter().map(Coordinate::from))
    }

    pub fn from_array([west, south, east, north]: [f64; 4]) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Grow the box to include `c`.
    pub fn extend(&mut self, c: Coordinate) {
        self.west = self.west.min(c.longitude);
        self.east = self.east.max(c.longitude);
        self.south = self.south.min(c.latitude);
        self.north = self.north.max(c.latitude);
    }

    pub fn union(mut self, other: Self) -> Self {
        self.west = self.west.min(other.west);
        self.east = self.east.max(other.east);
        self.south = self.south.min(other.south);
        self.north = self.north.max(other.north);
        self
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Point-in-box test. A box with `west > east` is treated as crossing
    /// the antimeridian.
    pub fn contains(&self, c: Coordinate) -> bool {
        let lat_ok = c.latitude >= self.south && c.latitude <= self.north;
        let lng_ok = if self.west <= self.east {
            c.longitude >= self.west && c.longitude <= self.east
        } else {
            c.longitude >= self.west || c.longitude <= self.east
        };
        lat_ok && lng_ok
    }
}

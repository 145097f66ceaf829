//! Standalone wrappers over the Google polyline codec.
//!
//! Isolated here so geometry decoding stays independent of any rendering
//! concern and can be unit-tested on its own.

use geo::{Coord, LineString};

use crate::models::types::Result;

/// Precision factor exponent: coordinates are scaled by 1e5.
pub const PRECISION: u32 = 5;

/// Decode an encoded polyline into a `(lon, lat)` coordinate sequence.
pub fn decode(encoded: &str) -> Result<LineString<f64>> {
    Ok(::polyline::decode_polyline(encoded, PRECISION)?)
}

/// Encode a coordinate sequence back into a polyline string.
pub fn encode<C>(coordinates: C) -> Result<String>
where
    C: IntoIterator<Item = Coord<f64>>,
{
    Ok(::polyline::encode_coordinates(coordinates, PRECISION)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_path_round_trips() {
        let encoded = encode(std::iter::empty()).unwrap();
        assert_eq!(encoded, "");

        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.0.len(), 0);

        let re_encoded = encode(decoded).unwrap();
        assert_eq!(re_encoded, "");
    }

    #[test]
    fn three_point_path_round_trips_byte_for_byte() {
        // (lat, lon) pairs around KLCC
        let path = vec![
            Coord {
                x: 101.7134,
                y: 3.1598,
            },
            Coord {
                x: 101.7140,
                y: 3.1601,
            },
            Coord {
                x: 101.7150,
                y: 3.1610,
            },
        ];

        let encoded = encode(path.clone()).unwrap();
        let decoded = decode(&encoded).unwrap();

        for (original, got) in path.iter().zip(decoded.coords()) {
            assert_relative_eq!(original.x, got.x, epsilon = 1e-5);
            assert_relative_eq!(original.y, got.y, epsilon = 1e-5);
        }

        let re_encoded = encode(decoded).unwrap();
        assert_eq!(encoded, re_encoded);
    }

    #[test]
    fn decode_matches_known_vector() {
        // Reference vector from the polyline algorithm description
        let decoded = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
        let coords: Vec<_> = decoded.coords().copied().collect();
        assert_eq!(coords.len(), 3);
        assert_relative_eq!(coords[0].y, 38.5, epsilon = 1e-5);
        assert_relative_eq!(coords[0].x, -120.2, epsilon = 1e-5);
        assert_relative_eq!(coords[2].y, 43.252, epsilon = 1e-5);
        assert_relative_eq!(coords[2].x, -126.453, epsilon = 1e-5);
    }
}

//! Marker and overlay colors.
//!
//! Line colors follow the Klang Valley rail operators' published palette,
//! looked up by the prefix of a stop's raw identifier.

use crate::cluster::ClusterSize;
use crate::score::ScoreTier;

/// Fill color of an unclustered property marker.
pub fn tier_color(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Easy => "#84cc16",
        ScoreTier::Normal => "#fb923c",
        ScoreTier::Hard => "#ef4444",
    }
}

/// Fill color of a cluster bubble.
pub fn cluster_color(band: ClusterSize) -> &'static str {
    match band {
        ClusterSize::Small => "#38bdf8",
        ClusterSize::Medium => "#fb923c",
        ClusterSize::Large => "#f87171",
    }
}

/// Rail line color for a raw stop identifier, used to paint the selected
/// stop's isochrone. Falls back to a neutral red for unknown prefixes.
pub fn route_color_for_stop(stop_id: &str) -> &'static str {
    const PREFIXES: [(&str, &str); 8] = [
        ("AG", "#e57200"),
        ("PY", "#FFCD00"),
        ("KJ", "#76232f"),
        ("PH", "#76232f"),
        ("KG", "#047940"),
        ("MR", "#84bd00"),
        ("BRT", "#84bd00"),
        ("SP", "#7e1b14"),
    ];

    for (prefix, color) in PREFIXES {
        if stop_id.starts_with(prefix) {
            return color;
        }
    }
    "#fca5a5"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_line_prefixes() {
        assert_eq!(route_color_for_stop("KJ10"), "#76232f");
        assert_eq!(route_color_for_stop("AG3"), "#e57200");
        assert_eq!(route_color_for_stop("BRT2"), "#84bd00");
        assert_eq!(route_color_for_stop("SP14"), "#7e1b14");
    }

    #[test]
    fn unknown_prefix_falls_back() {
        assert_eq!(route_color_for_stop("XX1"), "#fca5a5");
        assert_eq!(route_color_for_stop(""), "#fca5a5");
    }

    #[test]
    fn tier_palette_is_distinct() {
        let colors = [
            tier_color(ScoreTier::Easy),
            tier_color(ScoreTier::Normal),
            tier_color(ScoreTier::Hard),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}

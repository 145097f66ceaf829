//! Grouping of scored properties by their nearest transit stop.
//!
//! A pure function of its input: no drops, no duplicates, deterministic
//! first-appearance ordering. The view layer only invokes it in transit mode;
//! walking-mode results have no stop concept.

use std::collections::HashMap;

use kommute_transit::models::types::Stop;

use crate::property::ScoredProperty;

/// A logical stop together with every candidate property that reported it as
/// nearest, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitableStop {
    pub stop: Stop,
    pub properties_near_stop: Vec<ScoredProperty>,
}

/// Group properties by `nearest_stop.name`.
///
/// The first property to mention a stop name seeds the canonical `Stop` for
/// that group; later items with the same name join the group even when their
/// `Stop` values are distinct instances. Items without a nearest stop are
/// skipped.
pub fn group_by_nearest_stop(properties: &[ScoredProperty]) -> Vec<TransitableStop> {
    let mut groups: Vec<TransitableStop> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for scored in properties {
        let Some(stop) = &scored.nearest_stop else {
            continue;
        };
        match index_by_name.get(stop.name.as_str()) {
            Some(&i) => groups[i].properties_near_stop.push(scored.clone()),
            None => {
                index_by_name.insert(stop.name.clone(), groups.len());
                groups.push(TransitableStop {
                    stop: stop.clone(),
                    properties_near_stop: vec![scored.clone()],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{scored, stop};

    #[test]
    fn klcc_and_pasar_seni_scenario() {
        let klcc = stop("KLCC", "KJ10", 3.1579, 101.7133);
        let pasar_seni = stop("Pasar Seni", "KJ14", 3.1425, 101.6953);
        let input = vec![
            scored("p1", 1200.0, Some(klcc.clone())),
            scored("p2", 900.0, Some(pasar_seni)),
            scored("p3", 1500.0, Some(klcc)),
        ];

        let groups = group_by_nearest_stop(&input);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].stop.name, "KLCC");
        assert_eq!(groups[0].properties_near_stop.len(), 2);
        assert_eq!(groups[1].stop.name, "Pasar Seni");
        assert_eq!(groups[1].properties_near_stop.len(), 1);
    }

    #[test]
    fn union_of_groups_equals_input() {
        let names = ["KLCC", "Ampang Park", "KLCC", "Dang Wangi", "Ampang Park"];
        let input: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                scored(
                    &format!("p{i}"),
                    1000.0,
                    Some(stop(name, &format!("KJ{i}"), 3.15, 101.71)),
                )
            })
            .collect();

        let groups = group_by_nearest_stop(&input);
        let flattened: Vec<_> = groups
            .iter()
            .flat_map(|g| g.properties_near_stop.iter())
            .collect();
        assert_eq!(flattened.len(), input.len());
        // No duplicates: every input id appears exactly once
        for scored in &input {
            let hits = flattened
                .iter()
                .filter(|s| s.property.id == scored.property.id)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn same_name_distinct_instances_share_a_group() {
        // Two platforms of the same station, distinct Stop values
        let a = stop("Masjid Jamek", "KJ13", 3.1490, 101.6965);
        let b = stop("Masjid Jamek", "SP8", 3.1492, 101.6967);
        assert_ne!(a, b);

        let groups =
            group_by_nearest_stop(&[scored("p1", 500.0, Some(a)), scored("p2", 700.0, Some(b))]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].properties_near_stop.len(), 2);
        // First mention seeds the canonical stop
        assert_eq!(groups[0].stop.primary_id().unwrap().as_str(), "KJ13");
    }

    #[test]
    fn items_without_a_stop_are_skipped() {
        let groups = group_by_nearest_stop(&[scored("p1", 100.0, None)]);
        assert!(groups.is_empty());
    }

    #[test]
    fn preserves_arrival_order_within_groups() {
        let klcc = stop("KLCC", "KJ10", 3.1579, 101.7133);
        let input = vec![
            scored("first", 1.0, Some(klcc.clone())),
            scored("second", 2.0, Some(klcc.clone())),
            scored("third", 3.0, Some(klcc)),
        ];
        let groups = group_by_nearest_stop(&input);
        let ids: Vec<_> = groups[0]
            .properties_near_stop
            .iter()
            .map(|s| s.property.id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }
}

//! Distance ranking.
//!
//! Items whose venue resolves to a point come first, nearest first;
//! everything the lookup cannot place follows, ordered by item name.
//! Recomputed from scratch on every query; there is no cached state.

use serde::Serialize;

use crate::alias::AliasTable;
use crate::distance::haversine_km;
use crate::item::MenuItem;
use crate::locations::{LatLng, LocationIndex};

/// A menu item plus the coordinates and distance derived for one query.
#[derive(Debug, Clone, Serialize)]
pub struct RankedItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub location: Option<LatLng>,
    pub distance_km: Option<f64>,
}

/// Point for an item's venue, if any.
///
/// When the restaurant name resolves, candidates are the canonical name
/// followed by its aliases in table order; canonical names carry the
/// curated coordinates, aliases are the fallback. An unresolved name is
/// still tried against the index directly.
pub fn locate(item: &MenuItem, aliases: &AliasTable, locations: &LocationIndex) -> Option<LatLng> {
    if let Some(entry) = aliases.entry(&item.restaurant) {
        std::iter::once(entry.canonical.as_str())
            .chain(entry.aliases.iter().map(String::as_str))
            .find_map(|candidate| locations.get(candidate))
    } else if !item.restaurant.is_empty() {
        locations.get(&item.restaurant)
    } else {
        None
    }
}

/// Orders items for display around an origin point.
///
/// Both sorts are stable, so items at the same venue keep their incoming
/// relative order. Distances are kilometers, unrounded.
pub fn rank(
    items: Vec<MenuItem>,
    origin: LatLng,
    aliases: &AliasTable,
    locations: &LocationIndex,
) -> Vec<RankedItem> {
    let mut located: Vec<(f64, RankedItem)> = Vec::new();
    let mut unlocated: Vec<RankedItem> = Vec::new();

    for item in items {
        match locate(&item, aliases, locations) {
            Some(point) => {
                let distance = haversine_km(origin, point);
                located.push((
                    distance,
                    RankedItem {
                        item,
                        location: Some(point),
                        distance_km: Some(distance),
                    },
                ));
            }
            None => unlocated.push(RankedItem {
                item,
                location: None,
                distance_km: None,
            }),
        }
    }

    located.sort_by(|a, b| a.0.total_cmp(&b.0));
    unlocated.sort_by_cached_key(|ranked| ranked.item.name.to_lowercase());

    located
        .into_iter()
        .map(|(_, ranked)| ranked)
        .chain(unlocated)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{locate, rank};
    use crate::alias::{AliasEntry, AliasTable};
    use crate::item::MenuItem;
    use crate::locations::{LatLng, LocationIndex, LocationRecord};

    const ORIGIN: LatLng = LatLng {
        lat: 28.37062494668054,
        lng: -81.51939009164909,
    };

    fn table() -> AliasTable {
        AliasTable::build(vec![AliasEntry {
            canonical: "Flame Tree BBQ".to_string(),
            aliases: vec!["Flame Tree BBQ - Lunch/Dinner".to_string()],
        }])
    }

    fn index() -> LocationIndex {
        LocationIndex::build(&[
            LocationRecord {
                name: "flame tree bbq".to_string(),
                lat: 28.3583,
                lng: -81.5908,
            },
            LocationRecord {
                name: "Aloha Isle".to_string(),
                lat: 28.4206,
                lng: -81.5830,
            },
        ])
    }

    fn item(name: &str, restaurant: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            restaurant: restaurant.to_string(),
            ..MenuItem::default()
        }
    }

    #[test]
    fn test_locate_through_alias() {
        let found = locate(
            &item("Ribs", "Flame Tree BBQ - Lunch/Dinner"),
            &table(),
            &index(),
        )
        .unwrap();

        assert_eq!(found.lat, 28.3583);
        assert_eq!(found.lng, -81.5908);
    }

    #[test]
    fn test_locate_raw_name_fallback() {
        // Not in the alias table, but geocoded under its raw name.
        let found = locate(&item("DOLE Whip", "Aloha Isle"), &table(), &index()).unwrap();
        assert_eq!(found.lat, 28.4206);
    }

    #[test]
    fn test_locate_misses() {
        assert!(locate(&item("Mystery", "Unknown Snack Shack"), &table(), &index()).is_none());
        assert!(locate(&item("Orphan", ""), &table(), &index()).is_none());
    }

    #[test]
    fn test_rank_is_a_permutation() {
        let items = vec![
            item("Ribs", "Flame Tree BBQ"),
            item("Mystery", "Unknown Snack Shack"),
            item("DOLE Whip", "Aloha Isle"),
        ];
        let ranked = rank(items.clone(), ORIGIN, &table(), &index());

        assert_eq!(ranked.len(), items.len());
        for original in &items {
            assert!(ranked.iter().any(|r| r.item == *original));
        }
    }

    #[test]
    fn test_located_first_sorted_by_distance() {
        let ranked = rank(
            vec![
                item("Ribs", "Flame Tree BBQ"),
                item("Mystery", "Unknown Snack Shack"),
                item("DOLE Whip", "Aloha Isle"),
            ],
            ORIGIN,
            &table(),
            &index(),
        );

        // Aloha Isle (~8.1 km) is farther from the origin than Flame Tree
        // (~7.1 km); the unresolved item comes last with no distance.
        assert_eq!(ranked[0].item.restaurant, "Flame Tree BBQ");
        assert_eq!(ranked[1].item.restaurant, "Aloha Isle");
        assert_eq!(ranked[2].item.restaurant, "Unknown Snack Shack");
        assert!(ranked[0].distance_km.unwrap() <= ranked[1].distance_km.unwrap());
        assert!(ranked[2].distance_km.is_none());
    }

    #[test]
    fn test_equal_distance_is_stable() {
        let ranked = rank(
            vec![
                item("Ribs", "Flame Tree BBQ"),
                item("Brisket", "Flame Tree BBQ - Lunch/Dinner"),
            ],
            ORIGIN,
            &table(),
            &index(),
        );

        assert_eq!(ranked[0].item.name, "Ribs");
        assert_eq!(ranked[1].item.name, "Brisket");
        assert_eq!(ranked[0].distance_km, ranked[1].distance_km);
    }

    #[test]
    fn test_unlocated_alphabetical_empty_first() {
        let ranked = rank(
            vec![
                item("zebra Cake", "Nowhere A"),
                item("", "Nowhere B"),
                item("Apple Pie", "Nowhere C"),
            ],
            ORIGIN,
            &table(),
            &index(),
        );

        assert_eq!(ranked[0].item.name, "");
        assert_eq!(ranked[1].item.name, "Apple Pie");
        assert_eq!(ranked[2].item.name, "zebra Cake");
    }

    #[test]
    fn test_origin_on_venue_is_zero() {
        let on_venue = LatLng {
            lat: 28.3583,
            lng: -81.5908,
        };
        let ranked = rank(
            vec![item("Ribs", "Flame Tree BBQ")],
            on_venue,
            &table(),
            &index(),
        );

        assert_eq!(ranked[0].distance_km, Some(0.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new(), ORIGIN, &table(), &index()).is_empty());
    }
}

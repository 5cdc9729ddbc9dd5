//! Geocoded venues.
//!
//! The location snapshot is a flat list of `{name, lat, lng}` records.
//! Keys are produced by [`normalize`], the same function applied to every
//! lookup, so a hit only depends on what the names reduce to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One record of the geocoded snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Default)]
pub struct LocationIndex {
    by_name: HashMap<String, LatLng>,
}

impl LocationIndex {
    /// Later records overwrite earlier ones when their names normalize to
    /// the same key. Duplicate or dubious coordinates are a data-quality
    /// concern of the snapshot, not of this index.
    pub fn build(records: &[LocationRecord]) -> Self {
        let mut by_name = HashMap::new();

        for record in records {
            by_name.insert(
                normalize(&record.name),
                LatLng {
                    lat: record.lat,
                    lng: record.lng,
                },
            );
        }

        Self { by_name }
    }

    /// Point for a raw venue name, if its normalized form is indexed.
    pub fn get(&self, name: &str) -> Option<LatLng> {
        self.by_name.get(&normalize(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{LocationIndex, LocationRecord};

    fn record(name: &str, lat: f64, lng: f64) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            lat,
            lng,
        }
    }

    #[test]
    fn test_lookup_ignores_punctuation() {
        let index = LocationIndex::build(&[record("Boardwalk Joe's", 28.3671, -81.5512)]);

        let point = index.get("boardwalk joes").unwrap();
        assert_eq!(point.lat, 28.3671);
        assert_eq!(point.lng, -81.5512);
    }

    #[test]
    fn test_last_write_wins() {
        let index = LocationIndex::build(&[
            record("Aloha Isle", 1.0, 1.0),
            record("aloha isle!", 2.0, 2.0),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("Aloha Isle").unwrap().lat, 2.0);
    }

    #[test]
    fn test_miss_is_none() {
        let index = LocationIndex::build(&[]);
        assert!(index.get("Unknown Snack Shack").is_none());
        assert!(index.is_empty());
    }
}

//! Canonical venue names and their known alternate spellings.
//!
//! The snapshot is a JSON object mapping a canonical name to the aliases
//! that show up for the same physical venue in the menu feed. Document
//! order is preserved; it is the tie-break order when dirty data gives
//! two entries the same normalized name.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::warn;

use crate::normalize::normalize;

#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub canonical: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    by_normalized: HashMap<String, usize>,
}

impl AliasTable {
    /// Builds the table and flattens every canonical name and alias into a
    /// normalized-name map, so resolution is a single lookup instead of a
    /// scan. A name already claimed by an earlier entry is logged and kept
    /// with that first entry; the table is expected to be alias-unique and
    /// a collision is a snapshot defect, caught here at load time.
    pub fn build(entries: Vec<AliasEntry>) -> Self {
        let mut by_normalized: HashMap<String, usize> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            for name in std::iter::once(&entry.canonical).chain(entry.aliases.iter()) {
                let key = normalize(name);

                if key.is_empty() {
                    continue;
                }

                match by_normalized.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                    Entry::Occupied(slot) => {
                        let holder = *slot.get();
                        if holder != index {
                            warn!(
                                "alias {:?} of {:?} already claimed by {:?}, keeping the first entry",
                                name, entry.canonical, entries[holder].canonical
                            );
                        }
                    }
                }
            }
        }

        Self {
            entries,
            by_normalized,
        }
    }

    /// Canonical name for a free-text restaurant name, if any entry's
    /// canonical name or alias normalizes to the same form.
    pub fn resolve(&self, restaurant: &str) -> Option<&str> {
        self.entry(restaurant)
            .map(|entry| entry.canonical.as_str())
    }

    /// Full entry behind [`resolve`](Self::resolve), for callers that also
    /// need the alias list.
    pub fn entry(&self, restaurant: &str) -> Option<&AliasEntry> {
        let key = normalize(restaurant);

        if key.is_empty() {
            return None;
        }

        self.by_normalized
            .get(&key)
            .map(|&index| &self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The snapshot is `{"Canonical Name": ["alias", ...], ...}`. A plain
// HashMap would lose document order, so deserialize through the map
// visitor and keep entries as a sequence.
impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = Vec<AliasEntry>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of canonical venue names to alias lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();

                while let Some((canonical, aliases)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    entries.push(AliasEntry { canonical, aliases });
                }

                Ok(entries)
            }
        }

        deserializer.deserialize_map(TableVisitor).map(AliasTable::build)
    }
}

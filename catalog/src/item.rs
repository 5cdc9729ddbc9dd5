//! Menu items and the catalog CSV.
//!
//! The feed has shipped under two header conventions over time, so parsing
//! binds one declarative [`FieldMap`] per known schema, selected once from
//! the header row. No per-row field-name guessing.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use csv::StringRecord;
use regex::Regex;
use serde::Serialize;

/// One sellable food or drink entry, as the rest of the pipeline sees it.
/// Never mutated after load; filtering and ranking build new views.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: String,
    /// Display name. May be empty when the source conflated a standalone
    /// stand's name into the restaurant field, see [`repair_conflated_name`].
    pub name: String,
    /// Serving-location name exactly as the feed spells it. Not guaranteed
    /// to match any canonical name.
    pub restaurant: String,
    pub category: String,
    pub dining_plan: String,
    pub area: String,
    pub park: String,
    pub description: String,
    pub price: String,
    /// Redeemable under the prepaid dining plan.
    pub ddp_eligible: bool,
}

/// Column names of one source schema.
pub struct FieldMap {
    pub id: &'static str,
    pub item: &'static str,
    pub restaurant: &'static str,
    pub category: &'static str,
    pub dining_plan: &'static str,
    pub area: &'static str,
    pub park: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub ddp_flag: &'static str,
}

/// The uppercase spreadsheet-export schema.
pub const EXPORT_FIELDS: FieldMap = FieldMap {
    id: "ID",
    item: "ITEM",
    restaurant: "RESTAURANT",
    category: "CATEGORY",
    dining_plan: "DINING PLAN",
    area: "LOCATION",
    park: "DISNEY PARK",
    description: "DESCRIPTION",
    price: "PRICE",
    ddp_flag: "IS_DDP_SNACK",
};

/// The lowercase compact schema.
pub const COMPACT_FIELDS: FieldMap = FieldMap {
    id: "id",
    item: "item",
    restaurant: "restaurant",
    category: "category",
    dining_plan: "diningPlan",
    area: "location",
    park: "park",
    description: "description",
    price: "price",
    ddp_flag: "isDDPSnack",
};

/// Parks the area column may stand in for when the park column is empty.
const PARK_NAMES: [&str; 6] = [
    "Magic Kingdom",
    "EPCOT",
    "Animal Kingdom",
    "Hollywood Studios",
    "Typhoon Lagoon",
    "Blizzard Beach",
];

// Observed venue words from feed rows that put a stand's name in the item
// column. Not assumed complete.
static VENUE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(?i)Aloha Isle|Snacks|Egg Roll Wagon|Canteen|Terrace|Trolley|Market|Refreshment|Stand\
         |Bakery|Cafe|Bar|Grill|Diner|Dock|Inn|Cantina|House|Lounge|Pub|Truck|Cart|Kiosk|Corner\
         |Plaza|Pavilion|Palace|Bites|Beverages|Cones|Treats|Sweets|Churros|Popcorn|Ice Cream\
         |Pizza|Sandwich|Saloon|Sundaes|Waffles|Wings|Wurst|Wok",
    )
    .unwrap()
});

/// Some feed rows carry a standalone stand's name in the item column and
/// leave the restaurant blank. When the item name looks like a venue, move
/// it into the restaurant field and clear the item name.
pub fn repair_conflated_name(name: &mut String, restaurant: &mut String) {
    if restaurant.is_empty() && !name.is_empty() && VENUE_KEYWORDS.is_match(name) {
        *restaurant = std::mem::take(name);
    }
}

struct Columns {
    id: Option<usize>,
    item: Option<usize>,
    restaurant: Option<usize>,
    category: Option<usize>,
    dining_plan: Option<usize>,
    area: Option<usize>,
    park: Option<usize>,
    description: Option<usize>,
    price: Option<usize>,
    ddp_flag: Option<usize>,
}

impl Columns {
    fn bind(headers: &StringRecord, fields: &FieldMap) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        Self {
            id: position(fields.id),
            item: position(fields.item),
            restaurant: position(fields.restaurant),
            category: position(fields.category),
            dining_plan: position(fields.dining_plan),
            area: position(fields.area),
            park: position(fields.park),
            description: position(fields.description),
            price: position(fields.price),
            ddp_flag: position(fields.ddp_flag),
        }
    }

    fn read(&self, record: &StringRecord, column: Option<usize>) -> String {
        column
            .and_then(|index| record.get(index))
            .unwrap_or("")
            .trim()
            .to_string()
    }

    fn item_from(&self, record: &StringRecord) -> MenuItem {
        let mut name = self.read(record, self.item);
        let mut restaurant = self.read(record, self.restaurant);
        repair_conflated_name(&mut name, &mut restaurant);

        let area = self.read(record, self.area);
        let mut park = self.read(record, self.park);
        if park.is_empty() && PARK_NAMES.contains(&area.as_str()) {
            park = area.clone();
        }

        MenuItem {
            id: self.read(record, self.id),
            name,
            restaurant,
            category: self.read(record, self.category),
            dining_plan: self.read(record, self.dining_plan),
            area,
            park,
            description: self.read(record, self.description),
            price: self.read(record, self.price),
            ddp_eligible: self.read(record, self.ddp_flag) == "true",
        }
    }
}

fn detect_fields(headers: &StringRecord) -> Option<&'static FieldMap> {
    [&EXPORT_FIELDS, &COMPACT_FIELDS]
        .into_iter()
        .find(|fields| {
            let has = |name: &str| headers.iter().any(|h| h.trim() == name);
            has(fields.item) && has(fields.restaurant)
        })
}

/// Parses a catalog CSV snapshot into menu items, keeping row order.
pub fn parse_catalog(csv_text: &str) -> Result<Vec<MenuItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let Some(fields) = detect_fields(&headers) else {
        bail!("unrecognized catalog header: {:?}", headers);
    };
    let columns = Columns::bind(&headers, fields);

    let mut items = Vec::new();
    for record in reader.records() {
        items.push(columns.item_from(&record?));
    }

    Ok(items)
}

/// Sorted distinct non-empty parks, for the filter dropdowns.
pub fn distinct_parks(items: &[MenuItem]) -> Vec<String> {
    distinct(items, |item| &item.park)
}

/// Sorted distinct non-empty categories.
pub fn distinct_categories(items: &[MenuItem]) -> Vec<String> {
    distinct(items, |item| &item.category)
}

/// Sorted distinct non-empty areas (lands).
pub fn distinct_areas(items: &[MenuItem]) -> Vec<String> {
    distinct(items, |item| &item.area)
}

fn distinct<F>(items: &[MenuItem], pick: F) -> Vec<String>
where
    F: Fn(&MenuItem) -> &String,
{
    let values: BTreeSet<&String> = items
        .iter()
        .map(pick)
        .filter(|value| !value.is_empty())
        .collect();

    values.into_iter().cloned().collect()
}

//! Snack catalog snapshots and the search core.
//!
//! Three immutable snapshots are loaded once per session: the menu-item
//! catalog (CSV), the restaurant alias table (JSON object), and the
//! geocoded location list (JSON array). Everything downstream of loading
//! is pure, synchronous computation over those snapshots:
//!
//! - [`normalize::normalize`] reduces venue names to one lookup form
//! - [`alias::AliasTable`] maps feed spellings to canonical venue names
//! - [`locations::LocationIndex`] maps normalized names to coordinates
//! - [`filter::filter`] applies the user's predicates, order-preserving
//! - [`rank::rank`] orders the result by distance from an origin point
//!
//! A query is `rank(filter(items, predicates), origin, aliases, index)`.
//! Reissuing a query recomputes from scratch; the core keeps no memory
//! of prior calls.

use std::fs;

use anyhow::{Context, Result};
use reqwest::get;

pub mod alias;
pub mod directions;
pub mod distance;
pub mod filter;
pub mod item;
pub mod locations;
pub mod normalize;
pub mod position;
pub mod rank;

use alias::AliasTable;
use item::MenuItem;
use locations::{LocationIndex, LocationRecord};

/// Parses the catalog snapshot from a local CSV file.
pub fn load_catalog(path: &str) -> Result<Vec<MenuItem>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading catalog snapshot {path}"))?;

    item::parse_catalog(&text)
}

/// Fetches and parses the catalog snapshot from a remote URL.
pub async fn fetch_catalog(url: &str) -> Result<Vec<MenuItem>> {
    let response = get(url).await?;
    let text = response.text().await?;

    item::parse_catalog(&text)
}

/// Loads the alias snapshot. Integrity problems (a name claimed by two
/// canonical entries) are logged during construction, not returned.
pub fn load_aliases(path: &str) -> Result<AliasTable> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading alias snapshot {path}"))?;

    Ok(serde_json::from_str(&text)?)
}

/// Loads the geocoded location snapshot and builds the index.
pub fn load_locations(path: &str) -> Result<LocationIndex> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading location snapshot {path}"))?;
    let records: Vec<LocationRecord> = serde_json::from_str(&text)?;

    Ok(LocationIndex::build(&records))
}

use std::sync::Arc;

use catalog::{
    alias::AliasTable, fetch_catalog, item::MenuItem, load_aliases, load_catalog, load_locations,
    locations::LocationIndex,
};
use tracing::info;

use super::config::Config;

/// Immutable per-session snapshot shared by every request.
pub struct State {
    pub config: Config,
    pub items: Vec<MenuItem>,
    pub aliases: AliasTable,
    pub locations: LocationIndex,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let items = match &config.catalog_url {
            Some(url) => fetch_catalog(url).await.expect("Catalog fetch failed!"),
            None => load_catalog(&config.catalog_path).expect("Catalog snapshot missing!"),
        };
        let aliases = load_aliases(&config.aliases_path).expect("Alias snapshot missing!");
        let locations = load_locations(&config.locations_path).expect("Location snapshot missing!");

        info!("Loaded items: {}", items.len());
        info!("Loaded alias entries: {}", aliases.len());
        info!("Loaded geocoded venues: {}", locations.len());

        Arc::new(Self {
            config,
            items,
            aliases,
            locations,
        })
    }
}

use std::{env, fmt::Display, str::FromStr};

use catalog::locations::LatLng;
use catalog::position::RESORT_CENTER;
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub catalog_path: String,
    /// When set, the catalog snapshot is fetched from here instead of
    /// `catalog_path`.
    pub catalog_url: Option<String>,
    pub aliases_path: String,
    pub locations_path: String,
    pub fallback_lat: f64,
    pub fallback_lng: f64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "1111"),
            catalog_path: try_load("CATALOG_PATH", "data/snacks.csv"),
            catalog_url: var("CATALOG_URL").ok(),
            aliases_path: try_load("ALIASES_PATH", "data/restaurant_aliases.json"),
            locations_path: try_load("LOCATIONS_PATH", "data/restaurant_locations.json"),
            fallback_lat: try_load("FALLBACK_LAT", &RESORT_CENTER.lat.to_string()),
            fallback_lng: try_load("FALLBACK_LNG", &RESORT_CENTER.lng.to_string()),
        }
    }

    /// Origin used when a request carries no coordinates.
    pub fn fallback_origin(&self) -> LatLng {
        LatLng {
            lat: self.fallback_lat,
            lng: self.fallback_lng,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use catalog::{
    directions::{MapProvider, directions_url},
    filter::{Filters, filter},
    item::{distinct_areas, distinct_categories, distinct_parks},
    locations::LatLng,
    rank::{RankedItem, rank},
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::State as AppState, utils::resolve_origin};

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub park: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    #[serde(default)]
    pub ddp_only: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub ranked: RankedItem,
    /// Walking-directions link for located items. Google's universal link
    /// works everywhere; Apple-device clients build their own.
    pub directions: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub origin: LatLng,
    pub results: Vec<SearchResult>,
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let origin = resolve_origin(params.lat, params.lng, state.config.fallback_origin())?;

    let filters = Filters {
        park: params.park,
        category: params.category,
        area: params.area,
        ddp_only: params.ddp_only,
        query: params.q,
    };

    let matched = filter(&state.items, &filters);
    let results: Vec<SearchResult> = rank(matched, origin, &state.aliases, &state.locations)
        .into_iter()
        .map(|ranked| {
            let directions = ranked
                .location
                .map(|point| directions_url(point, Some(origin), MapProvider::Google));
            SearchResult { ranked, directions }
        })
        .collect();

    Ok(Json(SearchResponse {
        count: results.len(),
        origin,
        results,
    }))
}

#[derive(Serialize)]
pub struct FacetsResponse {
    pub parks: Vec<String>,
    pub categories: Vec<String>,
    pub areas: Vec<String>,
}

/// Distinct filter values for the dropdowns, derived from the loaded
/// catalog rather than hardcoded.
pub async fn facets_handler(State(state): State<Arc<AppState>>) -> Json<FacetsResponse> {
    Json(FacetsResponse {
        parks: distinct_parks(&state.items),
        categories: distinct_categories(&state.items),
        areas: distinct_areas(&state.items),
    })
}

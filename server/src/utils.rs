use catalog::locations::LatLng;

use crate::error::AppError::{self, MalformedQuery};

/// Origin point for a search request.
///
/// Coordinates are optional but come as a pair; a half-supplied or
/// out-of-range pair is the client's bug, not a silent fallback. Absent
/// coordinates use the configured fallback (device geolocation denied or
/// unavailable).
pub fn resolve_origin(
    lat: Option<f64>,
    lng: Option<f64>,
    fallback: LatLng,
) -> Result<LatLng, AppError> {
    match (lat, lng) {
        (None, None) => Ok(fallback),
        (Some(lat), Some(lng)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                return Err(MalformedQuery("coordinates out of range"));
            }
            Ok(LatLng { lat, lng })
        }
        _ => Err(MalformedQuery("lat and lng must be supplied together")),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_origin;
    use catalog::locations::LatLng;

    const FALLBACK: LatLng = LatLng {
        lat: 28.37062494668054,
        lng: -81.51939009164909,
    };

    #[test]
    fn test_absent_pair_uses_fallback() {
        let origin = resolve_origin(None, None, FALLBACK).unwrap();
        assert_eq!(origin, FALLBACK);
    }

    #[test]
    fn test_valid_pair_passes_through() {
        let origin = resolve_origin(Some(28.41), Some(-81.58), FALLBACK).unwrap();
        assert_eq!(origin.lat, 28.41);
        assert_eq!(origin.lng, -81.58);
    }

    #[test]
    fn test_half_pair_rejected() {
        assert!(resolve_origin(Some(28.41), None, FALLBACK).is_err());
        assert!(resolve_origin(None, Some(-81.58), FALLBACK).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(resolve_origin(Some(91.0), Some(0.0), FALLBACK).is_err());
        assert!(resolve_origin(Some(0.0), Some(-181.0), FALLBACK).is_err());
        assert!(resolve_origin(Some(f64::NAN), Some(0.0), FALLBACK).is_err());
    }
}

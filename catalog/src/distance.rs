use crate::locations::LatLng;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points, spherical
/// Earth. No rounding; display formatting is the caller's job.
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

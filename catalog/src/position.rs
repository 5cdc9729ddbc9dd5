use serde::{Deserialize, Serialize};

use crate::locations::LatLng;

/// Fallback origin when device location is missing or denied: the middle
/// of the resort.
pub const RESORT_CENTER: LatLng = LatLng {
    lat: 28.37062494668054,
    lng: -81.51939009164909,
};

/// Lifecycle of the device-position request, as reported by the caller.
/// The pipeline itself only ever consumes the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoStatus {
    #[default]
    Idle,
    Requesting,
    Granted,
    Denied,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub point: LatLng,
    pub status: GeoStatus,
}

impl Default for UserPosition {
    fn default() -> Self {
        Self {
            point: RESORT_CENTER,
            status: GeoStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoStatus, RESORT_CENTER, UserPosition};

    #[test]
    fn test_default_falls_back_to_resort_center() {
        let position = UserPosition::default();
        assert_eq!(position.point, RESORT_CENTER);
        assert_eq!(position.status, GeoStatus::Idle);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&GeoStatus::Unavailable).unwrap(),
            "\"unavailable\""
        );
    }
}

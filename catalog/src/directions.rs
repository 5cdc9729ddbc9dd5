use crate::locations::LatLng;

/// Which maps app the link should open. Device detection belongs to the
/// caller; both links work without an origin by using the device's own
/// location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapProvider {
    Apple,
    Google,
}

/// Walking-directions deep link to a venue.
pub fn directions_url(dest: LatLng, origin: Option<LatLng>, provider: MapProvider) -> String {
    match provider {
        MapProvider::Apple => {
            let mut url = format!(
                "maps://maps.apple.com/?daddr={},{}&dirflg=w",
                dest.lat, dest.lng
            );
            if let Some(origin) = origin {
                url.push_str(&format!("&saddr={},{}", origin.lat, origin.lng));
            }
            url
        }
        MapProvider::Google => {
            let mut url = format!(
                "https://www.google.com/maps/dir/?api=1&destination={},{}&travelmode=walking",
                dest.lat, dest.lng
            );
            if let Some(origin) = origin {
                url.push_str(&format!("&origin={},{}", origin.lat, origin.lng));
            }
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MapProvider, directions_url};
    use crate::locations::LatLng;

    const DEST: LatLng = LatLng {
        lat: 28.3583,
        lng: -81.5908,
    };
    const ORIGIN: LatLng = LatLng {
        lat: 28.3706,
        lng: -81.5194,
    };

    #[test]
    fn test_google_with_origin() {
        let url = directions_url(DEST, Some(ORIGIN), MapProvider::Google);
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=28.3583,-81.5908\
             &travelmode=walking&origin=28.3706,-81.5194"
        );
    }

    #[test]
    fn test_apple_without_origin() {
        let url = directions_url(DEST, None, MapProvider::Apple);
        assert_eq!(url, "maps://maps.apple.com/?daddr=28.3583,-81.5908&dirflg=w");
        assert!(!url.contains("saddr"));
    }
}

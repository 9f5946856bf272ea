use serde::{Deserialize, Serialize};

/// Mean Earth radius, in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position. Latitude and longitude are in degrees; latitude is
/// expected in `[-90, 90]` and longitude in `[-180, 180]`. Values outside
/// those ranges are a caller error and are not validated here, since
/// coordinates arrive from the geocoding collaborator which owns validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two coordinates in kilometers, computed with
/// the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// Pure function with no side effects. Callers that need an edge weight
/// truncate the result to an integer; the distance itself stays real-valued.
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    // Rounding can push the term past 1.0 for near-antipodal pairs.
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}

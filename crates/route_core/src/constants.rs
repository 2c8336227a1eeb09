/// Edge weight type, a distance in miles
pub type Weight = f64;

/// Mean earth radius in miles, used by the haversine distance
pub const EARTH_RADIUS_MILES: f64 = 3963.1676;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::{Weight, EARTH_RADIUS_MILES};

/// A geographic coordinate, the vertex type of the graph.
///
/// Equality and hashing are structural and bit-exact on both coordinates:
/// a coordinate parsed twice from the same source always maps to the same
/// vertex. No tolerance-based matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Point { lat, lon }
    }

    /// Great-circle distance to `other` in miles (haversine formula).
    ///
    /// Symmetric, non-negative, and zero iff `self == other`.
    pub fn distance(&self, other: &Point) -> Weight {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let lon2 = other.lon.to_radians();
        let a = (lat2 - lat1) / 2.0;
        let b = (lon2 - lon1) / 2.0;
        let c = a.sin().powi(2) + lat1.cos() * lat2.cos() * b.sin().powi(2);
        let d = 2.0 * c.sqrt().asin();

        EARTH_RADIUS_MILES * d
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lon.to_bits() == other.lon.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

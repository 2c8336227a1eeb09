use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::point::Point;

/// An ordered sequence of vertices, each consecutive pair connected by a
/// graph edge, together with the total distance in miles.
///
/// A single-vertex route (start equals end) is valid and has distance 0.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<Point>,
    pub distance: Weight,
}

impl Route {
    pub fn new(points: Vec<Point>, distance: Weight) -> Self {
        Route { points, distance }
    }
}

/// Sums the distances between consecutive points. Returns 0 for fewer than
/// two points.
pub fn route_distance(points: &[Point]) -> Weight {
    points.windows(2).map(|pair| pair[0].distance(&pair[1])).sum()
}

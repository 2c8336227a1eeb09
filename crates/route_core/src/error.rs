use thiserror::Error;

use crate::point::Point;

/// Query errors. Loading errors are reported separately via `anyhow`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GraphError {
    /// The argument point is not a vertex of the graph.
    #[error("point {0} is not a vertex of the graph")]
    UnknownVertex(Point),

    /// `nearest` was invoked on a graph with zero vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// Both endpoints are vertices but lie in disjoint components.
    #[error("no route between {start} and {end}")]
    NoRoute { start: Point, end: Point },
}

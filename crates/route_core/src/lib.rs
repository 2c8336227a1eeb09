//! Crate to model a weighted graph of latitude-longitude points and answer
//! routing queries over it.
//!
//! # Basic usage
//! ```no_run
//! use std::path::Path;
//! use route_core::{graph::Graph, point::Point, search::dijkstra::Dijkstra};
//!
//! // Build the graph once from a .graph file
//! let g = Graph::from_graph_file(Path::new("path/to/usa.graph")).unwrap();
//!
//! // Snap arbitrary coordinates to the nearest vertices
//! let start = *g.nearest(&Point::new(35.9940, -78.8986)).unwrap();
//! let end = *g.nearest(&Point::new(35.7796, -78.6382)).unwrap();
//!
//! // Run the shortest path search
//! let mut dijkstra = Dijkstra::new(&g);
//! let route = dijkstra.route(&start, &end).unwrap();
//! println!("{} miles", route.distance);
//! ```
//!
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod point;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;

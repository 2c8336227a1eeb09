//! Implementation of Dijkstra's shortest path algorithm.
use std::collections::BinaryHeap;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::error::GraphError;
use crate::graph::{Graph, NodeIndex};
use crate::point::Point;
use crate::statistics::SearchStats;

use super::route::Route;

/// Frontier entry. Carries its distance directly so the heap ordering never
/// reads state that is mutated during the traversal.
#[derive(Debug)]
struct Candidate {
    node_idx: NodeIndex,
    weight: Weight,
}

impl Candidate {
    fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

// Reversed comparisons turn std's max-heap into a min-heap.
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.weight.partial_cmp(&self.weight)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// The minimum-total-distance route from `start` to `end`.
    ///
    /// Both points must be vertices of the graph. `start == end` yields the
    /// degenerate single-vertex route with distance 0, a valid result
    /// distinct from [`GraphError::NoRoute`].
    pub fn route(&mut self, start: &Point, end: &Point) -> Result<Route, GraphError> {
        let source = self
            .g
            .node_index(start)
            .ok_or(GraphError::UnknownVertex(*start))?;
        let target = self
            .g
            .node_index(end)
            .ok_or(GraphError::UnknownVertex(*end))?;

        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(Route::new(vec![*start], 0.0));
        }

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> =
            FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            self.stats.nodes_settled += 1;

            // Weights are non-negative, so the target is final when popped
            if node_idx == target {
                break;
            }

            for &neighbor in self.g.neighbor_indices(node_idx) {
                let new_distance = weight + self.g.edge_weight(node_idx, neighbor);
                if new_distance
                    < node_data
                        .get(&neighbor)
                        .unwrap_or(&(f64::INFINITY, None))
                        .0
                {
                    node_data.insert(neighbor, (new_distance, Some(node_idx)));
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        match super::reconstruct_path(target, source, &node_data) {
            Some((indices, weight)) => {
                let points: Vec<Point> = indices.into_iter().map(|i| self.g[i]).collect();
                debug!("Route found: {:?}", points);
                info!(
                    "Route found: {:?}/{} nodes settled",
                    self.stats.duration, self.stats.nodes_settled
                );
                Ok(Route::new(points, weight))
            }
            None => {
                info!(
                    "No route found: {:?}/{} nodes settled",
                    self.stats.duration, self.stats.nodes_settled
                );
                Err(GraphError::NoRoute {
                    start: *start,
                    end: *end,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::search::route::route_distance;
    use crate::util::test_graphs::{equator_path_graph, lattice_graph};

    use super::*;

    #[test]
    fn route_on_path_graph() {
        let (g, points) = equator_path_graph(3);
        let (a, b, c) = (points[0], points[1], points[2]);

        let mut d = Dijkstra::new(&g);
        let route = d.route(&a, &c).unwrap();

        assert_eq!(route.points, vec![a, b, c]);
        assert_relative_eq!(route.distance, a.distance(&b) + b.distance(&c));
        assert_relative_eq!(route.distance, route_distance(&route.points));
    }

    #[test]
    fn route_prefers_shorter_detour() {
        // A lattice with no direct A-D edge: A-B-D goes along the equator
        // first, A-C-D along the meridian first. The meridian-first leg ends
        // with a slightly shorter east-west hop at latitude 1.
        let (g, points) = lattice_graph();
        let (a, c, d) = (points[0], points[2], points[3]);

        let mut dijkstra = Dijkstra::new(&g);
        let route = dijkstra.route(&a, &d).unwrap();

        assert_eq!(route.points, vec![a, c, d]);
    }

    #[test]
    fn route_to_self_is_single_vertex() {
        let (g, points) = equator_path_graph(3);
        let a = points[0];

        let mut d = Dijkstra::new(&g);
        let route = d.route(&a, &a).unwrap();

        assert_eq!(route.points, vec![a]);
        assert_eq!(route.distance, 0.0);
        assert_eq!(route_distance(&route.points), 0.0);
    }

    #[test]
    fn route_between_components_fails() {
        // Two disjoint path graphs
        let mut g = Graph::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let x = Point::new(10.0, 0.0);
        let y = Point::new(10.0, 1.0);
        for p in [a, b, x, y] {
            g.add_vertex(p);
        }
        g.add_edge(&a, &b).unwrap();
        g.add_edge(&x, &y).unwrap();

        let mut d = Dijkstra::new(&g);
        assert_eq!(
            d.route(&a, &x),
            Err(GraphError::NoRoute { start: a, end: x })
        );
        assert_eq!(
            d.route(&x, &a),
            Err(GraphError::NoRoute { start: x, end: a })
        );
    }

    #[test]
    fn route_with_unknown_endpoint_fails() {
        let (g, points) = equator_path_graph(2);
        let stranger = Point::new(50.0, 50.0);

        let mut d = Dijkstra::new(&g);
        assert_eq!(
            d.route(&points[0], &stranger),
            Err(GraphError::UnknownVertex(stranger))
        );
        assert_eq!(
            d.route(&stranger, &points[0]),
            Err(GraphError::UnknownVertex(stranger))
        );
    }

    #[test]
    fn consecutive_route_points_are_edges() {
        let (g, points) = lattice_graph();

        let mut d = Dijkstra::new(&g);
        let route = d.route(&points[0], &points[3]).unwrap();

        for pair in route.points.windows(2) {
            let neighbors: Vec<Point> = g.neighbors(&pair[0]).unwrap().copied().collect();
            assert!(neighbors.contains(&pair[1]));
        }
    }

    #[test]
    fn stats_are_populated() {
        let (g, points) = equator_path_graph(4);

        let mut d = Dijkstra::new(&g);
        d.route(&points[0], &points[3]).unwrap();

        assert!(d.stats.duration.is_some());
        assert_eq!(d.stats.nodes_settled, 4);
    }

    /// Exhaustive simple-path search, the oracle for the optimality property.
    fn brute_force_distance(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        fn dfs(
            g: &Graph,
            current: NodeIndex,
            target: NodeIndex,
            visited: &mut Vec<bool>,
            acc: Weight,
            best: &mut Option<Weight>,
        ) {
            if current == target {
                if best.map_or(true, |b| acc < b) {
                    *best = Some(acc);
                }
                return;
            }
            for &neighbor in g.neighbor_indices(current) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    dfs(
                        g,
                        neighbor,
                        target,
                        visited,
                        acc + g.edge_weight(current, neighbor),
                        best,
                    );
                    visited[neighbor.index()] = false;
                }
            }
        }

        let mut best = None;
        let mut visited = vec![false; g.num_vertices()];
        visited[source.index()] = true;
        dfs(g, source, target, &mut visited, 0.0, &mut best);
        best
    }

    proptest! {
        #[test]
        fn route_is_optimal(
            edge_bits in prop::collection::vec(any::<bool>(), 15),
            source in 0usize..6,
            target in 0usize..6,
        ) {
            // Six fixed, distinct vertices; the property randomizes the edge set
            let points: Vec<Point> = (0..6)
                .map(|i| Point::new(i as f64 * 0.7, (i * i) as f64 * 0.3))
                .collect();

            let mut g = Graph::new();
            for p in &points {
                g.add_vertex(*p);
            }
            let mut bit = 0;
            for i in 0..6 {
                for j in (i + 1)..6 {
                    if edge_bits[bit] {
                        g.add_edge(&points[i], &points[j]).unwrap();
                    }
                    bit += 1;
                }
            }

            let expected = if source == target {
                Some(0.0)
            } else {
                brute_force_distance(&g, crate::graph::node_index(source), crate::graph::node_index(target))
            };

            let mut d = Dijkstra::new(&g);
            match d.route(&points[source], &points[target]) {
                Ok(route) => {
                    let best = expected.expect("dijkstra found a route the oracle missed");
                    prop_assert!((route.distance - best).abs() < 1e-9);
                    prop_assert!((route_distance(&route.points) - route.distance).abs() < 1e-9);
                }
                Err(GraphError::NoRoute { .. }) => prop_assert!(expected.is_none()),
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }
    }
}

//! Small hand-built graphs shared by the unit tests.
use crate::graph::Graph;
use crate::point::Point;

/// A path graph of `n` vertices spaced one degree apart along the equator:
/// (0,0) - (0,1) - ... - (0,n-1).
pub fn equator_path_graph(n: usize) -> (Graph, Vec<Point>) {
    let points: Vec<Point> = (0..n).map(|i| Point::new(0.0, i as f64)).collect();

    let mut g = Graph::new();
    for p in &points {
        g.add_vertex(*p);
    }
    for pair in points.windows(2) {
        g.add_edge(&pair[0], &pair[1]).expect("vertices just added");
    }

    (g, points)
}

/// A 2x2 lattice without a diagonal:
///
/// ```text
/// C (1,0) --- D (1,1)
/// |           |
/// A (0,0) --- B (0,1)
/// ```
///
/// Returned in the order [A, B, C, D].
pub fn lattice_graph() -> (Graph, Vec<Point>) {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 1.0);
    let c = Point::new(1.0, 0.0);
    let d = Point::new(1.0, 1.0);

    let mut g = Graph::new();
    for p in [a, b, c, d] {
        g.add_vertex(p);
    }
    g.add_edge(&a, &b).expect("vertices just added");
    g.add_edge(&b, &d).expect("vertices just added");
    g.add_edge(&a, &c).expect("vertices just added");
    g.add_edge(&c, &d).expect("vertices just added");

    (g, vec![a, b, c, d])
}

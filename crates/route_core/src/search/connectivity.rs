use crate::error::GraphError;
use crate::graph::Graph;
use crate::point::Point;

/// Tests whether `b` is reachable from `a` over the graph's edges.
///
/// Both points must be vertices, otherwise the query fails with
/// [`GraphError::UnknownVertex`]. A vertex is trivially connected to itself.
///
/// Iterative depth-first search; the visited table keeps the traversal
/// terminating on cyclic graphs. Undirected edges make the relation
/// symmetric: `connected(a, b) == connected(b, a)`.
pub fn connected(g: &Graph, a: &Point, b: &Point) -> Result<bool, GraphError> {
    let source = g.node_index(a).ok_or(GraphError::UnknownVertex(*a))?;
    let target = g.node_index(b).ok_or(GraphError::UnknownVertex(*b))?;

    if source == target {
        return Ok(true);
    }

    let mut visited = vec![false; g.num_vertices()];
    let mut to_explore = vec![source];
    visited[source.index()] = true;

    while let Some(current) = to_explore.pop() {
        for &neighbor in g.neighbor_indices(current) {
            if neighbor == target {
                return Ok(true);
            }
            if !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                to_explore.push(neighbor);
            }
        }
    }

    Ok(false)
}

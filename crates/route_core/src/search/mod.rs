use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

pub mod connectivity;
pub mod dijkstra;
pub mod route;

/// Walks the predecessor links backward from `target` to `source` and
/// reverses, yielding the vertex indices in start-to-end order together with
/// the total weight. Returns `None` if `target` was never discovered.
pub(crate) fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<(Vec<NodeIndex>, Weight)> {
    let mut path = vec![target];
    let weight = node_data.get(&target)?.0;

    let mut previous_node = node_data.get(&target)?.1?;

    while let Some(prev_node) = node_data.get(&previous_node)?.1 {
        path.push(previous_node);
        previous_node = prev_node;
    }
    path.push(source);
    path.reverse();
    Some((path, weight))
}

use super::{NodeMap, Path};

/// Construct the path from the start node to the goal node
/// Walks the parent indices backwards from the goal, then reverses
/// The returned path is freshly owned - the node map can be dropped after
pub(crate) fn reconstruct<C>(node_map: &NodeMap<C>, goal_index: usize) -> Path {
    let mut path = Path::new();
    let mut current = goal_index;

    // Trace back from goal to start; the start node's parent is usize::MAX
    while current != usize::MAX {
        match node_map.get_index(current) {
            Some((&coord, &(parent, _))) => {
                path.push(coord);
                current = parent;
            }
            // Parent indices are produced by the map itself, so this
            // only triggers on a corrupted map
            None => break,
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    #[test]
    fn test_reconstruct_walks_back_to_start() {
        let mut node_map: NodeMap<u32> = NodeMap::default();

        let a = node_map.insert_full(Coord::new(0, 0), (usize::MAX, 0)).0;
        let b = node_map.insert_full(Coord::new(0, 1), (a, 1)).0;
        let c = node_map.insert_full(Coord::new(1, 1), (b, 2)).0;

        assert_eq!(
            reconstruct(&node_map, c),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert_eq!(
            reconstruct(&node_map, b),
            vec![Coord::new(0, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn test_reconstruct_start_only() {
        let mut node_map: NodeMap<u32> = NodeMap::default();
        let a = node_map.insert_full(Coord::new(2, 3), (usize::MAX, 0)).0;

        assert_eq!(reconstruct(&node_map, a), vec![Coord::new(2, 3)]);
    }
}

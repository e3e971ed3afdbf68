pub mod a_star;
pub mod bfs;
pub mod dijkstra;
mod reconstruct;

use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::errors::GridError;
use crate::grid::{Coord, Grid};

/// Use indexmap for fast index-addressed lookups and rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Node map shared by all three searches
/// Maps each discovered coordinate to (parent_index, best_cost) where:
/// - parent_index is the index of the predecessor in this same map
/// - best_cost is the cheapest known cost from the start
/// The start node carries parent_index usize::MAX to mark the root
pub type NodeMap<C> = FxIndexMap<Coord, (usize, C)>;

/// Ordered coordinates from start to end inclusive
/// Consecutive entries differ by exactly one orthogonal step
pub type Path = Vec<Coord>;

/// Fail fast on endpoints the searches cannot accept
/// Unreachable goals are not caught here - that is a valid search outcome
pub(crate) fn check_endpoints(grid: &Grid, start: Coord, end: Coord) -> Result<(), GridError> {
    for c in [start, end] {
        if c.row >= grid.rows() || c.col >= grid.cols() {
            return Err(GridError::OutOfBounds(c));
        }
        if !grid.is_walkable(c) {
            return Err(GridError::Blocked(c));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::Rng;

    use super::a_star::a_star;
    use super::bfs::bfs;
    use super::dijkstra::dijkstra;
    use super::*;
    use crate::grid::manhattan;

    // Parse a grid from rows of '0' (walkable) and '1' (blocked)
    fn grid_from_str(s: &str) -> Grid {
        let rows = s
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|c| c == "0")
                    .collect::<Vec<_>>()
            })
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    // Exhaustive reference: minimum edge count over all simple paths
    // Only viable on small grids
    fn brute_force_shortest(grid: &Grid, start: Coord, end: Coord) -> Option<usize> {
        fn explore(
            grid: &Grid,
            current: Coord,
            end: Coord,
            visited: &mut HashSet<Coord>,
            depth: usize,
            best: &mut Option<usize>,
        ) {
            if current == end {
                if best.is_none_or(|b| depth < b) {
                    *best = Some(depth);
                }
                return;
            }
            for n in grid.neighbors(current) {
                if visited.insert(n) {
                    explore(grid, n, end, visited, depth + 1, best);
                    visited.remove(&n);
                }
            }
        }

        let mut best = None;
        let mut visited = HashSet::from([start]);
        explore(grid, start, end, &mut visited, 0, &mut best);
        best
    }

    fn assert_valid_path(grid: &Grid, path: &[Coord], start: Coord, end: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "non-adjacent step in {path:?}");
        }
        assert!(path.iter().all(|&c| grid.is_walkable(c)));
    }

    #[test]
    fn test_algorithms_agree_on_reference_grid() {
        let grid = grid_from_str(
            "0 0 0 0 0\n\
             0 1 1 0 0\n\
             0 0 0 0 0\n\
             0 0 1 1 0\n\
             0 0 0 0 0",
        );
        let start = Coord::new(0, 0);
        let end = Coord::new(4, 4);

        let by_bfs = bfs(&grid, start, end).unwrap().unwrap();
        let by_dijkstra = dijkstra(&grid, start, end).unwrap().unwrap();
        let by_a_star = a_star(&grid, start, end).unwrap().unwrap();

        // All optimal, so equal length - the coordinates may differ when
        // several optimal paths exist
        assert_eq!(by_bfs.len(), 9);
        assert_eq!(by_dijkstra.len(), 9);
        assert_eq!(by_a_star.len(), 9);

        for path in [&by_bfs, &by_dijkstra, &by_a_star] {
            assert_valid_path(&grid, path, start, end);
        }
    }

    #[test]
    fn test_algorithms_agree_on_unreachable() {
        let grid = grid_from_str("0 0 0\n1 1 1\n0 0 0");
        let start = Coord::new(0, 1);
        let end = Coord::new(2, 1);

        assert_eq!(bfs(&grid, start, end).unwrap(), None);
        assert_eq!(dijkstra(&grid, start, end).unwrap(), None);
        assert_eq!(a_star(&grid, start, end).unwrap(), None);
    }

    #[test]
    fn test_searches_are_deterministic() {
        let grid = grid_from_str(
            "0 0 0 0\n\
             0 1 0 0\n\
             0 0 0 1\n\
             0 1 0 0",
        );
        let start = Coord::new(0, 0);
        let end = Coord::new(3, 3);

        assert_eq!(bfs(&grid, start, end), bfs(&grid, start, end));
        assert_eq!(dijkstra(&grid, start, end), dijkstra(&grid, start, end));
        assert_eq!(a_star(&grid, start, end), a_star(&grid, start, end));
    }

    #[test]
    fn test_optimality_against_brute_force_on_random_grids() {
        let mut rng = rand::rng();

        for _ in 0..50 {
            let mut rows: Vec<Vec<bool>> = (0..4)
                .map(|_| (0..4).map(|_| !rng.random_bool(0.3)).collect())
                .collect();
            // Keep both endpoints open
            rows[0][0] = true;
            rows[3][3] = true;
            let grid = Grid::from_rows(rows).unwrap();

            let start = Coord::new(0, 0);
            let end = Coord::new(3, 3);

            let expected = brute_force_shortest(&grid, start, end);

            let by_bfs = bfs(&grid, start, end).unwrap();
            let by_dijkstra = dijkstra(&grid, start, end).unwrap();
            let by_a_star = a_star(&grid, start, end).unwrap();

            match expected {
                Some(edges) => {
                    for path in [&by_bfs, &by_dijkstra, &by_a_star] {
                        let path = path.as_ref().expect("reachable per brute force");
                        assert_eq!(path.len(), edges + 1);
                        assert_valid_path(&grid, path, start, end);
                    }
                }
                None => {
                    assert_eq!(by_bfs, None);
                    assert_eq!(by_dijkstra, None);
                    assert_eq!(by_a_star, None);
                }
            }
        }
    }

    #[test]
    fn test_check_endpoints() {
        let grid = Grid::from_rows(vec![
            vec![true, false],
            vec![true, true],
        ]).unwrap();

        let ok = Coord::new(0, 0);
        assert_eq!(check_endpoints(&grid, ok, Coord::new(1, 1)), Ok(()));

        let outside = Coord::new(2, 0);
        assert_eq!(
            check_endpoints(&grid, ok, outside),
            Err(GridError::OutOfBounds(outside))
        );

        let wall = Coord::new(0, 1);
        assert_eq!(
            check_endpoints(&grid, wall, ok),
            Err(GridError::Blocked(wall))
        );
    }
}

use std::collections::VecDeque;

use indexmap::map::Entry::Vacant;

use super::reconstruct::reconstruct;
use super::{NodeMap, Path, check_endpoints};
use crate::errors::GridError;
use crate::grid::{Coord, Grid};

/// Shortest path by edge count using breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Every edge costs 1, so the first time the end cell is dequeued its
/// level equals the true shortest distance - no relaxation is needed
pub fn bfs(grid: &Grid, start: Coord, end: Coord) -> Result<Option<Path>, GridError> {
    check_endpoints(grid, start, end)?;

    let (visited, goal_index) = flood(grid, start, Some(end));

    Ok(goal_index.map(|index| reconstruct(&visited, index)))
}

/// Hop-count map of every cell reachable from start
/// Each entry holds (parent_index, distance in steps)
pub fn bfs_distances(grid: &Grid, start: Coord) -> Result<NodeMap<u32>, GridError> {
    check_endpoints(grid, start, start)?;

    let (visited, _) = flood(grid, start, None);

    Ok(visited)
}

/// Level-order expansion from start, stopping early when goal is dequeued
/// Returns the visited map and the goal's index in it, if reached
fn flood(grid: &Grid, start: Coord, goal: Option<Coord>) -> (NodeMap<u32>, Option<usize>) {

    // FIFO frontier of indices into the visited map
    // Cells are marked visited on enqueue, so each enters the queue once
    let mut frontier: VecDeque<usize> = VecDeque::new();

    let mut visited: NodeMap<u32> = NodeMap::default();
    let start_index = visited.insert_full(start, (usize::MAX, 0)).0;
    frontier.push_back(start_index);

    while let Some(index) = frontier.pop_front() {

        let (&coord, &(_, depth)) = visited.get_index(index).unwrap();

        // First dequeue of the goal is optimal under uniform edge cost
        if goal == Some(coord) {
            return (visited, Some(index));
        }

        for neighbor in grid.neighbors(coord) {
            if let Vacant(e) = visited.entry(neighbor) {
                let neighbor_index = e.index();
                e.insert((index, depth + 1));
                frontier.push_back(neighbor_index);
            }
        }
    }

    (visited, None)
}

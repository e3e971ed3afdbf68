use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Zero;

use super::reconstruct::reconstruct;
use super::{NodeMap, Path, check_endpoints};
use crate::errors::GridError;
use crate::grid::{Coord, Grid};

/// Shortest path using Dijkstra's algorithm with unit edge costs
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// On an unweighted grid this matches bfs; it exists as the degenerate
/// case of the weighted search below
pub fn dijkstra(grid: &Grid, start: Coord, end: Coord) -> Result<Option<Path>, GridError> {
    dijkstra_with(grid, start, end, |_, _| 1u32)
}

/// Shortest path using Dijkstra's algorithm with caller-supplied edge costs
/// edge_cost is invoked as (from, to) for each expanded edge and must
/// return a positive cost
pub fn dijkstra_with<C, F>(
    grid: &Grid,
    start: Coord,
    end: Coord,
    edge_cost: F,
) -> Result<Option<Path>, GridError>
where
    C: Zero + Ord + Copy,
    F: Fn(Coord, Coord) -> C,
{
    check_endpoints(grid, start, end)?;

    let (node_map, goal_index) = relax(grid, start, Some(end), edge_cost);

    Ok(goal_index.map(|index| reconstruct(&node_map, index)))
}

/// Best-cost map of every cell reachable from start
/// Runs the search to exhaustion instead of stopping at a goal
pub fn dijkstra_costs<C, F>(
    grid: &Grid,
    start: Coord,
    edge_cost: F,
) -> Result<NodeMap<C>, GridError>
where
    C: Zero + Ord + Copy,
    F: Fn(Coord, Coord) -> C,
{
    check_endpoints(grid, start, start)?;

    let (node_map, _) = relax(grid, start, None, edge_cost);

    Ok(node_map)
}

/// Priority-ordered expansion from start
/// Returns the node map and the goal's index in it, if reached
fn relax<C, F>(
    grid: &Grid,
    start: Coord,
    goal: Option<Coord>,
    edge_cost: F,
) -> (NodeMap<C>, Option<usize>)
where
    C: Zero + Ord + Copy,
    F: Fn(Coord, Coord) -> C,
{
    // Min-priority frontier keyed by cumulative cost from start
    let mut frontier: BinaryHeap<QueueEntry<C>> = BinaryHeap::new();

    let mut node_map: NodeMap<C> = NodeMap::default();
    let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    frontier.push(QueueEntry {
        index: start_index,
        cost: Zero::zero(),
    });

    while let Some(QueueEntry { index, cost }) = frontier.pop() {

        let (&coord, &(_, best)) = node_map.get_index(index).unwrap();

        // Stale entry - a cheaper path to this cell was queued after it
        // Lazy deletion: skip it rather than removing it eagerly on update
        if cost > best {
            continue;
        }

        // First pop at the current best cost finalizes the cell
        if goal == Some(coord) {
            return (node_map, Some(index));
        }

        for neighbor in grid.neighbors(coord) {

            let tentative = best + edge_cost(coord, neighbor);

            let neighbor_index;
            match node_map.entry(neighbor) {
                Vacant(e) => {
                    neighbor_index = e.index();
                    e.insert((index, tentative));
                }
                Occupied(mut e) => {
                    if e.get().1 > tentative {
                        neighbor_index = e.index();
                        e.insert((index, tentative));
                    } else {
                        // Existing path is at least as good
                        continue;
                    }
                }
            }

            // Pushed only on strict improvement; the old entry stays in
            // the heap and is discarded when popped
            frontier.push(QueueEntry {
                index: neighbor_index,
                cost: tentative,
            });
        }
    }

    (node_map, None)
}

/// Frontier entry: node map index plus the cost it was queued with
/// Ordering is reversed so BinaryHeap pops the cheapest entry first
#[derive(Debug)]
struct QueueEntry<C> {
    index: usize,
    cost: C,
}

impl<C: Ord> Ord for QueueEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<C: Ord> PartialOrd for QueueEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for QueueEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<C: PartialEq> Eq for QueueEntry<C> {}

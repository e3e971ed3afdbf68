use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Zero;

use super::reconstruct::reconstruct;
use super::{NodeMap, Path, check_endpoints};
use crate::errors::GridError;
use crate::grid::{Coord, Grid, manhattan};

/// Frontier entry for A*
/// Sorted by f_cost, then by cost so that among equal-f candidates the
/// one with the smaller cost from start is popped first
#[derive(Debug)]
struct Node<C> {
    index: usize, // index in the node map
    cost: C,      // cost from start (g)
    f_cost: C,    // cost + heuristic (f)
}

impl<C: Ord> Ord for Node<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.cost.cmp(&self.cost))
    }
}
impl<C: Ord> PartialOrd for Node<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for Node<C> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.cost == other.cost
    }
}
impl<C: PartialEq> Eq for Node<C> {}

/// Shortest path using A* with unit edge costs and a Manhattan heuristic
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Manhattan distance never overestimates on a 4-connected grid and
/// satisfies the triangle inequality along edges, so the first pop of the
/// end cell is optimal and no finalized cell is ever re-opened
pub fn a_star(grid: &Grid, start: Coord, end: Coord) -> Result<Option<Path>, GridError> {
    a_star_with(grid, start, end, |_, _| 1u32, |c| manhattan(c, end))
}

/// Shortest path using A* with caller-supplied edge costs and heuristic
/// The heuristic must be admissible for the result to stay optimal
pub fn a_star_with<C, F, H>(
    grid: &Grid,
    start: Coord,
    end: Coord,
    edge_cost: F,
    heuristic: H,
) -> Result<Option<Path>, GridError>
where
    C: Zero + Ord + Copy,
    F: Fn(Coord, Coord) -> C,
    H: Fn(Coord) -> C,
{
    check_endpoints(grid, start, end)?;

    let (node_map, goal_index) = guide(grid, start, end, edge_cost, heuristic);

    Ok(goal_index.map(|index| reconstruct(&node_map, index)))
}

/// Priority-ordered expansion keyed by cost-so-far plus heuristic
/// Returns the node map and the goal's index in it, if reached
fn guide<C, F, H>(
    grid: &Grid,
    start: Coord,
    end: Coord,
    edge_cost: F,
    heuristic: H,
) -> (NodeMap<C>, Option<usize>)
where
    C: Zero + Ord + Copy,
    F: Fn(Coord, Coord) -> C,
    H: Fn(Coord) -> C,
{
    // Open list: cells pending expansion, cheapest estimated total first
    let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

    // The node map doubles as the best-known-cost record: a popped entry
    // is valid only while its queued cost matches the map's current best
    let mut node_map: NodeMap<C> = NodeMap::default();
    let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    open_list.push(Node {
        index: start_index,
        cost: Zero::zero(),
        f_cost: heuristic(start),
    });

    while let Some(Node { index, cost, .. }) = open_list.pop() {

        let (&coord, &(_, best)) = node_map.get_index(index).unwrap();

        // Stale entry, lazy deletion as in the uniform-cost search
        if cost > best {
            continue;
        }

        if coord == end {
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

            open_list.push(Node {
                index: neighbor_index,
                cost: tentative,
                f_cost: tentative + heuristic(neighbor),
            });
        }
    }

    (node_map, None)
}

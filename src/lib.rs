//! Grid pathfinding algorithms.
//!
//! Three searches over a shared 4-connected occupancy grid:
//!
//! - [`bfs`] - unweighted shortest path by level-order exploration
//! - [`dijkstra`] - uniform-cost search, with a general positive-weight
//!   variant in [`dijkstra_with`]
//! - [`a_star`] - informed search guided by a Manhattan heuristic
//!
//! Each call is a pure function of its inputs: the [`Grid`] is never
//! mutated and all search state is rebuilt per call, so a grid can be
//! shared across threads. "No path exists" is a normal outcome reported
//! as `Ok(None)`; only malformed input produces a [`GridError`].

pub mod errors;
pub mod grid;
pub mod search;

pub use errors::GridError;
pub use grid::{Coord, Grid, manhattan};
pub use search::a_star::{a_star, a_star_with};
pub use search::bfs::{bfs, bfs_distances};
pub use search::dijkstra::{dijkstra, dijkstra_costs, dijkstra_with};
pub use search::{NodeMap, Path};

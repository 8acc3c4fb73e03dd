//! # waypoint_pathfinding
//!
//! A grid-based route planner. A start cell and an ordered list of waypoints are
//! connected segment by segment using one of four classical searches:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Movement is 4-directional and every step costs 1.
//!
//! Every search leaves its bookkeeping (frontier, visited, parent links and costs) on the
//! [Grid] so that the exploration can be rendered, in addition to returning the path.
pub mod canvas;
pub mod error;
pub mod grid;
pub mod route;
pub mod solver;

pub use canvas::{Canvas, Selections};
pub use error::{GridError, ParseAlgorithmError};
pub use grid::{Cell, Grid, Role};
pub use route::{compute_paths, prepare_grid_for_selections, route, Route, Segment};
pub use solver::{reconstruct_path, Algorithm, GridSolver};

/// Cost value of a cell that has not been reached by the current search.
pub const INFINITY: i32 = i32::MAX;
/// Inline capacity used for neighbourhoods, a 4-grid never has more than four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

pub const DEFAULT_COLS: usize = 16;
pub const DEFAULT_ROWS: usize = 12;
pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 50;

/// Clamps a requested grid dimension to [MIN_DIMENSION]..=[MAX_DIMENSION], so arbitrary user
/// input (zero, negative, huge) always yields a usable grid size.
pub fn clamp_dimension(value: i64) -> usize {
    value.clamp(MIN_DIMENSION as i64, MAX_DIMENSION as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_dimensions() {
        assert_eq!(clamp_dimension(-3), MIN_DIMENSION);
        assert_eq!(clamp_dimension(0), MIN_DIMENSION);
        assert_eq!(clamp_dimension(17), 17);
        assert_eq!(clamp_dimension(5000), MAX_DIMENSION);
    }
}

use crate::error::ParseAlgorithmError;
use crate::grid::{Cell, Grid};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, warn};
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod holder;

pub use astar::AstarSolver;
pub use bfs::BfsSolver;
pub use dfs::DfsSolver;
pub use dijkstra::DijkstraSolver;

/// A search strategy over a [Grid]. Implementors only explore: they record parent links on the
/// cells they discover and report whether the goal was reached. Path extraction and endpoint
/// validation are shared.
pub trait GridSolver {
    /// Explores from `start` until `goal` is finalized or the frontier is exhausted. Leaves
    /// frontier/visited flags, costs and parent links on the grid. Returns [true] if the goal was
    /// reached.
    fn explore(&self, grid: &mut Grid, start: Point, goal: Point) -> bool;

    fn name(&self) -> &'static str;

    /// Computes a path from `start` to `goal`. The path excludes `start` and ends with `goal`, so
    /// it is empty if both are equal. Returns [None] if the goal cannot be reached. Search state
    /// left by an earlier search is cleared first; roles and obstacles are kept.
    fn get_path_single_goal(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        if !grid.is_walkable(start) || !grid.is_walkable(goal) {
            debug!("{}: {start} or {goal} is blocked or off the grid", self.name());
            return None;
        }
        grid.transient_reset();
        if self.explore(grid, start, goal) {
            let path = reconstruct_path(grid, start, goal);
            debug!(
                "{}: found path of length {} from {start} to {goal}",
                self.name(),
                path.len()
            );
            Some(path)
        } else {
            debug!("{}: {goal} is not reachable from {start}", self.name());
            None
        }
    }

    /// Number of unit steps taken when walking from `start` along `path`.
    fn get_path_cost(&self, start: Point, path: &[Point]) -> i32 {
        std::iter::once(&start)
            .chain(path)
            .tuple_windows()
            .map(|(a, b)| a.manhattan_distance(b))
            .sum()
    }
}

/// Walks the parent links back from `goal` and returns the cells in start to goal order,
/// excluding `start`. A chain that dead-ends or loops before reaching `start` is cut off and
/// what was collected so far is returned.
pub fn reconstruct_path(grid: &Grid, start: Point, goal: Point) -> Vec<Point> {
    let limit = grid.width() * grid.height();
    let mut path: Vec<Point> =
        std::iter::successors(Some(goal), |p| grid.cell(*p).and_then(Cell::parent))
            .take_while(|p| *p != start)
            .take(limit)
            .collect();
    if let Some(last) = path.last() {
        let parent = grid.cell(*last).and_then(Cell::parent);
        if parent.is_none() || path.len() == limit {
            warn!("Parent chain from {goal} does not lead back to {start}");
        }
    }
    path.reverse();
    path
}

/// The closed set of search strategies. Dispatch happens in [Algorithm::search].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    pub fn search(self, grid: &mut Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        match self {
            Algorithm::Bfs => BfsSolver.get_path_single_goal(grid, start, goal),
            Algorithm::Dfs => DfsSolver.get_path_single_goal(grid, start, goal),
            Algorithm::Dijkstra => DijkstraSolver.get_path_single_goal(grid, start, goal),
            Algorithm::Astar => AstarSolver.get_path_single_goal(grid, start, goal),
        }
    }
    /// Short identifier, the inverse of [Algorithm::from_str].
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }
    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => BfsSolver.name(),
            Algorithm::Dfs => DfsSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
            Algorithm::Astar => AstarSolver.name(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

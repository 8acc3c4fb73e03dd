use fxhash::FxHashSet;
use grid_util::point::Point;
use std::collections::VecDeque;

use crate::{grid::Grid, solver::GridSolver};

/// Breadth-first search. Expands cells in discovery order, so the first time the goal is taken
/// off the queue its path has the fewest possible steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn explore(&self, grid: &mut Grid, start: Point, goal: Point) -> bool {
        let mut queue = VecDeque::from([start]);
        let mut discovered = FxHashSet::default();
        discovered.insert(start);
        if let Some(cell) = grid.cell_mut(start) {
            cell.distance = 0;
        }
        while let Some(current) = queue.pop_front() {
            let Some(cell) = grid.cell_mut(current) else {
                continue;
            };
            cell.visited = true;
            let distance = cell.distance;
            if current == goal {
                return true;
            }
            for neighbor in grid.neighbors(current) {
                if !grid.is_walkable(neighbor) || !discovered.insert(neighbor) {
                    continue;
                }
                if let Some(n) = grid.cell_mut(neighbor) {
                    n.parent = Some(current);
                    n.distance = distance + 1;
                    n.frontier = true;
                }
                queue.push_back(neighbor);
            }
        }
        false
    }

    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the optimal 8 step solution is found on an open 5x5 grid.
    #[test]
    fn solve_open_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        let path = BfsSolver
            .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path.last(), Some(&Point::new(4, 4)));
        assert_eq!(grid.cell(Point::new(4, 4)).unwrap().distance(), 8);
    }

    /// With up, down, left, right expansion the path first runs down the column, then right.
    #[test]
    fn expansion_order_decides_ties() {
        let mut grid = Grid::new(3, 3).unwrap();
        let path = BfsSolver
            .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn marks_exploration() {
        // |S#.|
        // |.#G|
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_blocked(Point::new(1, 0), true);
        grid.set_blocked(Point::new(1, 1), true);
        let path = BfsSolver.get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(2, 1));
        assert!(path.is_none());
        assert!(grid.cell(Point::new(0, 0)).unwrap().is_visited());
        assert!(grid.cell(Point::new(0, 1)).unwrap().is_frontier());
        assert!(grid.cell(Point::new(0, 1)).unwrap().is_visited());
        assert!(!grid.cell(Point::new(2, 1)).unwrap().is_visited());
        assert!(grid.cell(Point::new(1, 0)).unwrap().parent().is_none());
    }
}

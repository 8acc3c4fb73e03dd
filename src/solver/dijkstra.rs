use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::{grid::Grid, solver::holder::CostQueue, solver::GridSolver};

/// Uniform-cost search. Every step costs 1, so this settles cells in the same layers as
/// breadth-first search but through a cost ordered frontier with relaxation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn explore(&self, grid: &mut Grid, start: Point, goal: Point) -> bool {
        let mut finalized = FxHashSet::default();
        let mut queue: CostQueue<i32> = CostQueue::new(start);
        if let Some(cell) = grid.cell_mut(start) {
            cell.distance = 0;
        }
        while let Some((current, distance)) = queue.pop() {
            // Entries pushed before a cheaper route was found are stale
            if !finalized.insert(current) {
                continue;
            }
            if let Some(cell) = grid.cell_mut(current) {
                cell.visited = true;
            }
            if current == goal {
                return true;
            }
            let tentative = distance + 1;
            for neighbor in grid.neighbors(current) {
                if !grid.is_walkable(neighbor) || finalized.contains(&neighbor) {
                    continue;
                }
                let Some(n) = grid.cell_mut(neighbor) else {
                    continue;
                };
                if tentative < n.distance {
                    n.distance = tentative;
                    n.parent = Some(current);
                    n.frontier = true;
                    queue.push(neighbor, tentative, tentative);
                }
            }
        }
        false
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BfsSolver;

    #[test]
    fn solve_open_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        let path = DijkstraSolver
            .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(grid.cell(Point::new(4, 4)).unwrap().distance(), 8);
    }

    /// Row 2 is a wall with a single gap at column 3, the path has to pass through it.
    #[test]
    fn routes_through_gap() {
        let mut grid = Grid::new(5, 5).unwrap();
        for x in [0, 1, 2, 4] {
            grid.set_blocked(Point::new(x, 2), true);
        }
        let path = DijkstraSolver
            .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(0, 4))
            .unwrap();
        assert!(path.contains(&Point::new(3, 2)));
        assert_eq!(path.len(), 10);
    }

    /// On unit costs the settled distances agree with breadth-first search.
    #[test]
    fn distances_match_bfs() {
        let mut dijkstra_grid = Grid::new(6, 4).unwrap();
        for p in [(1, 0), (1, 1), (1, 2), (3, 1), (3, 2), (3, 3)] {
            dijkstra_grid.set_blocked(Point::new(p.0, p.1), true);
        }
        let mut bfs_grid = dijkstra_grid.clone();
        let start = Point::new(0, 0);
        let goal = Point::new(5, 0);
        let a = DijkstraSolver.get_path_single_goal(&mut dijkstra_grid, start, goal);
        let b = BfsSolver.get_path_single_goal(&mut bfs_grid, start, goal);
        assert_eq!(a.map(|p| p.len()), b.map(|p| p.len()));
        assert_eq!(
            dijkstra_grid.cell(goal).unwrap().distance(),
            bfs_grid.cell(goal).unwrap().distance()
        );
    }
}

use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::{grid::Grid, solver::holder::CostQueue, solver::GridSolver};

/// A* search guided by the Manhattan distance, which never overestimates on a 4-grid with unit
/// steps, so the returned paths are optimal. Among cells with equal f-cost the one with the
/// lowest g-cost is expanded first.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2)
    }
}

impl GridSolver for AstarSolver {
    fn explore(&self, grid: &mut Grid, start: Point, goal: Point) -> bool {
        let mut open = FxHashSet::default();
        let mut closed = FxHashSet::default();
        let mut queue: CostQueue<i32> = CostQueue::new(start);
        open.insert(start);
        if let Some(cell) = grid.cell_mut(start) {
            cell.g_cost = 0;
            cell.h_cost = self.heuristic(&start, &goal);
            cell.f_cost = cell.h_cost;
        }
        while let Some((current, g_cost)) = queue.pop() {
            if closed.contains(&current) {
                continue;
            }
            let Some(cell) = grid.cell_mut(current) else {
                continue;
            };
            // We may have pushed a cell several times if we found a cheaper way to reach it,
            // only the entry with the current g-cost is expanded
            if g_cost > cell.g_cost {
                continue;
            }
            cell.visited = true;
            open.remove(&current);
            closed.insert(current);
            if current == goal {
                return true;
            }
            let tentative = g_cost + 1;
            for neighbor in grid.neighbors(current) {
                if !grid.is_walkable(neighbor) || closed.contains(&neighbor) {
                    continue;
                }
                let h_cost = self.heuristic(&neighbor, &goal);
                let Some(n) = grid.cell_mut(neighbor) else {
                    continue;
                };
                let discovered = open.contains(&neighbor);
                if tentative < n.g_cost || !discovered {
                    n.parent = Some(current);
                    n.g_cost = tentative;
                    n.h_cost = h_cost;
                    n.f_cost = tentative + h_cost;
                    if !discovered {
                        n.frontier = true;
                        open.insert(neighbor);
                    }
                    queue.push(neighbor, tentative + h_cost, tentative);
                }
            }
        }
        false
    }

    fn name(&self) -> &'static str {
        "A* Search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the optimal 8 step solution is found and the costs are left on the grid.
    #[test]
    fn solve_open_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(4, 4);
        let path = AstarSolver
            .get_path_single_goal(&mut grid, start, goal)
            .unwrap();
        assert_eq!(path.len() as i32, start.manhattan_distance(&goal));
        let cell = grid.cell(goal).unwrap();
        assert_eq!(cell.g_cost(), 8);
        assert_eq!(cell.h_cost(), 0);
        assert_eq!(cell.f_cost(), 8);
        assert_eq!(grid.cell(start).unwrap().f_cost(), 8);
    }

    /// On an open grid the heuristic is exact, so only cells on some shortest path are expanded.
    #[test]
    fn expands_only_along_optimal_cells() {
        let mut grid = Grid::new(7, 7).unwrap();
        let start = Point::new(1, 1);
        let goal = Point::new(4, 1);
        AstarSolver.get_path_single_goal(&mut grid, start, goal).unwrap();
        let visited: Vec<Point> = grid
            .cells()
            .filter(|c| c.is_visited())
            .map(|c| c.pos())
            .collect();
        assert_eq!(
            visited,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(4, 1)
            ]
        );
    }

    #[test]
    fn test_complex() {
        let mut grid = Grid::new(10, 10).unwrap();
        for p in [(1, 1), (5, 0), (0, 5), (8, 8)] {
            grid.set_blocked(Point::new(p.0, p.1), true);
        }
        let path = AstarSolver
            .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(7, 7))
            .unwrap();
        assert_eq!(path.len(), 14);
        assert!(path.iter().all(|p| !grid.is_blocked(*p)));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let mut grid = Grid::new(5, 5).unwrap();
        for p in [(2, 1), (2, 3), (1, 2), (3, 2)] {
            grid.set_blocked(Point::new(p.0, p.1), true);
        }
        assert!(AstarSolver
            .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(2, 2))
            .is_none());
        assert!(grid.cell(Point::new(4, 4)).unwrap().is_visited());
    }
}

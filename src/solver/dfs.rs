use fxhash::FxHashSet;
use grid_util::point::Point;

use crate::{grid::Grid, solver::GridSolver};

/// Depth-first search. Uses the same discovery bookkeeping as [BfsSolver](super::BfsSolver)
/// with a stack instead of a queue, so it finds a path whenever one exists but not necessarily
/// the shortest. The last pushed neighbour (right before left before down before up) is
/// expanded first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn explore(&self, grid: &mut Grid, start: Point, goal: Point) -> bool {
        let mut stack = vec![start];
        let mut discovered = FxHashSet::default();
        discovered.insert(start);
        while let Some(current) = stack.pop() {
            if let Some(cell) = grid.cell_mut(current) {
                cell.visited = true;
            }
            if current == goal {
                return true;
            }
            for neighbor in grid.neighbors(current) {
                if !grid.is_walkable(neighbor) || !discovered.insert(neighbor) {
                    continue;
                }
                if let Some(n) = grid.cell_mut(neighbor) {
                    n.parent = Some(current);
                    n.frontier = true;
                }
                stack.push(neighbor);
            }
        }
        false
    }

    fn name(&self) -> &'static str {
        "Depth-First Search"
    }
}

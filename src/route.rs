use crate::grid::{Grid, Role};
use crate::solver::Algorithm;
use grid_util::point::Point;
use log::{debug, info};

/// One searched leg of a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// The cells after `from` up to and including `to`, [None] if `to` was not reachable.
    pub path: Option<Vec<Point>>,
}

/// The per-segment results of a routed selection sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub segments: Vec<Segment>,
}

impl Route {
    /// True if every segment was reached. A route without segments is trivially complete.
    pub fn is_complete(&self) -> bool {
        self.segments.iter().all(|s| s.path.is_some())
    }
    /// The stitched route, excluding the origin. Unreached segments leave a gap.
    pub fn points(&self) -> Vec<Point> {
        self.segments
            .iter()
            .filter_map(|s| s.path.as_deref())
            .flatten()
            .copied()
            .collect()
    }
    /// Number of steps over all reached segments.
    pub fn len(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|s| s.path.as_ref())
            .map(Vec::len)
            .sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Routes through `selections` in order on `grid`, in place. The first selection is the origin
/// and keeps the start role; every later selection is searched from the previous one. Reached
/// cells between the two ends of a segment become path cells, interior waypoints are absorbed
/// into the path and the final selection stays the goal. A segment that cannot be reached is
/// left unmarked and the next segment starts from its goal anyway.
///
/// Selections outside the grid are dropped, so the goal is the last selection on the grid.
/// Obstacles are kept; all earlier roles and search state are cleared first.
pub fn route(grid: &mut Grid, selections: &[Point], algorithm: Algorithm) -> Route {
    grid.clear_annotations();
    grid.apply_roles(selections);
    let mut route = Route::default();
    let Some((&origin, waypoints)) = selections.split_first() else {
        return route;
    };
    if !grid.in_bounds(origin) {
        return route;
    }
    let waypoints: Vec<Point> = waypoints
        .iter()
        .copied()
        .filter(|p| grid.in_bounds(*p))
        .collect();
    let mut current = origin;
    for (i, &target) in waypoints.iter().enumerate() {
        let Some(cell) = grid.cell_mut(target) else {
            continue;
        };
        cell.mark_goal();
        grid.transient_reset();
        let path = algorithm.search(grid, current, target);
        if let Some(path) = &path {
            for &p in path {
                if p == current || p == target {
                    continue;
                }
                if let Some(cell) = grid.cell_mut(p).filter(|c| c.role() != Role::Start) {
                    cell.mark_path();
                }
            }
        } else {
            debug!("Segment {current} -> {target} has no path, continuing from {target}");
        }
        route.segments.push(Segment {
            from: current,
            to: target,
            path,
        });
        if i + 1 < waypoints.len() {
            if let Some(cell) = grid.cell_mut(target) {
                cell.mark_path();
            }
            current = target;
        }
    }
    info!(
        "{}: routed {} segments, {} steps, complete: {}",
        algorithm,
        route.segments.len(),
        route.len(),
        route.is_complete()
    );
    route
}

/// Returns a copy of `grid` with previous annotations cleared and the roles of `selections`
/// applied, ready to be rendered before a run.
pub fn prepare_grid_for_selections(grid: &Grid, selections: &[Point]) -> Grid {
    let mut next = grid.clone();
    next.clear_annotations();
    next.apply_roles(selections);
    next
}

/// Returns an annotated copy of `grid` with the route through `selections`, see [route].
pub fn compute_paths(grid: &Grid, selections: &[Point], algorithm: Algorithm) -> Grid {
    let mut next = grid.clone();
    route(&mut next, selections, algorithm);
    next
}

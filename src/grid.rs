use crate::error::GridError;
use crate::{clamp_dimension, INFINITY, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// The role a cell plays in the current route. Roles are mutually exclusive, marking a cell
/// with one role replaces the previous one. Obstacles are tracked separately on [Cell].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Plain,
    Start,
    Goal,
    /// A waypoint with its 1-based position in the selection sequence.
    Waypoint(usize),
    OnPath,
}

impl Role {
    /// Short label shown for the role: empty for plain and start cells, `G` for the goal,
    /// `W<n>` for the n-th waypoint and `P` for path cells.
    pub fn label(&self) -> String {
        match self {
            Role::Plain | Role::Start => String::new(),
            Role::Goal => "G".to_owned(),
            Role::Waypoint(n) => format!("W{n}"),
            Role::OnPath => "P".to_owned(),
        }
    }
}

/// A single grid cell. The position is fixed at creation; `parent` is a key back into the
/// owning [Grid] and the costs, `frontier` and `visited` belong to the most recent search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    pub(crate) parent: Option<Point>,
    pub(crate) distance: i32,
    pub(crate) g_cost: i32,
    pub(crate) h_cost: i32,
    pub(crate) f_cost: i32,
    role: Role,
    blocked: bool,
    pub(crate) frontier: bool,
    pub(crate) visited: bool,
}

impl Cell {
    fn new(pos: Point) -> Cell {
        Cell {
            pos,
            parent: None,
            distance: INFINITY,
            g_cost: INFINITY,
            h_cost: INFINITY,
            f_cost: INFINITY,
            role: Role::Plain,
            blocked: false,
            frontier: false,
            visited: false,
        }
    }
    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn col(&self) -> i32 {
        self.pos.x
    }
    pub fn row(&self) -> i32 {
        self.pos.y
    }
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }
    /// Path cost from the start, as computed by breadth-first search or Dijkstra.
    pub fn distance(&self) -> i32 {
        self.distance
    }
    pub fn g_cost(&self) -> i32 {
        self.g_cost
    }
    pub fn h_cost(&self) -> i32 {
        self.h_cost
    }
    pub fn f_cost(&self) -> i32 {
        self.f_cost
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }
    pub fn is_goal(&self) -> bool {
        self.role == Role::Goal
    }
    pub fn is_waypoint(&self) -> bool {
        matches!(self.role, Role::Waypoint(_))
    }
    pub fn is_on_path(&self) -> bool {
        self.role == Role::OnPath
    }
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
    pub fn is_frontier(&self) -> bool {
        self.frontier
    }
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    /// The label a renderer shows for this cell, either the coordinates or the role label.
    pub fn label(&self, show_coords: bool) -> String {
        if show_coords {
            format!("{},{}", self.pos.x, self.pos.y)
        } else {
            self.role.label()
        }
    }

    pub fn mark_start(&mut self) {
        self.role = Role::Start;
    }
    pub fn mark_goal(&mut self) {
        self.role = Role::Goal;
    }
    pub fn mark_waypoint(&mut self, order: usize) {
        self.role = Role::Waypoint(order);
    }
    pub fn mark_path(&mut self) {
        self.role = Role::OnPath;
    }
    pub fn clear_role(&mut self) {
        self.role = Role::Plain;
    }

    fn reset_transient(&mut self) {
        self.parent = None;
        self.distance = INFINITY;
        self.g_cost = INFINITY;
        self.h_cost = INFINITY;
        self.f_cost = INFINITY;
        self.frontier = false;
        self.visited = false;
    }
}

/// [Grid] owns a fixed `width` x `height` block of [Cell]s addressed by [Point] with
/// `x` as column and `y` as row, both 0-indexed. Next to the cells it maintains the connected
/// components of the walkable cells in a [UnionFind] structure, which answers reachability
/// queries without running a search.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates a grid in which every cell is walkable and has no role.
    pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension {
                cols: width,
                rows: height,
            });
        }
        Ok(Grid::build(width, height))
    }
    /// Creates a grid from unchecked input, clamping both dimensions with [clamp_dimension].
    pub fn new_clamped(cols: i64, rows: i64) -> Grid {
        Grid::build(clamp_dimension(cols), clamp_dimension(rows))
    }
    fn build(width: usize, height: usize) -> Grid {
        let cells = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Cell::new(Point::new(x, y))))
            .collect();
        let mut grid = Grid {
            width,
            height,
            cells,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        debug!("Created {width}x{height} grid");
        grid
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    pub fn get_ix(&self, point: Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.y as usize * self.width + point.x as usize)
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        let ix = self.get_ix(point)?;
        Some(&self.cells[ix])
    }
    pub fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        let ix = self.get_ix(point)?;
        Some(&mut self.cells[ix])
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The in-bounds cells directly above, below, left and right of `point`, in that order.
    /// The order decides which of several equally good paths the searches settle on.
    pub fn neighbors(&self, point: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.in_bounds(*p))
        .collect()
    }
    /// True iff `point` lies on the grid and is not an obstacle.
    pub fn is_walkable(&self, point: Point) -> bool {
        self.cell(point).is_some_and(|cell| !cell.blocked)
    }
    pub fn is_blocked(&self, point: Point) -> bool {
        self.cell(point).is_some_and(|cell| cell.blocked)
    }

    /// Places or removes an obstacle. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_blocked(&mut self, point: Point, blocked: bool) {
        let Some(ix) = self.get_ix(point) else {
            return;
        };
        if self.cells[ix].blocked == blocked {
            return;
        }
        self.cells[ix].blocked = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neighbors(point) {
                if let Some(n_ix) = self.get_ix(n).filter(|&n_ix| !self.cells[n_ix].blocked) {
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Clears everything, obstacles included. Used when all selections are discarded.
    pub fn full_reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_transient();
            cell.role = Role::Plain;
            cell.blocked = false;
        }
        self.generate_components();
    }
    /// Clears parent links, costs and the frontier/visited flags of the previous search. Roles and
    /// obstacles are left alone, so earlier segments of a route stay marked.
    pub fn transient_reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_transient();
        }
    }
    /// Clears roles and search state but keeps the obstacles.
    pub fn clear_annotations(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_transient();
            cell.role = Role::Plain;
        }
    }
    /// Marks the first selection as start and the rest as numbered waypoints. Selections outside
    /// the grid are skipped.
    pub fn apply_roles(&mut self, selections: &[Point]) {
        for (i, &point) in selections.iter().enumerate() {
            match self.cell_mut(point) {
                Some(cell) if i == 0 => cell.mark_start(),
                Some(cell) => cell.mark_waypoint(i),
                None => warn!("Ignoring selection {point} outside of the grid"),
            }
        }
    }

    /// Checks if start and goal are walkable and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            warn!("Querying reachability on dirty components, call update() first");
        }
        match (self.get_ix(*start), self.get_ix(*goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                !self.cells[start_ix].blocked
                    && !self.cells[goal_ix].blocked
                    && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up walkable 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height {
            for x in 0..self.width {
                let ix = y * self.width + x;
                if self.cells[ix].blocked {
                    continue;
                }
                if x + 1 < self.width && !self.cells[ix + 1].blocked {
                    self.components.union(ix, ix + 1);
                }
                if y + 1 < self.height && !self.cells[ix + self.width].blocked {
                    self.components.union(ix, ix + self.width);
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row
                .iter()
                .map(|cell| match cell.role {
                    _ if cell.blocked => '#',
                    Role::Start => 'S',
                    Role::Goal => 'G',
                    Role::Waypoint(_) => 'W',
                    Role::OnPath => '*',
                    Role::Plain if cell.visited => 'o',
                    Role::Plain if cell.frontier => '+',
                    Role::Plain => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3).unwrap_err(),
            GridError::EmptyDimension { cols: 0, rows: 3 }
        );
        assert!(Grid::new(4, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
        let clamped = Grid::new_clamped(0, 80);
        assert_eq!((clamped.width(), clamped.height()), (1, 50));
    }

    #[test]
    fn lookup_outside_is_absent() {
        let grid = Grid::new(3, 2).unwrap();
        assert!(grid.cell(Point::new(-1, 0)).is_none());
        assert!(grid.cell(Point::new(3, 0)).is_none());
        assert!(grid.cell(Point::new(0, 2)).is_none());
        assert_eq!(grid.cell(Point::new(2, 1)).unwrap().pos(), Point::new(2, 1));
    }

    /// The neighbour order is up, down, left, right and leaves out points beyond the border.
    #[test]
    fn neighbour_order() {
        let grid = Grid::new(3, 3).unwrap();
        let center = grid.neighbors(Point::new(1, 1));
        assert_eq!(
            center.as_slice(),
            &[
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
        let corner = grid.neighbors(Point::new(0, 0));
        assert_eq!(corner.as_slice(), &[Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn transient_reset_keeps_roles_and_obstacles() {
        let mut grid = Grid::new(3, 3).unwrap();
        let p = Point::new(1, 1);
        grid.set_blocked(Point::new(2, 2), true);
        grid.apply_roles(&[Point::new(0, 0), p]);
        {
            let cell = grid.cell_mut(p).unwrap();
            cell.parent = Some(Point::new(0, 1));
            cell.distance = 2;
            cell.g_cost = 2;
            cell.h_cost = 1;
            cell.f_cost = 3;
            cell.frontier = true;
            cell.visited = true;
        }
        grid.transient_reset();
        let cell = grid.cell(p).unwrap();
        assert_eq!(cell.role(), Role::Waypoint(1));
        assert_eq!(cell.parent(), None);
        assert_eq!(cell.distance(), INFINITY);
        assert_eq!(cell.g_cost(), INFINITY);
        assert_eq!(cell.h_cost(), INFINITY);
        assert_eq!(cell.f_cost(), INFINITY);
        assert!(!cell.is_frontier() && !cell.is_visited());
        assert!(grid.cell(Point::new(0, 0)).unwrap().is_start());
        assert!(grid.is_blocked(Point::new(2, 2)));
    }

    #[test]
    fn full_reset_clears_obstacles() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_blocked(Point::new(1, 0), true);
        grid.apply_roles(&[Point::new(0, 0), Point::new(1, 1)]);
        grid.full_reset();
        assert!(grid
            .cells()
            .all(|c| c.role() == Role::Plain && !c.is_blocked()));
    }

    #[test]
    fn roles_are_exclusive_and_labelled() {
        let mut grid = Grid::new(4, 1).unwrap();
        let selections = [Point::new(0, 0), Point::new(2, 0), Point::new(3, 0), Point::new(9, 9)];
        grid.apply_roles(&selections);
        assert!(grid.cell(selections[0]).unwrap().is_start());
        assert_eq!(grid.cell(selections[1]).unwrap().label(false), "W1");
        assert_eq!(grid.cell(selections[2]).unwrap().label(false), "W2");
        assert_eq!(grid.cell(selections[2]).unwrap().label(true), "3,0");
        let cell = grid.cell_mut(selections[1]).unwrap();
        cell.mark_goal();
        assert!(cell.is_goal() && !cell.is_waypoint());
        cell.mark_path();
        assert!(cell.is_on_path() && !cell.is_goal());
        assert_eq!(cell.label(false), "P");
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_blocked(Point::new(1, 0), true);
        grid.set_blocked(Point::new(1, 1), true);
        assert!(grid.components_dirty);
        grid.update();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 0)));
        // Opening the wall joins the components again without regeneration
        grid.set_blocked(Point::new(1, 1), false);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn display_marks_cells() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_blocked(Point::new(1, 0), true);
        grid.apply_roles(&[Point::new(0, 0), Point::new(2, 1)]);
        assert_eq!(grid.to_string(), "S#.\n..W\n");
    }
}

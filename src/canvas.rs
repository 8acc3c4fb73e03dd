use crate::grid::Grid;
use crate::route::{route, Route};
use crate::solver::Algorithm;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// The ordered selection sequence of a canvas: the origin followed by the waypoints in the
/// order they were chosen. A point is stored at most once.
#[derive(Clone, Debug, Default)]
pub struct Selections {
    points: FxIndexSet<Point>,
}

impl Selections {
    /// Appends `point`, returning [false] if it was already selected.
    pub fn push(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }
    /// Drops the most recent selection.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }
    pub fn clear(&mut self) {
        self.points.clear();
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }
}

/// One interactive grid with its own selections and algorithm choice. Canvases share nothing,
/// any number of them can be driven side by side.
#[derive(Clone, Debug)]
pub struct Canvas {
    grid: Grid,
    selections: Selections,
    algorithm: Algorithm,
    show_coords: bool,
    last_route: Option<Route>,
}

impl Default for Canvas {
    fn default() -> Canvas {
        Canvas::new(DEFAULT_COLS as i64, DEFAULT_ROWS as i64)
    }
}

impl Canvas {
    /// Creates a canvas, clamping both dimensions to the supported range.
    pub fn new(cols: i64, rows: i64) -> Canvas {
        Canvas {
            grid: Grid::new_clamped(cols, rows),
            selections: Selections::default(),
            algorithm: Algorithm::default(),
            show_coords: false,
            last_route: None,
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn selections(&self) -> &Selections {
        &self.selections
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn show_coords(&self) -> bool {
        self.show_coords
    }
    pub fn last_route(&self) -> Option<&Route> {
        self.last_route.as_ref()
    }

    /// Re-derives the roles from the selections and drops the result of the last run.
    fn refresh(&mut self) {
        self.grid.clear_annotations();
        self.grid.apply_roles(&self.selections.to_vec());
        self.last_route = None;
    }

    /// Appends a cell to the selections. Clicks outside the grid and repeated clicks on a
    /// selected cell are ignored; returns whether the selection changed.
    pub fn click(&mut self, point: Point) -> bool {
        if !self.grid.in_bounds(point) || !self.selections.push(point) {
            debug!("Ignoring click on {point}");
            return false;
        }
        self.refresh();
        true
    }
    /// Removes the last selection.
    pub fn undo(&mut self) -> Option<Point> {
        let removed = self.selections.pop()?;
        self.refresh();
        Some(removed)
    }
    /// Discards all selections and obstacles.
    pub fn reset(&mut self) {
        info!("Resetting {}x{} canvas", self.grid.width(), self.grid.height());
        self.selections.clear();
        self.grid.full_reset();
        self.last_route = None;
    }
    /// Recreates the grid with clamped dimensions. Selections and obstacles are lost.
    pub fn resize(&mut self, cols: i64, rows: i64) {
        self.grid = Grid::new_clamped(cols, rows);
        info!("Resized canvas to {}x{}", self.grid.width(), self.grid.height());
        self.selections.clear();
        self.last_route = None;
    }
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.refresh();
    }
    pub fn toggle_coords(&mut self) {
        self.show_coords = !self.show_coords;
    }
    /// Places an obstacle on a free cell or removes an existing one.
    pub fn toggle_blocked(&mut self, point: Point) {
        let blocked = self.grid.is_blocked(point);
        self.grid.set_blocked(point, !blocked);
        self.grid.update();
    }
    /// Routes through the current selections with the chosen algorithm.
    pub fn run(&mut self) -> &Route {
        let route = route(&mut self.grid, &self.selections.to_vec(), self.algorithm);
        self.last_route.insert(route)
    }
    /// The label to draw in a cell, [None] outside the grid.
    pub fn label(&self, point: Point) -> Option<String> {
        self.grid
            .cell(point)
            .map(|cell| cell.label(self.show_coords))
    }
}

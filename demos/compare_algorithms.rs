use grid_util::point::Point;
use waypoint_pathfinding::{compute_paths, Algorithm, Grid};

/// Runs every algorithm on the same grid, a wall on row 2 with a gap at column 3, and shows how
/// much of the grid each one explored.
fn main() {
    env_logger::init();
    let mut grid = Grid::new(8, 6).unwrap();
    for x in (0..8).filter(|x| *x != 3) {
        grid.set_blocked(Point::new(x, 2), true);
    }
    let selections = [Point::new(0, 0), Point::new(7, 5)];
    for algorithm in Algorithm::ALL {
        let annotated = compute_paths(&grid, &selections, algorithm);
        let visited = annotated.cells().filter(|c| c.is_visited()).count();
        let on_path = annotated.cells().filter(|c| c.is_on_path()).count();
        println!("{algorithm}: visited {visited} cells, {} steps", on_path + 1);
        println!("{annotated}");
    }
}

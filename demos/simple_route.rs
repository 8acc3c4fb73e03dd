use grid_util::point::Point;
use waypoint_pathfinding::{Algorithm, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
fn main() {
    env_logger::init();
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_blocked(Point::new(1, 1), true);
    let start = Point::new(0, 0);
    let goal = Point::new(2, 2);
    let path = Algorithm::Astar.search(&mut grid, start, goal).unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
    println!("{}", grid);
}

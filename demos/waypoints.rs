use grid_util::point::Point;
use waypoint_pathfinding::{Algorithm, Canvas};

/// Routes a start and three waypoints around a wall on the default 16x12 canvas and prints the
/// annotated grid together with the labels of the selected cells.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut canvas = Canvas::default();
    for y in 0..10 {
        canvas.toggle_blocked(Point::new(7, y));
    }
    canvas.set_algorithm(Algorithm::Dijkstra);
    let selections = [
        Point::new(1, 1),
        Point::new(12, 2),
        Point::new(13, 10),
        Point::new(2, 9),
    ];
    for p in selections {
        canvas.click(p);
    }
    println!("{}", canvas.grid());
    let route = canvas.run().clone();
    for segment in &route.segments {
        match &segment.path {
            Some(path) => println!("{} -> {}: {} steps", segment.from, segment.to, path.len()),
            None => println!("{} -> {}: unreachable", segment.from, segment.to),
        }
    }
    println!("{}", canvas.grid());
    for p in selections {
        println!("{p}: {:?}", canvas.label(p).unwrap_or_default());
    }
}

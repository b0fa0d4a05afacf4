use grid_pathtrace::{Engine, RunRequest, Strategy, WeightGrid, IMPASSABLE};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// S....
// .###.
// .....
// .###.
// ....G
// S marks the start
// G marks the goal
fn main() {
    let mut grid: WeightGrid = WeightGrid::new(5, 5, 0);
    for x in 1..4 {
        grid.set_weight(x, 1, IMPASSABLE).unwrap();
        grid.set_weight(x, 3, IMPASSABLE).unwrap();
    }
    grid.generate_components();

    let mut engine = Engine::new();
    let request = RunRequest {
        grid: &grid,
        start: Point::new(0, 0),
        end: Point::new(4, 4),
        strategy: Strategy::Bfs,
    };
    let result = engine.run(&request).unwrap();
    if result.found {
        println!(
            "A path with {} edges has been found after visiting {} cells:",
            result.path_edges(),
            result.visited_count
        );
        for p in result.path {
            println!("{:?}", p);
        }
    }
}

use grid_pathtrace::{Engine, RunRequest, Strategy, WeightGrid, IMPASSABLE};
use grid_util::grid::Grid;
use grid_util::point::Point;

// Runs all three strategies on the same weighted grid and prints a
// comparison table: visited cells, path edges, path cost and elapsed time.
// The middle row is expensive, so Dijkstra routes around cells the
// unweighted strategies walk straight through.
fn main() {
    let mut grid: WeightGrid = WeightGrid::new(12, 12, 0);
    for x in 0..12 {
        if x != 2 {
            grid.set_weight(x, 6, 90).unwrap();
        }
    }
    for y in 2..10 {
        grid.set_weight(7, y, IMPASSABLE).unwrap();
    }
    grid.generate_components();
    println!("{grid}");

    let start = Point::new(0, 0);
    let end = Point::new(11, 11);
    let mut engine = Engine::new();
    for strategy in Strategy::ALL {
        let request = RunRequest {
            grid: &grid,
            start,
            end,
            strategy,
        };
        let result = engine.run(&request).unwrap();
        println!(
            "{:>8}: visited {:>3} cells, {:>2} edges, cost {:>3}, {:.3} ms, {} samples",
            strategy.to_string(),
            result.visited_count,
            result.path_edges(),
            grid.path_cost(&result.path),
            result.elapsed_millis(),
            result.samples.len()
        );
    }
}

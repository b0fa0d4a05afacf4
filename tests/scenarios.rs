//! End-to-end scenarios pinning the externally observable contract of the
//! engine: path shapes, trace cadence and the per-strategy elapsed table.

use grid_pathtrace::{Engine, RunRequest, RunResult, Strategy, WeightGrid, IMPASSABLE};
use grid_util::grid::Grid;
use grid_util::point::Point;

fn run(engine: &mut Engine, grid: &WeightGrid, end: Point, strategy: Strategy) -> RunResult {
    let request = RunRequest {
        grid,
        start: Point::new(0, 0),
        end,
        strategy,
    };
    engine.run(&request).unwrap()
}

/// An open 5x5 grid: the unweighted-optimal and weighted-optimal paths
/// coincide at the Manhattan distance of 8 edges; DFS finds some longer or
/// equal route.
#[test]
fn open_grid_manhattan_paths() {
    let grid: WeightGrid = WeightGrid::new(5, 5, 0);
    let mut engine = Engine::new();
    let end = Point::new(4, 4);
    for strategy in Strategy::ALL {
        let result = run(&mut engine, &grid, end, strategy);
        assert!(result.found);
        match strategy {
            Strategy::Dfs => assert!(result.path_edges() >= 8),
            _ => assert_eq!(result.path_edges(), 8),
        }
        assert_eq!(grid.path_cost(&result.path) as usize, result.path_edges());
    }
}

/// A full impassable row separates start from goal: nobody gets through, and
/// everybody reports the explored half.
#[test]
fn separating_wall_defeats_all_strategies() {
    //  _____
    // |S    |
    // |     |
    // |#####|
    // |     |
    // |    G|
    //  _____
    let mut grid: WeightGrid = WeightGrid::new(5, 5, 0);
    for x in 0..5 {
        grid.set_weight(x, 2, IMPASSABLE).unwrap();
    }
    grid.generate_components();
    let mut engine = Engine::new();
    for strategy in Strategy::ALL {
        let result = run(&mut engine, &grid, Point::new(4, 4), strategy);
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.visited_count, 10);
        assert_eq!(result.visits.len(), 10);
    }
    assert!(grid.unreachable(&Point::new(0, 0), &Point::new(4, 4)));
}

/// On the open 5x5 grid BFS and Dijkstra both visit all 25 cells before
/// popping the far corner, so the sample milestones are fully determined.
#[test]
fn trace_samples_follow_visited_milestones() {
    let grid: WeightGrid = WeightGrid::new(5, 5, 0);
    let mut engine = Engine::new();
    for strategy in [Strategy::Bfs, Strategy::Dijkstra] {
        let result = run(&mut engine, &grid, Point::new(4, 4), strategy);
        assert_eq!(result.visited_count, 25);
        let milestones: Vec<usize> = result.samples.iter().map(|s| s.visited).collect();
        assert_eq!(milestones, vec![0, 5, 10, 15, 20, 25]);
    }
}

#[test]
fn custom_sample_interval_is_honored() {
    let grid: WeightGrid = WeightGrid::new(5, 5, 0);
    let mut engine = Engine::with_sample_interval(10);
    let result = run(&mut engine, &grid, Point::new(4, 4), Strategy::Bfs);
    let milestones: Vec<usize> = result.samples.iter().map(|s| s.visited).collect();
    assert_eq!(milestones, vec![0, 10, 20, 25]);
}

/// The same grid, three strategies: BFS takes the short expensive row while
/// Dijkstra pays more edges for less cost, and the comparison table ends up
/// with one entry per strategy.
#[test]
fn strategy_comparison() {
    //  ___
    // |S$G|   $ = weight 50
    // |...|
    //  ___
    let mut grid: WeightGrid = WeightGrid::new(3, 2, 0);
    grid.set_weight(1, 0, 50).unwrap();
    grid.generate_components();
    let mut engine = Engine::new();
    let end = Point::new(2, 0);

    let bfs = run(&mut engine, &grid, end, Strategy::Bfs);
    assert_eq!(bfs.path_edges(), 2);
    assert_eq!(grid.path_cost(&bfs.path), 51);

    let dijkstra = run(&mut engine, &grid, end, Strategy::Dijkstra);
    assert_eq!(dijkstra.path_edges(), 4);
    assert_eq!(grid.path_cost(&dijkstra.path), 4);

    let dfs = run(&mut engine, &grid, end, Strategy::Dfs);
    assert!(dfs.found);

    assert_eq!(engine.recorder.elapsed_times().len(), 3);
    // Re-running overwrites the strategy's entry instead of growing the table.
    run(&mut engine, &grid, end, Strategy::Bfs);
    assert_eq!(engine.recorder.elapsed_times().len(), 3);
}

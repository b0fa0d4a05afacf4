//! # grid_pathtrace
//!
//! An instrumented pathfinding engine for weighted rectangular grids.
//! Implements three interchangeable search strategies (depth-first,
//! breadth-first and
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! shortest-path search) which all report the exact order in which cells
//! were visited together with running visited-count samples and per-strategy
//! elapsed times, so completed runs can be rendered or compared afterwards.
//! Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so callers can answer reachability questions without flood-filling.
//!
//! ```
//! use grid_pathtrace::{Engine, RunRequest, Strategy, WeightGrid, IMPASSABLE};
//! use grid_util::grid::Grid;
//! use grid_util::point::Point;
//!
//! let mut grid: WeightGrid = WeightGrid::new(5, 5, 0);
//! grid.set_weight(2, 1, IMPASSABLE).unwrap();
//! grid.generate_components();
//!
//! let mut engine = Engine::new();
//! let request = RunRequest {
//!     grid: &grid,
//!     start: Point::new(0, 0),
//!     end: Point::new(4, 4),
//!     strategy: Strategy::Bfs,
//! };
//! let result = engine.run(&request).unwrap();
//! assert!(result.found);
//! assert_eq!(result.path_edges(), 8);
//! ```

pub mod engine;
pub mod error;
pub mod recorder;
pub mod search_tree;
pub mod solver;
pub mod weight_grid;

pub use engine::{Engine, RunRequest, RunResult};
pub use error::{Result, SearchError};
pub use recorder::{RunRecorder, TraceSample, DEFAULT_SAMPLE_INTERVAL};
pub use solver::{GridSolver, SearchRun, Strategy};
pub use weight_grid::WeightGrid;

/// Largest weight a cell can be explicitly assigned.
pub const MAX_WEIGHT: u8 = 100;

/// Sentinel weight marking a cell that no strategy may enter.
pub const IMPASSABLE: u8 = u8::MAX;

/// Inline capacity of neighbour buffers; a 4-connected cell has at most 4.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Fixed neighbour expansion order shared by all strategies: right, down,
/// left, up (`y` grows downwards). Keeping the order identical across
/// strategies makes traces and tie-breaking reproducible.
pub const NEIGHBOR_ORDER: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

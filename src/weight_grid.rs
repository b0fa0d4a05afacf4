use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{Result, SearchError};
use crate::{IMPASSABLE, MAX_WEIGHT, NEIGHBOR_ORDER, N_SMALLVEC_SIZE};

/// [WeightGrid] stores a per-cell traversal weight in a [SimpleGrid] of [u8]
/// values and maintains information about connected components of passable
/// cells using a [UnionFind] structure. A raw value of `0` means the cell was
/// never explicitly set and traverses at the default weight 1; [IMPASSABLE]
/// marks cells no strategy may enter. Implements [Grid] by building on
/// [SimpleGrid].
///
/// A grid is read-only to the strategies that search it; the caller must not
/// mutate it while a run using it is executing.
#[derive(Clone, Debug)]
pub struct WeightGrid {
    pub weights: SimpleGrid<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for WeightGrid {
    fn default() -> WeightGrid {
        WeightGrid {
            weights: SimpleGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl WeightGrid {
    /// The effective weight of a cell: `1` for cells never explicitly set,
    /// the stored value otherwise. Impassable cells report [IMPASSABLE].
    pub fn weight(&self, x: usize, y: usize) -> u8 {
        let w = self.weights.get(x, y);
        if w == 0 {
            1
        } else {
            w
        }
    }

    /// The cost of stepping *onto* `pos`, for weighted search. The caller
    /// must have checked passability first.
    pub fn traversal_cost(&self, pos: Point) -> i32 {
        self.weight(pos.x as usize, pos.y as usize) as i32
    }

    /// Total cost of following `path`, summing the entry cost of every cell
    /// after the first.
    pub fn path_cost(&self, path: &[Point]) -> i32 {
        path.iter().skip(1).map(|&p| self.traversal_cost(p)).sum()
    }

    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.weights.get(x, y) != IMPASSABLE
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && self.weights.get(pos.x as usize, pos.y as usize) != IMPASSABLE
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.weights.index_in_bounds(x as usize, y as usize)
    }

    /// The passable 4-neighbourhood of `pos` in the fixed expansion order
    /// right, down, left, up.
    pub fn passable_neighbors(&self, pos: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEIGHBOR_ORDER
            .iter()
            .map(|&(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|&n| self.can_move_to(n))
            .collect::<SmallVec<[Point; N_SMALLVEC_SIZE]>>()
    }

    /// Validated weight update. Fails with [SearchError::OutOfBounds] for an
    /// invalid cell and [SearchError::InvalidWeight] for a weight outside
    /// `1..=`[MAX_WEIGHT]; the [IMPASSABLE] sentinel bypasses the range
    /// check. Component bookkeeping happens in [Grid::set].
    pub fn set_weight(&mut self, x: usize, y: usize, weight: u8) -> Result<()> {
        if !self.weights.index_in_bounds(x, y) {
            return Err(SearchError::OutOfBounds { x, y });
        }
        if weight != IMPASSABLE && !(1..=MAX_WEIGHT).contains(&weight) {
            return Err(SearchError::InvalidWeight(weight));
        }
        self.set(x, y, weight);
        Ok(())
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.weights.width;
        let h = self.weights.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if self.is_passable(x, y) {
                    let parent_ix = self.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Linking right and down covers every edge once.
                    let neighbours = [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.can_move_to(*p))
                    .map(|p| self.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for WeightGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Weights (-1 is impassable):")?;
        for y in 0..self.weights.height {
            let values = (0..self.weights.width)
                .map(|x| {
                    if self.is_passable(x, y) {
                        self.weight(x, y) as i32
                    } else {
                        -1
                    }
                })
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<u8> for WeightGrid {
    fn new(width: usize, height: usize, default_value: u8) -> Self {
        WeightGrid {
            weights: SimpleGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> u8 {
        self.weights.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, value: u8) {
        let was_passable = self.weights.get(x, y) != IMPASSABLE;
        let passable = value != IMPASSABLE;
        self.weights.set(x, y, value);
        if was_passable && !passable {
            self.components_dirty = true;
        } else if passable {
            let p = Point::new(x as i32, y as i32);
            for n in self.passable_neighbors(p) {
                self.components.union(
                    self.get_ix(x, y),
                    self.get_ix(n.x as usize, n.y as usize),
                );
            }
        }
    }
    fn width(&self) -> usize {
        self.weights.width()
    }
    fn height(&self) -> usize {
        self.weights.height()
    }
}

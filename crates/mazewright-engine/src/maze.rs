//! Read-only view of a completed maze.

use mazewright_carve::Algorithm;
use mazewright_core::{bounds_of, CellId, Rect, WallFlags};
use mazewright_grid::{Cell, Grid};

use crate::metrics::RunMetrics;

/// A fully carved maze, published only after a successful run.
///
/// Every accessor reflects a consistent spanning tree: renderers can read
/// walls, coordinates, distances and markers without further checks.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    origin: CellId,
    terminus: Option<CellId>,
    algorithm: Algorithm,
    cell_size: u32,
    run_id: u64,
    metrics: RunMetrics,
}

impl Maze {
    pub(crate) fn new(
        grid: Grid,
        origin: CellId,
        terminus: Option<CellId>,
        algorithm: Algorithm,
        cell_size: u32,
        run_id: u64,
        metrics: RunMetrics,
    ) -> Self {
        Self {
            grid,
            origin,
            terminus,
            algorithm,
            cell_size,
            run_id,
            metrics,
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The start cell.
    pub fn origin(&self) -> &Cell {
        &self.grid.cells()[self.origin.0]
    }

    /// Id of the start cell.
    pub fn origin_id(&self) -> CellId {
        self.origin
    }

    /// The end cell. `None` when the algorithm does not choose one.
    pub fn terminus(&self) -> Option<&Cell> {
        self.terminus.and_then(|id| self.grid.cell(id))
    }

    /// Id of the end cell.
    pub fn terminus_id(&self) -> Option<CellId> {
        self.terminus
    }

    /// The cell at `(row, col)`, if in range.
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&Cell> {
        self.grid.cell_at(row, col)
    }

    /// The cell with the given id.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.grid.cell(id)
    }

    /// Wall flags of `id`.
    pub fn wall_flags(&self, id: CellId) -> Option<WallFlags> {
        self.grid.cell(id).map(Cell::walls)
    }

    /// Carve-order distance of `id` from the origin.
    ///
    /// Depth-first mazes assign every cell a distance; frontier mazes
    /// only assign the origin (0).
    pub fn distance(&self, id: CellId) -> Option<u32> {
        self.grid.cell(id).and_then(Cell::distance)
    }

    /// Pixel bounds of `id` at the request's cell size.
    pub fn bounds_of(&self, id: CellId) -> Option<Rect> {
        self.grid
            .cell(id)
            .map(|c| bounds_of(c.coord(), self.cell_size))
    }

    /// Pixel size of one cell.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Algorithm that carved this maze.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sequence number of the run that produced this maze.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Metrics of the run that produced this maze.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Take ownership of the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_carve::{FrontierOrder, NullSink};
    use mazewright_core::GridCoord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn maze(algorithm: Algorithm, width: u32, height: u32) -> Maze {
        let mut grid = Grid::new(width, height).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let outcome = algorithm
            .carver()
            .carve(&mut grid, &mut rng, &mut NullSink)
            .unwrap();
        Maze::new(
            grid,
            outcome.origin,
            outcome.terminus,
            algorithm,
            8,
            1,
            RunMetrics::default(),
        )
    }

    #[test]
    fn frontier_maze_has_no_terminus() {
        let m = maze(Algorithm::Frontier(FrontierOrder::Fifo), 4, 3);
        assert!(m.terminus().is_none());
        assert_eq!(m.terminus_id(), None);
        assert!(m.origin().is_origin());
        assert_eq!(m.distance(m.origin_id()), Some(0));
    }

    #[test]
    fn depth_first_terminus_is_the_exit() {
        let m = maze(Algorithm::DepthFirst, 4, 3);
        let exit = m.terminus().unwrap();
        assert!(exit.is_exit());
        assert_eq!(m.grid().exit(), m.terminus_id());
    }

    #[test]
    fn unknown_ids_yield_none() {
        let m = maze(Algorithm::DepthFirst, 2, 2);
        let outside = CellId(4);
        assert_eq!(m.cell(outside), None);
        assert_eq!(m.wall_flags(outside), None);
        assert_eq!(m.distance(outside), None);
        assert_eq!(m.bounds_of(outside), None);
        assert!(m.cell_at(2, 0).is_none());
    }

    #[test]
    fn accessors_read_through_to_the_grid() {
        let m = maze(Algorithm::DepthFirst, 3, 2);
        let id = CellId(5);
        assert_eq!(m.cell(id).unwrap().coord(), GridCoord::new(1, 2));
        assert_eq!(m.wall_flags(id), Some(m.grid().cell(id).unwrap().walls()));
        assert_eq!(
            m.bounds_of(id),
            Some(Rect {
                x: 16,
                y: 8,
                width: 8,
                height: 8
            })
        );
        assert_eq!((m.width(), m.height(), m.cell_size()), (3, 2, 8));
        assert_eq!(m.into_grid().cell_count(), 6);
    }
}

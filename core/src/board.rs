use ndarray::Array2;

use crate::*;

/// Grid of cells plus the counters derived from it.
///
/// Cell kinds are written once by [`seed_board`]; after that only statuses change, and only through
/// [`reveal::apply`](crate::reveal::apply), which refreshes the counters before returning.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    stats: BoardStats,
    seeded: bool,
}

impl Board {
    /// Validates the dimensions and builds a blank, unseeded board.
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> core::result::Result<Self, ConfigError> {
        GameConfig::new(rows, columns, mines).map(Self::from_config)
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self {
            cells: Array2::default(config.size().to_nd_index()),
            mine_count: config.mines,
            stats: BoardStats::default(),
            seeded: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        (self.rows(), self.columns())
    }

    pub fn rows(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn columns(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.columns())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.stats.revealed
    }

    /// Everything not yet revealed, marked cells included.
    pub fn hidden_count(&self) -> CellCount {
        self.total_cells() - self.stats.revealed
    }

    pub fn flagged_count(&self) -> CellCount {
        self.stats.flagged
    }

    pub fn doubted_count(&self) -> CellCount {
        self.stats.doubted
    }

    pub fn revealed_mine_count(&self) -> CellCount {
        self.stats.revealed_mines
    }

    pub fn stats(&self) -> BoardStats {
        self.stats
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, columns) = self.size();
        if coords.0 < rows && coords.1 < columns {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                column: coords.1,
            })
        }
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Row-major iteration over every cell with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, column), &cell)| ((row as Coord, column as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Mines among the in-bounds neighbors of `coords`, read from the cell kinds.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].kind().is_mine())
            .count() as u8
    }

    pub(crate) fn grid(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn set_stats(&mut self, stats: BoardStats) {
        self.stats = stats;
    }

    pub(crate) fn mark_seeded(&mut self) {
        self.seeded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_blank_and_hidden() {
        let board = Board::new(3, 4, 2).unwrap();

        assert_eq!(board.size(), (3, 4));
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.hidden_count(), 12);
        assert_eq!(board.revealed_count(), 0);
        assert!(!board.is_seeded());
        assert!(board.cells().all(|(_, cell)| cell == Cell::default()));
    }

    #[test]
    fn new_board_rejects_bad_config() {
        assert_eq!(
            Board::new(1, 4, 1),
            Err(ConfigError::Rows {
                value: 1,
                min: MIN_SIDE,
                max: MAX_SIDE,
            })
        );
    }

    #[test]
    fn validate_coords_reports_position() {
        let board = Board::new(2, 3, 1).unwrap();

        assert_eq!(board.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(
            board.validate_coords((2, 0)),
            Err(GameError::OutOfBounds { row: 2, column: 0 })
        );
        assert_eq!(board.cell_at((0, 3)), None);
    }

    #[test]
    fn cells_iterate_row_major() {
        let board = Board::new(2, 2, 1).unwrap();
        let coords: alloc::vec::Vec<_> = board.cells().map(|(pos, _)| pos).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}

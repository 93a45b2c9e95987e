use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Counters derived from cell statuses. `hidden` is not stored, see [`Board::hidden_count`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub revealed: CellCount,
    pub flagged: CellCount,
    pub doubted: CellCount,
    pub revealed_mines: CellCount,
}

impl BoardStats {
    /// Full scan over every cell.
    pub fn from_cells(cells: &Array2<Cell>) -> Self {
        let mut stats = Self::default();
        for cell in cells.iter() {
            match cell.status() {
                CellStatus::Revealed => {
                    stats.revealed += 1;
                    if cell.kind().is_mine() {
                        stats.revealed_mines += 1;
                    }
                }
                CellStatus::Flagged => stats.flagged += 1,
                CellStatus::Doubted => stats.doubted += 1,
                CellStatus::Hidden => {}
            }
        }
        stats
    }
}

/// Rebuilds the board counters from scratch, once per completed action.
pub(crate) fn recompute(board: &mut Board) {
    let stats = BoardStats::from_cells(board.grid());
    log::trace!("recomputed stats: {:?}", stats);
    board.set_stats(stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_status_once() {
        let mut cells: Array2<Cell> = Array2::default([2, 2]);
        cells[[0, 0]].set_status(CellStatus::Revealed);
        cells[[0, 1]].set_kind(CellKind::Mine);
        cells[[0, 1]].set_status(CellStatus::Revealed);
        cells[[1, 0]].set_status(CellStatus::Flagged);
        cells[[1, 1]].set_status(CellStatus::Doubted);

        let stats = BoardStats::from_cells(&cells);

        assert_eq!(
            stats,
            BoardStats {
                revealed: 2,
                flagged: 1,
                doubted: 1,
                revealed_mines: 1,
            }
        );
    }
}

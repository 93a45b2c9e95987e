use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Chooses where the mines go for a given configuration.
pub trait MineDistributor {
    fn distribute(self, config: GameConfig) -> Result<MineLayout>;
}

/// Mine positions only, before any hints are derived.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds {
                    row: coords.0,
                    column: coords.1,
                });
            }
            layout.place_mine(coords);
        }

        Ok(layout)
    }

    /// Marks `coords` as a mine, returns `false` if it already was one.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.mine_count += 1;
        true
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.mine_mask.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Places mines at a fixed set of positions, used for scripted boards.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineDistributor {
    mines: Vec<Coord2>,
}

impl FixedMineDistributor {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MineDistributor for FixedMineDistributor {
    fn distribute(self, config: GameConfig) -> Result<MineLayout> {
        MineLayout::from_mine_coords(config.size(), &self.mines)
    }
}

/// Runs `distributor` against `board` and freezes every cell kind.
///
/// Must happen exactly once per board and before any action is applied.
pub fn seed_board(board: &mut Board, distributor: impl MineDistributor) -> Result<()> {
    if board.is_seeded() {
        return Err(GameError::AlreadySeeded);
    }

    let config = board.config();
    let layout = distributor.distribute(config)?;
    if layout.size() != config.size() || layout.mine_count() != config.mines {
        log::warn!(
            "Mine layout mismatch, layout: {:?} with {} mines, board: {:?} with {} mines",
            layout.size(),
            layout.mine_count(),
            config.size(),
            config.mines
        );
        return Err(GameError::InvalidLayout);
    }

    // hint pass
    let (rows, columns) = config.size();
    for row in 0..rows {
        for column in 0..columns {
            let coords = (row, column);
            let kind = if layout.contains_mine(coords) {
                CellKind::Mine
            } else {
                CellKind::from_adjacent_mines(layout.adjacent_mine_count(coords))
            };
            board.cell_mut(coords).set_kind(kind);
        }
    }

    board.mark_seeded();
    crate::stats::recompute(board);
    log::debug!("seeded {}x{} board with {} mines", rows, columns, config.mines);
    Ok(())
}

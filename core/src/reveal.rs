//! Applies a single player action to a [`Board`], including the cascading reveal of blank regions.

use alloc::vec::Vec;

use crate::*;

/// Moves the cell at `coords` to `target`.
///
/// Fails without touching the board when `coords` is outside it or the cell is already revealed. Revealing a blank
/// cell also reveals its whole 8-connected blank region and the numbered cells bordering it. Counters are refreshed
/// before returning.
pub fn apply(board: &mut Board, coords: Coord2, target: CellStatus) -> Result<ActionOutcome> {
    let coords = board.validate_coords(coords)?;
    if !board.is_seeded() {
        return Err(GameError::NotSeeded);
    }

    let cell = board.cell_mut(coords);
    if cell.status().is_revealed() {
        return Err(GameError::AlreadyRevealed {
            row: coords.0,
            column: coords.1,
        });
    }

    log::trace!("{:?}: {:?} -> {:?}", coords, cell.status(), target);
    cell.set_status(target);
    let kind = cell.kind();

    let outcome = if target.is_revealed() {
        let mut revealed = 1;
        if kind.is_blank() {
            revealed += flood_fill(board, coords);
        }
        ActionOutcome::Revealed(revealed)
    } else {
        ActionOutcome::Marked
    };

    crate::stats::recompute(board);
    Ok(outcome)
}

/// Reveals everything reachable from the already revealed blank cell at `origin`, returning how many cells changed.
///
/// Cells are revealed and queued under the same check, so each cell enters the worklist at most once and the
/// worklist never holds more than `total_cells` entries. Marks inside the region are overridden.
fn flood_fill(board: &mut Board, origin: Coord2) -> CellCount {
    let capacity = board.total_cells() as usize;
    let mut worklist = Vec::new();
    worklist.push(origin);
    let mut revealed: CellCount = 0;

    while let Some(coords) = worklist.pop() {
        for neighbor in board.iter_neighbors(coords) {
            let cell = board.cell_mut(neighbor);
            if cell.status().is_revealed() {
                continue;
            }

            cell.set_status(CellStatus::Revealed);
            revealed += 1;

            // numbers border the region, only blanks keep it growing
            if cell.kind().is_blank() {
                debug_assert!(worklist.len() < capacity);
                worklist.push(neighbor);
            }
        }
    }

    log::debug!("cascade from {:?} revealed {} cells", origin, revealed);
    revealed
}

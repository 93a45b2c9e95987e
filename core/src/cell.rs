use serde::{Deserialize, Serialize};

/// What a cell holds. Assigned once when mines are placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Blank,
    /// Adjacent mine count, always in `1..=8`.
    Number(u8),
    Mine,
}

impl CellKind {
    /// Hint for a safe cell with `count` adjacent mines.
    pub const fn from_adjacent_mines(count: u8) -> Self {
        if count == 0 {
            Self::Blank
        } else {
            Self::Number(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Player-visible state of a cell.
///
/// `Hidden`, `Flagged` and `Doubted` can move freely between each other or to `Revealed`, which is final.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    Flagged,
    Doubted,
    Revealed,
}

impl CellStatus {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    status: CellStatus,
}

impl Cell {
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn status(self) -> CellStatus {
        self.status
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }
}

/// A player move, each one mapping to the status it leaves the target cell in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    Flag,
    Doubt,
    ClearMark,
}

impl Action {
    pub const fn target_status(self) -> CellStatus {
        match self {
            Self::Reveal => CellStatus::Revealed,
            Self::Flag => CellStatus::Flagged,
            Self::Doubt => CellStatus::Doubted,
            Self::ClearMark => CellStatus::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_adjacent_mines_is_blank() {
        assert_eq!(CellKind::from_adjacent_mines(0), CellKind::Blank);
        assert_eq!(CellKind::from_adjacent_mines(3), CellKind::Number(3));
    }

    #[test]
    fn clear_mark_returns_to_hidden() {
        assert_eq!(Action::ClearMark.target_status(), CellStatus::Hidden);
        assert!(Action::Reveal.target_status().is_revealed());
    }
}

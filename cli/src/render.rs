use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{Clear, ClearType};
use sweeper_core::*;

pub(crate) const HELP: &str = "\
Move format:
    <row> <column> <directive>      (numbering starts at 1)
Directives:
    V   reveal a hidden cell
    F   flag a hidden cell as a certain mine
    ?   mark a hidden cell as a possible mine
    #   clear any mark from a hidden cell
Other commands:
    h   show this help
    q   quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Style {
    pub color: bool,
}

pub(crate) fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Board with 1-based headers. `show_mines` uncovers every mine, used once the game is over.
pub(crate) fn write_board(
    out: &mut impl Write,
    board: &Board,
    show_mines: bool,
    style: Style,
) -> io::Result<()> {
    let (rows, columns) = board.size();
    let row_width = digits(rows);
    let cell_width = digits(columns) + 1;

    write!(out, "{:row_width$} ", "")?;
    for column in 1..=columns {
        write!(out, "{column:>cell_width$}")?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, "{:>row_width$} ", row + 1)?;
        for column in 0..columns {
            let Some(cell) = board.cell_at((row, column)) else {
                continue;
            };
            let (glyph, color) = glyph(cell, show_mines);
            write!(out, "{:>pad$}", "", pad = cell_width - 1)?;
            match color {
                Some(color) if style.color => write!(out, "{}", style_glyph(glyph, color))?,
                _ => write!(out, "{glyph}")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub(crate) fn write_stats(out: &mut impl Write, game: &GameController) -> io::Result<()> {
    let board = game.board();
    writeln!(out, "-- Statistics --")?;
    writeln!(
        out,
        "Rows: {:<8} Columns: {:<8} Cells: {:<8} Mines: {:<8}",
        board.rows(),
        board.columns(),
        board.total_cells(),
        board.mine_count()
    )?;
    writeln!(
        out,
        "Revealed: {:<8} Hidden: {:<8} Flags: {:<8} Doubts: {:<8}",
        board.revealed_count(),
        board.hidden_count(),
        board.flagged_count(),
        board.doubted_count()
    )?;
    writeln!(out, "Mines left: {}", game.remaining_mines())
}

pub(crate) fn write_banner(out: &mut impl Write, game: &GameController, style: Style) -> io::Result<()> {
    let (text, color) = match game.state() {
        GameState::Won => ("You cleared every mine, you win!", Color::Green),
        GameState::Lost => ("You stepped on a mine, game over.", Color::Red),
        GameState::Configuring | GameState::InProgress => ("Game abandoned.", Color::Yellow),
    };
    if style.color {
        writeln!(out, "{}", text.with(color).bold())
    } else {
        writeln!(out, "{text}")
    }
}

/// Player-facing description of a rejected move, in 1-based numbering.
pub(crate) fn describe_error(error: GameError) -> String {
    match error {
        GameError::OutOfBounds { row, column } => {
            format!("There is no cell at row {}, column {}", u32::from(row) + 1, u32::from(column) + 1)
        }
        GameError::AlreadyRevealed { row, column } => format!(
            "The cell at row {}, column {} is already revealed",
            u32::from(row) + 1,
            u32::from(column) + 1
        ),
        other => other.to_string(),
    }
}

fn glyph(cell: Cell, show_mines: bool) -> (char, Option<Color>) {
    match (cell.status(), cell.kind()) {
        (CellStatus::Revealed, CellKind::Blank) => (' ', None),
        (CellStatus::Revealed, CellKind::Number(count)) => {
            let digit = char::from_digit(count.into(), 10).unwrap_or('?');
            (digit, Some(number_color(count)))
        }
        (CellStatus::Revealed, CellKind::Mine) => ('*', Some(Color::Red)),
        (_, CellKind::Mine) if show_mines => ('*', Some(Color::DarkRed)),
        (CellStatus::Flagged, _) => ('F', Some(Color::Yellow)),
        (CellStatus::Doubted, _) => ('?', Some(Color::Magenta)),
        (CellStatus::Hidden, _) => ('■', Some(Color::DarkGrey)),
    }
}

fn number_color(count: u8) -> Color {
    match count {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::DarkBlue,
        5 => Color::DarkRed,
        6 => Color::Cyan,
        7 => Color::White,
        _ => Color::Grey,
    }
}

fn style_glyph(glyph: char, color: Color) -> impl std::fmt::Display {
    style(glyph).with(color)
}

fn digits(value: Coord) -> usize {
    value.to_string().len()
}

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Result, bail};
use sweeper_core::*;

/// Menu number for each difficulty, custom last as `0`.
const MENU: [(u8, Difficulty); 4] = [
    (1, Difficulty::Beginner),
    (2, Difficulty::Intermediate),
    (3, Difficulty::Expert),
    (0, Difficulty::Custom),
];

pub(crate) fn choose_config(input: &mut impl BufRead, out: &mut impl Write) -> Result<GameConfig> {
    let difficulty = ask_difficulty(input, out)?;
    config_for(difficulty, input, out)
}

/// Preset configuration, or the custom dialog when there is none.
pub(crate) fn config_for(
    difficulty: Difficulty,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<GameConfig> {
    match difficulty.preset() {
        Some(config) => Ok(config),
        None => ask_custom(input, out),
    }
}

pub(crate) fn ask_difficulty(input: &mut impl BufRead, out: &mut impl Write) -> Result<Difficulty> {
    writeln!(out, "Choose a difficulty:")?;
    for (number, difficulty) in MENU {
        match difficulty.preset() {
            Some(config) => writeln!(
                out,
                "  {number}. {difficulty:?} ({} rows x {} columns, {} mines)",
                config.rows(),
                config.columns(),
                config.mines
            )?,
            None => writeln!(out, "  {number}. {difficulty:?}")?,
        }
    }

    let number: u8 = prompt(input, out, "Difficulty", 0..=3)?;
    let difficulty = MENU
        .iter()
        .find(|(n, _)| *n == number)
        .map(|&(_, difficulty)| difficulty)
        .unwrap_or(Difficulty::Custom);
    log::debug!("difficulty: {:?}", difficulty);
    Ok(difficulty)
}

pub(crate) fn ask_custom(input: &mut impl BufRead, out: &mut impl Write) -> Result<GameConfig> {
    let rows: Coord = prompt(input, out, "Rows", MIN_SIDE..=MAX_SIDE)?;
    let columns: Coord = prompt(input, out, "Columns", MIN_SIDE..=MAX_SIDE)?;
    let (min, max) = mine_bounds(rows, columns);
    let mines: CellCount = prompt(input, out, "Mines", min..=max)?;

    Ok(GameConfig::new(rows, columns, mines)?)
}

/// Asks until the answer parses and lies in `range`.
fn prompt<T>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    range: RangeInclusive<T>,
) -> Result<T>
where
    T: FromStr + PartialOrd + Display,
{
    let mut line = String::new();
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for {}", label.to_lowercase());
        }

        match line.trim().parse::<T>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            _ => writeln!(
                out,
                "{label} must be between {} and {}",
                range.start(),
                range.end()
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T>(script: &str, f: impl FnOnce(&mut Cursor<Vec<u8>>, &mut Vec<u8>) -> T) -> (T, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = f(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn preset_is_picked_by_number() {
        let (config, _) = run("3\n", |input, out| choose_config(input, out));

        assert_eq!(config.unwrap(), Difficulty::Expert.preset().unwrap());
    }

    #[test]
    fn custom_board_reprompts_until_valid() {
        let (config, output) = run("0\n1\n5\nabc\n6\n100\n3\n", |input, out| {
            choose_config(input, out)
        });

        assert_eq!(config.unwrap(), GameConfig::new(5, 6, 3).unwrap());
        assert!(output.contains("Rows must be between 2 and 32767"));
        assert!(output.contains("Columns must be between 2 and 32767"));
        assert!(output.contains("Mines must be between 1 and 27"));
    }

    #[test]
    fn difficulty_out_of_range_is_asked_again() {
        let (difficulty, output) = run("7\n2\n", |input, out| ask_difficulty(input, out));

        assert_eq!(difficulty.unwrap(), Difficulty::Intermediate);
        assert!(output.contains("Difficulty must be between 0 and 3"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (config, _) = run("0\n9\n", |input, out| choose_config(input, out));

        assert!(config.is_err());
    }
}

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sweeper_core::*;

use command::Command;
use render::Style;

mod command;
mod menu;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Level {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Difficulty::Beginner,
            Level::Intermediate => Difficulty::Intermediate,
            Level::Expert => Difficulty::Expert,
            Level::Custom => Difficulty::Custom,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, asked interactively when neither this nor a custom size is given
    #[arg(short, long, value_enum)]
    difficulty: Option<Level>,

    /// Row count of a custom board
    #[arg(long, requires_all = ["columns", "mines"], conflicts_with = "difficulty")]
    rows: Option<Coord>,

    /// Column count of a custom board
    #[arg(long, requires_all = ["rows", "mines"], conflicts_with = "difficulty")]
    columns: Option<Coord>,

    /// Mine count of a custom board
    #[arg(long, requires_all = ["rows", "columns"], conflicts_with = "difficulty")]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Plain output without colors
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn config(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<GameConfig> {
        if let (Some(rows), Some(columns), Some(mines)) = (self.rows, self.columns, self.mines) {
            return GameConfig::new(rows, columns, mines).context("Invalid custom board");
        }
        match self.difficulty {
            Some(level) => menu::config_for(level.into(), input, out),
            None => menu::choose_config(input, out),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let style = Style {
        color: !args.no_color,
    };

    let config = args.config(&mut input, &mut out)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting {:?} with seed {}", config, seed);

    let mut game = GameController::new(config);
    game.seed_mines(&mut SmallRng::seed_from_u64(seed))?;

    play(&mut game, &mut input, &mut out, style)?;

    render::clear_screen(&mut out)?;
    render::write_banner(&mut out, &game, style)?;
    writeln!(out)?;
    render::write_board(&mut out, game.board(), true, style)?;
    out.flush()?;
    Ok(())
}

/// Turn loop, returns once the game is finished, the player quits or input runs out.
fn play(
    game: &mut GameController,
    input: &mut impl BufRead,
    out: &mut impl Write,
    style: Style,
) -> Result<()> {
    let mut message: Option<String> = None;
    let mut line = String::new();

    while !game.is_finished() {
        render::clear_screen(out)?;
        render::write_board(out, game.board(), false, style)?;
        writeln!(out)?;
        render::write_stats(out, game)?;
        writeln!(out)?;
        writeln!(out, "{}", render::HELP)?;
        if let Some(message) = message.take() {
            writeln!(out, "{message}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            log::debug!("input closed");
            return Ok(());
        }

        match command::parse(&line) {
            Ok(Command::Move { coords, action }) => match game.apply(coords, action) {
                Ok(outcome) => log::debug!("{:?} at {:?}: {:?}", action, coords, outcome),
                Err(err) => message = Some(render::describe_error(err)),
            },
            Ok(Command::Help) => message = Some(render::HELP.to_string()),
            Ok(Command::Quit) => return Ok(()),
            Err(err) => message = Some(err.to_string()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn custom_size_flags_skip_the_menu() {
        let args = Args::parse_from(["sweeper", "--rows", "5", "--columns", "6", "--mines", "3"]);
        let mut input = Cursor::new(Vec::<u8>::new());

        let config = args.config(&mut input, &mut Vec::<u8>::new()).unwrap();

        assert_eq!(config, GameConfig::new(5, 6, 3).unwrap());
    }

    #[test]
    fn invalid_custom_size_is_reported() {
        let args = Args::parse_from(["sweeper", "--rows", "1", "--columns", "6", "--mines", "3"]);
        let mut input = Cursor::new(Vec::<u8>::new());

        assert!(args.config(&mut input, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn difficulty_conflicts_with_custom_size() {
        let result = Args::try_parse_from(["sweeper", "-d", "expert", "--rows", "5", "--columns", "6", "--mines", "3"]);

        assert!(result.is_err());
    }

    #[test]
    fn scripted_game_is_won() {
        let mut game = GameController::new(GameConfig::new(3, 3, 1).unwrap());
        game.seed_with(FixedMineDistributor::new(&[(2, 2)])).unwrap();
        let mut input = Cursor::new(b"3 3 F\n9 9 V\n1 1 V\n".to_vec());
        let mut out = Vec::new();

        play(&mut game, &mut input, &mut out, Style { color: false }).unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.board().flagged_count(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("There is no cell at row 9, column 9"));
    }

    #[test]
    fn quitting_leaves_game_in_progress() {
        let mut game = GameController::new(GameConfig::new(3, 3, 1).unwrap());
        game.seed_with(FixedMineDistributor::new(&[(2, 2)])).unwrap();
        let mut input = Cursor::new(b"2 2 V\nq\n1 1 V\n".to_vec());
        let mut out = Vec::new();

        play(&mut game, &mut input, &mut out, Style { color: false }).unwrap();

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.board().revealed_count(), 1);
    }
}

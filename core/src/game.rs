use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Configuring -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Board exists but has no mines yet
    #[default]
    Configuring,
    /// Mines placed, actions are accepted
    InProgress,
    /// Every safe cell was revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One match: owns the board and decides when it is over.
#[derive(Clone, Debug, PartialEq)]
pub struct GameController {
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::from_config(config),
            state: GameState::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mines not accounted for by flags, negative when over-flagged.
    pub fn remaining_mines(&self) -> i64 {
        i64::from(self.board.mine_count()) - i64::from(self.board.flagged_count())
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Places mines uniformly at random using `rng`.
    pub fn seed_mines<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.seed_with(RandomMineDistributor::new(rng))
    }

    pub fn seed_with(&mut self, distributor: impl MineDistributor) -> Result<()> {
        if self.state != GameState::Configuring {
            return Err(GameError::AlreadySeeded);
        }
        seed_board(&mut self.board, distributor)?;
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Applies `action` at `coords`, then checks whether the match ended.
    pub fn apply(&mut self, coords: Coord2, action: Action) -> Result<ActionOutcome> {
        match self.state {
            GameState::Configuring => return Err(GameError::NotSeeded),
            GameState::Won | GameState::Lost => {
                log::warn!("{:?} at {:?} ignored, game is {:?}", action, coords, self.state);
                return Err(GameError::AlreadyEnded);
            }
            GameState::InProgress => {}
        }

        let outcome = reveal::apply(&mut self.board, coords, action.target_status())?;
        Ok(self.evaluate(coords, outcome))
    }

    fn evaluate(&mut self, coords: Coord2, outcome: ActionOutcome) -> ActionOutcome {
        // loss takes precedence
        if self.board.revealed_mine_count() > 0 {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            ActionOutcome::HitMine
        } else if self.board.hidden_count() == self.board.mine_count() {
            self.end_game(true);
            ActionOutcome::Won
        } else {
            outcome
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("game over: {:?}", self.state);
    }
}

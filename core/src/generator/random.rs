use rand::Rng;

use super::*;

/// Uniform placement by rejection sampling: draw a random cell, redraw if it already holds a mine.
///
/// The random source is injected so a seeded generator reproduces the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineDistributor<R> {
    rng: R,
}

impl<R: Rng> RandomMineDistributor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineDistributor for RandomMineDistributor<R> {
    fn distribute(mut self, config: GameConfig) -> Result<MineLayout> {
        let total_cells = config.total_cells();

        // every draw must eventually find a free cell
        if config.mines == 0 || config.mines >= total_cells {
            return Err(ConfigError::Mines {
                value: config.mines,
                min: 1,
                max: total_cells.saturating_sub(1),
            }
            .into());
        }

        let (rows, columns) = config.size();
        let mut layout = MineLayout::empty(config.size());
        let mut draws: u64 = 0;
        while layout.mine_count() < config.mines {
            let coords = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..columns),
            );
            draws += 1;
            layout.place_mine(coords);
        }

        log::debug!(
            "placed {} mines in {} draws on {}x{}",
            layout.mine_count(),
            draws,
            rows,
            columns
        );
        Ok(layout)
    }
}

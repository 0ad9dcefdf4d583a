use crate::{Grid, Result};

/// Settings the driver starts a field from.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Live cells seeded into the blank field.
    pub initial_lives: usize,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
    pub generations: u64,
}

impl Config {
    pub const WIDTH: usize = 80;
    pub const HEIGHT: usize = 40;
    pub const INITIAL_LIVES: usize = 800;
    pub const GENERATIONS: u64 = 100;
    pub const LOG_FILTER: &'static str = "conway_grid=info";

    /// Blank field of the configured size with `initial_lives` random cells.
    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::try_blank(self.width, self.height)?;
        grid.seed_random_life_from(self.initial_lives, self.seed)?;
        Ok(grid)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            initial_lives: Self::INITIAL_LIVES,
            seed: None,
            generations: Self::GENERATIONS,
        }
    }
}

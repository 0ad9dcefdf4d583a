use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::{Error, NeighborOffsets, Result};

/// Bounded Game of Life field.
///
/// Cells are stored row-major, `(x, y)` lives at `x + y * width`.
/// Edges are hard: cells outside of the field are never counted.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
}

impl Grid {
    /// Creates a blank `width x height` field.
    ///
    /// Panics if `width * height` overflows `usize`, see [`Grid::try_blank`].
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_blank(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a blank `width x height` field, rejecting sizes whose cell count overflows.
    pub fn try_blank(width: usize, height: usize) -> Result<Self> {
        let Some(size) = width.checked_mul(height) else {
            return Err(Error::InvalidArgument(format!(
                "field size is too large: {}x{}",
                width, height
            )));
        };
        debug!(width, height, "created blank field");
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            generation: 0,
        })
    }

    /// Same as [`Grid::try_blank`] for signed input, rejecting negative dimensions.
    pub fn try_new(width: i64, height: i64) -> Result<Self> {
        let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(Error::InvalidArgument(format!(
                "field size cannot be negative: {}x{}",
                width, height
            )));
        };
        Self::try_blank(w, h)
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of steps made since creation or the last [`Grid::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `OutOfRange` outside of the field.
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool> {
        let idx = self.index(x, y)?;
        Ok(self.cells_curr[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells_curr[idx] = state;
        Ok(())
    }

    /// Flips the cell, `OutOfRange` outside of the field.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells_curr[idx] = !self.cells_curr[idx];
        Ok(())
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
        self.generation = 0;
        debug!("field cleared");
    }

    pub fn total_alive(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    /// Brings exactly `count` dead cells to life, picked uniformly with `rng`.
    ///
    /// Fails without touching the field if there are fewer than `count` dead cells.
    pub fn seed_random_life<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        let alive = self.total_alive();
        let dead = self.cells_curr.len() - alive;
        if count > dead {
            return Err(Error::InvalidArgument(format!(
                "cannot add {} lives, only {} dead cells left",
                count, dead
            )));
        }

        let mut remaining = count;
        while remaining > 0 {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            let idx = x + y * self.width;
            if !self.cells_curr[idx] {
                self.cells_curr[idx] = true;
                remaining -= 1;
            }
        }
        debug!(count, population = alive + count, "seeded random life");
        Ok(())
    }

    /// [`Grid::seed_random_life`] with a ChaCha generator.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn seed_random_life_from(&mut self, count: usize, seed: Option<u64>) -> Result<()> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        self.seed_random_life(count, &mut rng)
    }

    pub fn live_neighbor_count(&self, x: usize, y: usize) -> Result<usize> {
        self.index(x, y)?;
        let count = NeighborOffsets::all(x, y, self.width, self.height)
            .into_iter()
            .filter(|&(dx, dy)| {
                let (nx, ny) = (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy));
                self.cells_curr[nx + ny * self.width]
            })
            .count();
        Ok(count)
    }

    /// Live neighbor counts of every cell, row-major.
    ///
    /// Each live cell adds one to all of its in-bounds neighbors.
    pub fn neighbor_counts(&self) -> Vec<u8> {
        let mut counts = vec![0u8; self.cells_curr.len()];
        for (x, y) in self.live_cells() {
            for (dx, dy) in NeighborOffsets::all(x, y, self.width, self.height) {
                let (nx, ny) = (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy));
                counts[nx + ny * self.width] += 1;
            }
        }
        counts
    }

    /// Advances the field by one generation (B3/S23).
    pub fn step(&mut self) {
        let counts = self.neighbor_counts();
        for ((next, &curr), &neibs) in self
            .cells_next
            .iter_mut()
            .zip(self.cells_curr.iter())
            .zip(counts.iter())
        {
            *next = if curr {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.total_alive(),
            "step"
        );
    }

    /// All coordinates of the field, see [`every_cell`].
    pub fn every_cell(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        every_cell(self.width, self.height)
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.every_cell()
            .filter(move |&(x, y)| self.cells_curr[x + y * self.width])
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Grids are equal when they have the same size and the same live cells.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.cells_curr == other.cells_curr
    }
}

impl Eq for Grid {}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            let line = (0..self.width)
                .map(|x| if self.cells_curr[x + y * self.width] { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Every `(x, y)` of a `width x height` field, `y` outer and `x` inner.
pub fn every_cell(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> + Clone {
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

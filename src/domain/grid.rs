use rand::Rng;

use super::Cell;
use crate::error::Error;

/// GridState owns the cell matrix and the Life update rule.
///
/// Two equally-sized buffers back the grid: `current` holds the displayed
/// generation and takes all writes, `snapshot` is refreshed from `current`
/// at the start of every step and is the only source for neighbor counts
/// during that step. Dimensions are fixed at construction.
///
/// Topology is toroidal: coordinates wrap modulo width/height for counting,
/// and every cell, edges included, is updated each step.
pub struct GridState {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    snapshot: Vec<Cell>,
}

impl GridState {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            current: vec![Cell::Dead; width * height],
            snapshot: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index (row-major)
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell from the current generation (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.current[self.index(x, y)])
    }

    /// Get cell from the snapshot taken at the start of the last step
    pub fn snapshot_cell(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.snapshot[self.index(x, y)])
    }

    /// Set cell in the current generation. Out-of-range coordinates are a
    /// no-op; pointer events near the window edge land here legitimately.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.current[idx] = cell;
        }
    }

    /// Set each cell independently alive or dead with probability 1/2,
    /// drawn from the injected random source.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.current {
            *cell = if rng.random() { Cell::Alive } else { Cell::Dead };
        }
    }

    /// Advance the grid one generation: copy `current` into `snapshot`,
    /// then rewrite every cell of `current` from snapshot-only neighbor
    /// counts. The snapshot is never written mid-pass, so no cell sees a
    /// half-advanced neighborhood.
    pub fn step(&mut self) {
        self.snapshot.copy_from_slice(&self.current);

        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.live_neighbors(x, y);
                let idx = self.index(x, y);
                self.current[idx] = self.snapshot[idx].next_state(neighbors);
            }
        }
    }

    /// Count live neighbors in the snapshot, wrapping toroidally
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as i32;
        let h = self.height as i32;
        let mut count = 0;

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = ((x as i32 + dx) % w + w) % w;
                let ny = ((y as i32 + dy) % h + h) % h;
                if self.snapshot[self.index(nx as usize, ny as usize)].is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over the current generation with positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.current[self.index(x, y)]))
    }
}

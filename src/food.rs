//! Food placement
//!
//! Food always lands on a cell the snake does not occupy. Random sampling is
//! bounded; once the attempts run out a row-major scan picks the first free
//! cell, so placement terminates even when the board is nearly full.

use crate::grid::{Cell, Grid};
use crate::render::{Drawable, RenderSink};
use rand::Rng;
use sdl2::pixels::Color;
use std::collections::HashSet;

/// Random attempts per grid cell before falling back to a scan
const SAMPLES_PER_CELL: usize = 4;

#[derive(Debug, Clone)]
pub struct Food {
    pub position: Cell,
    color: Color,
}

impl Food {
    /// Place new food on a random free cell.
    ///
    /// Returns `None` if the snake covers the entire grid.
    pub fn spawn<R: Rng>(grid: Grid, color: Color, occupied: &HashSet<Cell>, rng: &mut R) -> Option<Self> {
        let position = Self::randomize_position(grid, occupied, rng)?;
        Some(Food { position, color })
    }

    /// Pick a uniformly random cell of `grid` that is not in `occupied`.
    ///
    /// Returns `None` only when every cell of the grid is occupied.
    pub fn randomize_position<R: Rng>(grid: Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Option<Cell> {
        let cell_count = grid.cell_count();
        let occupied_in_grid = occupied.iter().filter(|c| grid.contains(**c)).count();
        if occupied_in_grid >= cell_count {
            return None;
        }

        for _ in 0..cell_count.saturating_mul(SAMPLES_PER_CELL) {
            let candidate = Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
            if !occupied.contains(&candidate) {
                return Some(candidate);
            }
        }

        log::debug!("Random food placement exhausted, scanning for a free cell");
        grid.cells().find(|cell| !occupied.contains(cell))
    }
}

impl Drawable for Food {
    fn draw(&self, sink: &mut dyn RenderSink) -> Result<(), String> {
        sink.draw_cell(self.position, self.color)
    }
}

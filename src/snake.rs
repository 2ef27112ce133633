//! The player-controlled snake
//!
//! Positions are stored head first. Growth is deferred: `grow()` only raises
//! the target length, and `advance()` stops trimming the tail until the body
//! has caught up with it.

use crate::grid::{Cell, Direction, Grid};
use crate::render::{Drawable, RenderSink};
use sdl2::pixels::Color;
use std::collections::{HashSet, VecDeque};

const START_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone)]
pub struct Snake {
    grid: Grid,
    positions: VecDeque<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    target_length: usize,
    last_removed: Option<Cell>,
    color: Color,
}

impl Snake {
    /// A length-one snake in the middle of the grid, heading right
    pub fn new(grid: Grid, color: Color) -> Self {
        Self::with_body(grid, grid.center(), Vec::new(), START_DIRECTION, color)
    }

    /// Build a snake from an explicit body. The head is passed separately so
    /// the body can never be empty; `tail` follows it in order.
    pub fn with_body(
        grid: Grid,
        head: Cell,
        tail: Vec<Cell>,
        direction: Direction,
        color: Color,
    ) -> Self {
        let mut positions = VecDeque::with_capacity(tail.len() + 1);
        positions.push_back(head);
        positions.extend(tail);

        Snake {
            grid,
            target_length: positions.len(),
            positions,
            direction,
            next_direction: None,
            last_removed: None,
            color,
        }
    }

    /// Queue a turn for the next tick. A 180-degree turn is silently ignored.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = Some(direction);
        }
    }

    pub fn apply_queued_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Move one cell, wrapping at the edges
    pub fn advance(&mut self) {
        let new_head = self.grid.step(self.head_cell(), self.direction);
        self.positions.push_front(new_head);

        self.last_removed = if self.positions.len() > self.target_length {
            self.positions.pop_back()
        } else {
            None
        };
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn head_cell(&self) -> Cell {
        self.positions[0]
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head_cell();
        self.positions.iter().skip(1).any(|&cell| cell == head)
    }

    pub fn reset(&mut self) {
        self.positions.clear();
        self.positions.push_back(self.grid.center());
        self.target_length = 1;
        self.direction = START_DIRECTION;
        self.next_direction = None;
        self.last_removed = None;
    }

    pub fn positions(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.positions.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Tail cell vacated by the most recent `advance`, if any
    pub fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }
}

impl Drawable for Snake {
    /// Erase the vacated tail, then draw the body and finally the head on top.
    fn draw(&self, sink: &mut dyn RenderSink) -> Result<(), String> {
        if let Some(tail) = self.last_removed() {
            sink.erase_cell(tail)?;
        }

        for &cell in self.positions().iter().skip(1) {
            sink.draw_cell(cell, self.color)?;
        }

        sink.draw_cell(self.head_cell(), self.color)
    }
}

//! Cell-based rendering
//!
//! The game core never touches SDL2 directly. It issues draw commands through
//! the `RenderSink` trait, and entities describe how they look through the
//! `Drawable` trait.
//!
//! # Architecture
//!
//! - `RenderSink` trait: fill the background, draw or erase a single cell, present
//! - `Drawable` trait: implemented by `Snake` and `Food`
//! - `SdlRenderer`: the real sink, backed by an SDL2 window canvas
//!
//! # Usage Example
//!
//! ```ignore
//! let mut renderer = SdlRenderer::new(canvas, config.cell_size, palette);
//! renderer.fill_background()?;
//! snake.draw(&mut renderer)?;
//! food.draw(&mut renderer)?;
//! renderer.present();
//! ```
use crate::grid::Cell;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Receives draw commands once per tick.
pub trait RenderSink {
    /// Clear the whole frame to the background color.
    fn fill_background(&mut self) -> Result<(), String>;

    /// Draw a filled cell-sized square with a one pixel border.
    fn draw_cell(&mut self, cell: Cell, color: Color) -> Result<(), String>;

    /// Paint a cell with the background color.
    fn erase_cell(&mut self, cell: Cell) -> Result<(), String>;

    /// Show the finished frame.
    fn present(&mut self);
}

/// Anything with a position and a color that can put itself on screen.
pub trait Drawable {
    fn draw(&self, sink: &mut dyn RenderSink) -> Result<(), String>;
}

/// Background and border colors shared by every cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
}

/// RenderSink backed by an SDL2 window canvas
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    cell_size: u32,
    palette: Palette,
}

impl SdlRenderer {
    pub fn new(canvas: Canvas<Window>, cell_size: u32, palette: Palette) -> Self {
        SdlRenderer {
            canvas,
            cell_size,
            palette,
        }
    }

    fn cell_rect(&self, cell: Cell) -> Rect {
        let size = self.cell_size as i32;
        Rect::new(cell.col * size, cell.row * size, self.cell_size, self.cell_size)
    }
}

impl RenderSink for SdlRenderer {
    fn fill_background(&mut self) -> Result<(), String> {
        self.canvas.set_draw_color(self.palette.background);
        self.canvas.clear();
        Ok(())
    }

    fn draw_cell(&mut self, cell: Cell, color: Color) -> Result<(), String> {
        let rect = self.cell_rect(cell);

        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)?;

        self.canvas.set_draw_color(self.palette.border);
        self.canvas.draw_rect(rect)?;
        Ok(())
    }

    fn erase_cell(&mut self, cell: Cell) -> Result<(), String> {
        let rect = self.cell_rect(cell);
        self.canvas.set_draw_color(self.palette.background);
        self.canvas.fill_rect(rect)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

//! embedded-graphics interop
//!
//! The driver keeps no framebuffer, so it cannot be a
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget). This
//! module bridges the types instead: the display reports its size through
//! [`OriginDimensions`], cursors convert to and from pixel [`Point`]s, and
//! [`BinaryColor`] maps to fill patterns.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
//! use ssd1306_text::{Config, Cursor, Display, DINOSAUR};
//! # use core::convert::Infallible;
//! # struct MockBus;
//! # impl ssd1306_text::BusInterface for MockBus {
//! #     type Error = Infallible;
//! #     fn send(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut display = Display::new(MockBus, Config::default());
//! let _ = display.fill_color(BinaryColor::Off);
//!
//! // Dinosaur in the bottom left corner
//! let size = display.size();
//! if let Some(start) = Cursor::from_point(Point::new(0, size.height as i32 - 32)) {
//!     let _ = display.draw_bitmap(start, &DINOSAUR);
//! }
//! ```

use embedded_graphics_core::{
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
};

use crate::cursor::{COLUMN_LENGTH, Cursor, PAGE_LENGTH};
use crate::display::Display;
use crate::error::Error;
use crate::interface::BusInterface;

/// Rows per page
const PAGE_HEIGHT: u32 = 8;

type GraphicsResult<B> = core::result::Result<(), Error<B>>;

/// Column-slice byte with every pixel set to `color`
pub const fn fill_pattern(color: BinaryColor) -> u8 {
    match color {
        BinaryColor::On => 0xFF,
        BinaryColor::Off => 0x00,
    }
}

impl Cursor {
    /// Cursor for the page containing `point`
    ///
    /// The row within the page is dropped. Returns `None` for points off
    /// the screen.
    pub fn from_point(point: Point) -> Option<Self> {
        let column = usize::try_from(point.x).ok()?;
        let row = u32::try_from(point.y).ok()?;
        let page = (row / PAGE_HEIGHT) as usize;
        if column >= COLUMN_LENGTH || page >= PAGE_LENGTH {
            return None;
        }
        Some(Self::new(page as u8, column as u8))
    }
}

impl From<Cursor> for Point {
    /// Top left pixel of the cursor cell
    fn from(cursor: Cursor) -> Self {
        Self::new(
            i32::from(cursor.column),
            i32::from(cursor.page) * PAGE_HEIGHT as i32,
        )
    }
}

impl<B> OriginDimensions for Display<B>
where
    B: BusInterface,
{
    fn size(&self) -> Size {
        Size::new(COLUMN_LENGTH as u32, PAGE_LENGTH as u32 * PAGE_HEIGHT)
    }
}

impl<B> Display<B>
where
    B: BusInterface,
{
    /// Set every pixel to `color`
    pub fn fill_color(&mut self, color: BinaryColor) -> GraphicsResult<B> {
        self.fill(fill_pattern(color))
    }
}

//! SSD1306 OLED Text Driver
//!
//! A driver for 128x64 monochrome OLED panels on the SSD1306 controller,
//! drawing text and bitmaps straight into display RAM over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible, no framebuffer
//! - `embedded-hal` v1.0 I2C support
//! - 6x8 ASCII font with line wrap and `format_args!` printing
//! - Page-organized bitmaps
//! - Per-byte or batched command/data framing
//! - `embedded-graphics` interop (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ssd1306_text::{Builder, Cursor, Display, DINOSAUR};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let config = match Builder::new().address(0x3C).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::with_i2c(i2c, config);
//! let _ = display.init();
//! let _ = display.clear();
//!
//! let _ = display.print(format_args!("Hello, world!\nuptime {}s", 42));
//! let _ = display.draw_bitmap(Cursor::new(4, 90), &DINOSAUR);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Page-organized bitmaps
pub mod bitmap;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Display geometry and text cursor
pub mod cursor;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// ASCII font table
pub mod font;
/// Command/data transaction framing
pub mod framer;
/// Hardware interface abstraction
pub mod interface;

/// Graphics interop via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use bitmap::{Bitmap, DINOSAUR};
pub use config::{Builder, Config, DEFAULT_CONTRAST, GlyphPolicy};
pub use cursor::{COLUMN_LENGTH, COLUMN_MAX, Cursor, CursorUpdate, NewLine, PAGE_LENGTH, PAGE_MAX};
pub use display::{Display, MAX_MESSAGE_LENGTH};
pub use error::{BuilderError, Error};
pub use font::{FONT_TABLE, FONT_WIDTH};
pub use framer::{Framer, Framing, Kind, MAX_BATCH};
pub use interface::{ALTERNATE_ADDRESS, BusInterface, DEFAULT_ADDRESS, I2cInterface};

#[cfg(feature = "graphics")]
pub use graphics::fill_pattern;

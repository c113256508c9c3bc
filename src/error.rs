//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! A cursor position outside the screen is not an error: the move is
//! skipped and reported as [`CursorUpdate::Ignored`](crate::cursor::CursorUpdate::Ignored).
//!
//! ## Example
//!
//! ```
//! use ssd1306_text::{Builder, BuilderError};
//!
//! // Not an SSD1306 address
//! let result = Builder::new().address(0x27).build();
//! assert!(matches!(result, Err(BuilderError::UnsupportedAddress(0x27))));
//!
//! // Start line out of range
//! let result = Builder::new().start_line(64).build();
//! assert!(result.is_err());
//! ```

use crate::cursor::{COLUMN_LENGTH, PAGE_LENGTH};
use crate::interface::BusInterface;

/// Number of COM lines (rows) driven by the controller
pub const ROW_COUNT: u8 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<B: BusInterface> {
    /// Bus transport error
    ///
    /// Wraps the error of the first failed write. Nothing further was sent
    /// for the operation; the device may be left half-configured and the
    /// cursor is wherever it was last set.
    Bus(B::Error),
    /// Character code has no glyph
    ///
    /// Only returned with [`GlyphPolicy::Reject`](crate::config::GlyphPolicy::Reject);
    /// codes above 127 are otherwise drawn blank.
    UndefinedGlyph(u8),
    /// Formatted text does not fit the message buffer
    ///
    /// Nothing is drawn when formatting overflows.
    FormatOverflow {
        /// Buffer capacity in bytes
        capacity: usize,
    },
    /// Bitmap shape is unusable at the requested position
    ///
    /// Width must be non-zero and fit between the start column and the right
    /// edge, data must hold whole rows and at most one row per page.
    InvalidBitmap {
        /// Columns per row
        width: usize,
        /// Length of the bitmap data in bytes
        len: usize,
    },
}

impl<B: BusInterface> core::fmt::Display for Error<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::UndefinedGlyph(code) => write!(f, "No glyph for character code {code:#04x}"),
            Self::FormatOverflow { capacity } => {
                write!(f, "Formatted text exceeds {capacity} bytes")
            }
            Self::InvalidBitmap { width, len } => write!(
                f,
                "Invalid bitmap: {len} bytes at width {width} (max {COLUMN_LENGTH}x{PAGE_LENGTH} pages)"
            ),
        }
    }
}

impl<B: BusInterface + core::fmt::Debug> core::error::Error for Error<B> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// The SSD1306 only answers on 0x3C or 0x3D
    UnsupportedAddress(u8),
    /// Display start line must be below [`ROW_COUNT`]
    InvalidStartLine(u8),
    /// Display offset must be below [`ROW_COUNT`]
    InvalidDisplayOffset(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedAddress(address) => {
                write!(f, "Unsupported I2C address {address:#04x} (expected 0x3c or 0x3d)")
            }
            Self::InvalidStartLine(line) => {
                write!(f, "Invalid start line {line} (max {})", ROW_COUNT - 1)
            }
            Self::InvalidDisplayOffset(offset) => {
                write!(f, "Invalid display offset {offset} (max {})", ROW_COUNT - 1)
            }
        }
    }
}

impl core::error::Error for BuilderError {}

//! Page-organized monochrome bitmaps
//!
//! A [`Bitmap`] is stored the way the controller consumes it: one row per
//! page, each row a run of column-slice bytes (LSB on top). Tools such as
//! image2cpp produce this layout with "vertical, 1 bit per pixel" output.

use crate::cursor::{COLUMN_LENGTH, PAGE_LENGTH};

/// Borrowed bitmap, rows of `width` column-slice bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: usize,
}

impl<'a> Bitmap<'a> {
    /// Wrap row-major `data` laid out `width` bytes per page row
    ///
    /// Shape is checked when the bitmap is drawn, see [`Bitmap::is_valid`].
    pub const fn new(data: &'a [u8], width: usize) -> Self {
        Self { data, width }
    }

    /// Columns per row
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of page rows
    pub const fn pages(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.data.len() / self.width
        }
    }

    /// Raw bytes
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Whether the bitmap is non-empty, rectangular and no larger than the
    /// screen
    pub const fn is_valid(&self) -> bool {
        self.width > 0
            && self.width <= COLUMN_LENGTH
            && !self.data.is_empty()
            && self.data.len() % self.width == 0
            && self.data.len() / self.width <= PAGE_LENGTH
    }

    /// Page rows, top to bottom
    pub fn rows(&self) -> core::slice::ChunksExact<'a, u8> {
        self.data.chunks_exact(self.width.max(1))
    }
}

/// Columns of [`DINOSAUR`]
pub const DINOSAUR_WIDTH: usize = 32;
/// Page rows of [`DINOSAUR`]
pub const DINOSAUR_PAGES: usize = 4;

#[rustfmt::skip]
static DINOSAUR_DATA: [u8; DINOSAUR_WIDTH * DINOSAUR_PAGES] = [
    // page 0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0,
    0xF8, 0xE8, 0xF8, 0xF8, 0xF8, 0xF8, 0xF8, 0xF8, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // page 1
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0xF0, 0xE0, 0xC0, 0xC0, 0xE0, 0xF0, 0xF0, 0xF8, 0xFC, 0xFF,
    0xFF, 0xFF, 0xFF, 0x13, 0x32, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // page 2
    0x00, 0x00, 0x00, 0x40, 0x40, 0x00, 0x01, 0x03, 0x07, 0x0F, 0xFF, 0xBF, 0x1F, 0x0F, 0x1F, 0xFF,
    0x87, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // page 3, ground line
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0,
];

/// 32x32 dinosaur standing on the ground
pub const DINOSAUR: Bitmap<'static> = Bitmap::new(&DINOSAUR_DATA, DINOSAUR_WIDTH);

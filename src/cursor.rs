//! Display geometry and text cursor
//!
//! The SSD1306 addresses its 128x64 RAM as 8 horizontal **pages**, each 8
//! pixels tall, crossed by 128 one-pixel **columns**. One data byte fills
//! one column of one page, least significant bit on top.
//!
//! ```text
//!           col 0                       col 127
//!   page 0  |||||||| ... |||||||| ... ||||||||   rows 0..=7
//!   page 1  |||||||| ... |||||||| ... ||||||||   rows 8..=15
//!   ...
//!   page 7  |||||||| ... |||||||| ... ||||||||   rows 56..=63
//! ```

/// Number of columns
pub const COLUMN_LENGTH: usize = 128;
/// Number of pages (64 rows / 8 rows per page)
pub const PAGE_LENGTH: usize = 8;
/// Last column address
pub const COLUMN_MAX: u8 = (COLUMN_LENGTH - 1) as u8;
/// Last page address
pub const PAGE_MAX: u8 = (PAGE_LENGTH - 1) as u8;

// Page wrap is a mask, which needs a power of two page count.
const _: () = assert!(PAGE_LENGTH.is_power_of_two());

/// Position of the next write
///
/// `column` may reach [`COLUMN_LENGTH`] after a glyph ends flush with the
/// right edge; the next glyph then wraps to a new line before drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Page (text line), 0..=7
    pub page: u8,
    /// Column, 0..=128
    pub column: u8,
}

impl Cursor {
    /// Top left corner
    pub const ORIGIN: Self = Self { page: 0, column: 0 };

    /// Create a cursor without validating it
    ///
    /// [`Display::set_cursor`](crate::display::Display::set_cursor) decides
    /// whether the position is usable.
    pub const fn new(page: u8, column: u8) -> Self {
        Self { page, column }
    }

    /// Whether a write may start here
    ///
    /// The last column is excluded: nothing wider than one column fits there.
    pub const fn is_addressable(&self) -> bool {
        self.page <= PAGE_MAX && self.column < COLUMN_MAX
    }

    /// Page below this one, wrapping from the bottom page to the top
    pub const fn next_page(&self) -> u8 {
        self.page.wrapping_add(1) & PAGE_MAX
    }
}

/// Result of a cursor move request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum CursorUpdate {
    /// Address window and cursor were updated
    Moved,
    /// Position was out of range; nothing was sent and the cursor kept its
    /// previous position
    Ignored,
}

impl CursorUpdate {
    /// Whether the move took effect
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Where a new line starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewLine {
    /// Column 0 of the next page, as for running text
    #[default]
    StartOfLine,
    /// Same column on the next page, as for images drawn off the left edge
    SameColumn,
}

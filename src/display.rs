//! Core display operations
//!
//! [`Display`] keeps the text cursor and lowers every drawing call to
//! command and data transactions. There is no framebuffer: what has been
//! sent lives only in the controller's RAM.
//!
//! Text runs left to right in 6 pixel cells. A character that would not fit
//! before the right edge starts a new line first, and a new line past the
//! bottom page wraps to the top.

use core::fmt;

use embedded_hal::i2c::I2c;
use heapless::String;

use crate::bitmap::Bitmap;
use crate::command::{
    DONT_CARE, HORIZONTAL_ADDRESSING, SET_CHARGE_PUMP, SET_CHARGE_PUMP_ENABLE, SET_COLUMN_ADDRESS,
    SET_CONTRAST_CONTROL, SET_DEACTIVATE_SCROLL, SET_DISPLAY_OFF, SET_DISPLAY_OFFSET,
    SET_DISPLAY_ON, SET_DISPLAY_START_LINE, SET_ENTIRE_DISPLAY_ON, SET_MEMORY_ADDRESSING_MODE,
    SET_PAGE_ADDRESS,
};
use crate::config::{Config, GlyphPolicy};
use crate::cursor::{
    COLUMN_LENGTH, COLUMN_MAX, Cursor, CursorUpdate, NewLine, PAGE_LENGTH, PAGE_MAX,
};
use crate::error::Error;
use crate::font::{BLANK_GLYPH, FONT_WIDTH, Glyph, glyph};
use crate::framer::{Framer, Kind};
use crate::interface::{BusInterface, I2cInterface};

/// Longest message [`Display::print`] renders, in bytes
pub const MAX_MESSAGE_LENGTH: usize = 256;

type DisplayResult<B> = core::result::Result<(), Error<B>>;
type CursorResult<B> = core::result::Result<CursorUpdate, Error<B>>;

/// Text and bitmap driver for SSD1306
///
/// Owns the bus (through a [`Framer`]) and the cursor. All methods take
/// `&mut self`; when several tasks draw to the same panel, wrap the display
/// in a mutex or give it to a single task.
pub struct Display<B>
where
    B: BusInterface,
{
    /// Packet encoder and bus
    framer: Framer<B>,
    /// Display configuration
    config: Config,
    /// Position of the next write
    cursor: Cursor,
    /// Column of the last explicit cursor move, used by [`NewLine::SameColumn`]
    anchor: u8,
}

impl<I2C> Display<I2cInterface<I2C>>
where
    I2C: I2c,
    I2C::Error: fmt::Debug,
{
    /// Create a display on an I2C bus at the configured address
    pub fn with_i2c(i2c: I2C, config: Config) -> Self {
        let interface = I2cInterface::new(i2c, config.address);
        Self::new(interface, config)
    }
}

impl<B> Display<B>
where
    B: BusInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`Display::init`].
    pub fn new(interface: B, config: Config) -> Self {
        Self {
            framer: Framer::new(interface, config.framing),
            config,
            cursor: Cursor::ORIGIN,
            anchor: 0,
        }
    }

    /// Power up and configure the controller
    ///
    /// The cursor is reset to the origin before anything is sent. If a
    /// write fails the remaining steps are skipped; the controller is then
    /// in an unknown state and `init` should be run again from the start.
    pub fn init(&mut self) -> DisplayResult<B> {
        self.cursor = Cursor::ORIGIN;
        self.anchor = 0;
        log::debug!("initializing SSD1306 at {:#04x}", self.config.address);

        self.command(SET_DISPLAY_OFF, &[])?;
        self.command(SET_DISPLAY_OFFSET, &[self.config.display_offset])?;
        self.command(SET_DISPLAY_START_LINE | self.config.start_line, &[])?;
        // Charge pump has to be running before the panel is switched on
        self.command(SET_CHARGE_PUMP, &[SET_CHARGE_PUMP_ENABLE])?;
        // Column/page windows only apply in horizontal mode
        self.command(SET_MEMORY_ADDRESSING_MODE, &[HORIZONTAL_ADDRESSING])?;
        self.command(SET_CONTRAST_CONTROL, &[self.config.contrast])?;
        self.command(SET_ENTIRE_DISPLAY_ON, &[])?;
        self.command(SET_DISPLAY_ON, &[])?;
        self.command(SET_DEACTIVATE_SCROLL, &[])?;
        self.command(SET_DISPLAY_ON, &[])?;

        Ok(())
    }

    /// Move the cursor to `page`, `column`
    ///
    /// Valid positions are pages 0..=7 and columns 0..=126. Anything else
    /// sends nothing, leaves the cursor where it was and returns
    /// [`CursorUpdate::Ignored`].
    pub fn set_cursor(&mut self, page: u8, column: u8) -> CursorResult<B> {
        let target = Cursor::new(page, column);
        if !target.is_addressable() {
            log::warn!("cursor ({page}, {column}) out of range, ignored");
            return Ok(CursorUpdate::Ignored);
        }

        self.command(SET_COLUMN_ADDRESS, &[column, COLUMN_MAX])?;
        self.command(SET_PAGE_ADDRESS, &[page, PAGE_MAX])?;
        self.cursor = target;
        self.anchor = column;

        Ok(CursorUpdate::Moved)
    }

    /// Move to column 0 of the next page, wrapping from the bottom to the top
    pub fn new_line(&mut self) -> DisplayResult<B> {
        self.new_line_with(NewLine::StartOfLine)
    }

    /// Move to the next page, wrapping from the bottom to the top
    ///
    /// With [`NewLine::SameColumn`] the line starts at the column of the last
    /// [`Display::set_cursor`] instead of column 0.
    pub fn new_line_with(&mut self, mode: NewLine) -> DisplayResult<B> {
        let page = self.cursor.next_page();
        let column = match mode {
            NewLine::StartOfLine => 0,
            NewLine::SameColumn => self.anchor,
        };
        let update = self.set_cursor(page, column)?;
        debug_assert!(update.is_moved());
        Ok(())
    }

    /// Draw one character at the cursor
    ///
    /// `b'\n'` starts a new line and draws nothing. A glyph that would cross
    /// the right edge is moved to the start of the next line first.
    pub fn put_char(&mut self, byte: u8) -> DisplayResult<B> {
        if byte == b'\n' {
            return self.new_line();
        }

        let slices = self.glyph_for(byte)?;
        if usize::from(self.cursor.column) + FONT_WIDTH > COLUMN_LENGTH {
            self.new_line()?;
        }

        self.data(slices)?;
        self.cursor.column += FONT_WIDTH as u8;

        Ok(())
    }

    /// Render formatted text and draw it at the cursor
    ///
    /// The text is formatted in full before anything is sent. If it is
    /// longer than [`MAX_MESSAGE_LENGTH`] bytes, nothing is drawn and
    /// [`Error::FormatOverflow`] is returned. Bytes outside ASCII (including
    /// each byte of a multi-byte UTF-8 character) are handled by the
    /// configured [`GlyphPolicy`]; under [`GlyphPolicy::Reject`] such a
    /// byte fails the whole message and nothing is drawn.
    ///
    /// ```rust,no_run
    /// # use core::convert::Infallible;
    /// # use ssd1306_text::{BusInterface, Config, Display};
    /// # struct MockBus;
    /// # impl BusInterface for MockBus {
    /// #     type Error = Infallible;
    /// #     fn send(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
    /// # }
    /// let mut display = Display::new(MockBus, Config::default());
    /// let celsius = 21;
    /// let _ = display.print(format_args!("T = {celsius} C\n"));
    /// ```
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> DisplayResult<B> {
        let mut message: String<MAX_MESSAGE_LENGTH> = String::new();
        fmt::write(&mut message, args).map_err(|_| Error::FormatOverflow {
            capacity: MAX_MESSAGE_LENGTH,
        })?;
        self.put_bytes(message.as_bytes())
    }

    /// Draw a string at the cursor, with the same length limit as [`Display::print`]
    pub fn print_str(&mut self, text: &str) -> DisplayResult<B> {
        if text.len() > MAX_MESSAGE_LENGTH {
            return Err(Error::FormatOverflow {
                capacity: MAX_MESSAGE_LENGTH,
            });
        }
        self.put_bytes(text.as_bytes())
    }

    /// Write `pattern` to every column of every page
    ///
    /// The cursor is set to the origin first and is left there; the address
    /// counter wraps back to the origin after the last byte.
    pub fn fill(&mut self, pattern: u8) -> DisplayResult<B> {
        log::debug!("fill {pattern:#04x}");
        let update = self.set_cursor(0, 0)?;
        debug_assert!(update.is_moved());

        let row = [pattern; COLUMN_LENGTH];
        for _ in 0..PAGE_LENGTH {
            self.data(&row)?;
        }

        Ok(())
    }

    /// Turn every pixel off
    pub fn clear(&mut self) -> DisplayResult<B> {
        self.fill(0x00)
    }

    /// Draw `bitmap` with its top left corner at `start`
    ///
    /// Rows are drawn one page at a time, each starting at `start.column`.
    /// Rows past the bottom page wrap to the top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitmap`] when the bitmap is malformed or
    /// wider than the space right of `start.column`; nothing is sent.
    /// An out-of-range `start` sends nothing and returns
    /// [`CursorUpdate::Ignored`].
    pub fn draw_bitmap(&mut self, start: Cursor, bitmap: &Bitmap<'_>) -> CursorResult<B> {
        let invalid = || Error::InvalidBitmap {
            width: bitmap.width(),
            len: bitmap.data().len(),
        };
        if !bitmap.is_valid() {
            return Err(invalid());
        }
        if !start.is_addressable() {
            log::warn!("bitmap origin ({}, {}) out of range, ignored", start.page, start.column);
            return Ok(CursorUpdate::Ignored);
        }
        if usize::from(start.column) + bitmap.width() > COLUMN_LENGTH {
            return Err(invalid());
        }

        log::debug!(
            "bitmap {}x{} pages at ({}, {})",
            bitmap.width(),
            bitmap.pages(),
            start.page,
            start.column
        );
        let update = self.set_cursor(start.page, start.column)?;
        debug_assert!(update.is_moved());

        for row in bitmap.rows() {
            self.data(row)?;
            self.cursor.column += row.len() as u8;
            self.new_line_with(NewLine::SameColumn)?;
        }

        Ok(CursorUpdate::Moved)
    }

    /// Position of the next write
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the display and return the bus interface
    pub fn release(self) -> B {
        self.framer.release()
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> DisplayResult<B> {
        // Reject the whole message before any of it is drawn
        if self.config.glyph_policy == GlyphPolicy::Reject {
            if let Some(&code) = bytes
                .iter()
                .find(|&&byte| byte != b'\n' && glyph(byte).is_none())
            {
                return Err(Error::UndefinedGlyph(code));
            }
        }
        for &byte in bytes {
            self.put_char(byte)?;
        }
        Ok(())
    }

    fn glyph_for(&self, code: u8) -> core::result::Result<&'static Glyph, Error<B>> {
        match (glyph(code), self.config.glyph_policy) {
            (Some(slices), _) => Ok(slices),
            (None, GlyphPolicy::Blank) => {
                log::warn!("no glyph for {code:#04x}, drawing blank");
                Ok(&BLANK_GLYPH)
            }
            (None, GlyphPolicy::Reject) => Err(Error::UndefinedGlyph(code)),
        }
    }

    /// Send a command to the display controller
    fn command(&mut self, opcode: u8, parameters: &[u8]) -> DisplayResult<B> {
        self.framer
            .write(Kind::Command, opcode, parameters)
            .map_err(Error::Bus)
    }

    /// Send column-slice bytes to display RAM
    fn data(&mut self, slices: &[u8]) -> DisplayResult<B> {
        self.framer
            .write(Kind::Data, DONT_CARE, slices)
            .map_err(Error::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::DINOSAUR;
    use crate::config::Builder;
    use crate::font::FONT_TABLE;
    use crate::framer::Framing;
    use crate::mock::{BusFault, RecordingBus};
    use alloc::vec;
    use alloc::vec::Vec;

    fn test_display(bus: &mut RecordingBus) -> Display<&mut RecordingBus> {
        Display::new(bus, Config::default())
    }

    fn glyph_bytes(text: &str) -> Vec<u8> {
        text.bytes()
            .flat_map(|code| FONT_TABLE[code as usize].iter().copied())
            .collect()
    }

    fn window(page: u8, column: u8) -> Vec<u8> {
        vec![0x21, column, 0x7F, 0x22, page, 0x07]
    }

    #[test]
    fn test_init_sequence() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.init().unwrap();
        assert_eq!(display.cursor(), Cursor::ORIGIN);

        assert_eq!(
            bus.packets,
            vec![
                vec![0x00, 0xAE],
                vec![0x00, 0xD3],
                vec![0x00, 0x00],
                vec![0x00, 0x40],
                vec![0x00, 0x8D],
                vec![0x00, 0x14],
                vec![0x00, 0x20],
                vec![0x00, 0x00],
                vec![0x00, 0x81],
                vec![0x00, 0x80],
                vec![0x00, 0xA4],
                vec![0x00, 0xAF],
                vec![0x00, 0x2E],
                vec![0x00, 0xAF],
            ]
        );
    }

    #[test]
    fn test_init_uses_config() {
        let mut bus = RecordingBus::new();
        let config = Builder::new()
            .contrast(0xCF)
            .start_line(5)
            .display_offset(3)
            .build()
            .unwrap();
        let mut display = Display::new(&mut bus, config);
        display.init().unwrap();

        assert_eq!(
            bus.command_bytes(),
            vec![0xAE, 0xD3, 3, 0x45, 0x8D, 0x14, 0x20, 0x00, 0x81, 0xCF, 0xA4, 0xAF, 0x2E, 0xAF]
        );
    }

    #[test]
    fn test_init_stops_at_first_bus_error() {
        for fail_at in 0..14 {
            let mut bus = RecordingBus::failing_at(fail_at);
            let mut display = test_display(&mut bus);
            let result = display.init();
            assert!(matches!(result, Err(Error::Bus(BusFault))));
            assert_eq!(bus.attempts, fail_at + 1);
            assert_eq!(bus.packets.len(), fail_at);
        }
    }

    #[test]
    fn test_init_resets_cursor_even_on_failure() {
        let mut bus = RecordingBus::failing_at(6);
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(3, 40).unwrap();
        assert!(matches!(display.init(), Err(Error::Bus(BusFault))));
        assert_eq!(display.cursor(), Cursor::ORIGIN);
    }

    #[test]
    fn test_init_failure_sends_nothing_after_fault() {
        let mut bus = RecordingBus::failing_at(3);
        let mut display = test_display(&mut bus);
        assert!(matches!(display.init(), Err(Error::Bus(BusFault))));
        assert_eq!(bus.attempts, 4);
        assert_eq!(bus.packets.len(), 3);
    }

    #[test]
    fn test_set_cursor_then_put_char_everywhere() {
        for page in 0..=PAGE_MAX {
            for column in 0..COLUMN_MAX {
                let mut bus = RecordingBus::new();
                let mut display = test_display(&mut bus);
                let update = display.set_cursor(page, column).unwrap();
                assert_eq!(update, CursorUpdate::Moved);
                display.put_char(b'A').unwrap();
                let cursor = display.cursor();

                if usize::from(column) + FONT_WIDTH <= COLUMN_LENGTH {
                    assert_eq!(bus.packets.len(), 6 + FONT_WIDTH);
                    assert_eq!(bus.command_bytes(), window(page, column));
                    assert_eq!(cursor, Cursor::new(page, column + FONT_WIDTH as u8));
                } else {
                    assert_eq!(cursor, Cursor::new((page + 1) % 8, FONT_WIDTH as u8));
                }
                assert_eq!(bus.data_packets(), FONT_WIDTH);
                assert_eq!(bus.data_bytes(), glyph_bytes("A"));
            }
        }
    }

    #[test]
    fn test_set_cursor_out_of_range_is_ignored() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(2, 10).unwrap();

        for (page, column) in [(8, 0), (0, 127), (0, 200), (255, 255)] {
            let update = display.set_cursor(page, column).unwrap();
            assert_eq!(update, CursorUpdate::Ignored);
            assert_eq!(display.cursor(), Cursor::new(2, 10));
        }
        assert_eq!(bus.packets.len(), 6);
    }

    #[test]
    fn test_put_char_wraps_before_drawing() {
        for page in 0..=PAGE_MAX {
            for column in 123..COLUMN_MAX {
                let mut bus = RecordingBus::new();
                let mut display = test_display(&mut bus);
                let _ = display.set_cursor(page, column).unwrap();
                display.put_char(b'W').unwrap();

                let next_page = (page + 1) % 8;
                assert_eq!(display.cursor(), Cursor::new(next_page, FONT_WIDTH as u8));

                let mut expected_commands = window(page, column);
                expected_commands.extend(window(next_page, 0));
                assert_eq!(bus.command_bytes(), expected_commands);
                // the new line goes out before any pixel data
                assert!(bus.packets[..12].iter().all(|packet| packet[0] == 0x00));
                assert_eq!(bus.data_bytes(), glyph_bytes("W"));
            }
        }
    }

    #[test]
    fn test_glyph_flush_with_right_edge_does_not_wrap() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(4, 122).unwrap();
        display.put_char(b'x').unwrap();
        assert_eq!(display.cursor(), Cursor::new(4, 128));

        display.put_char(b'y').unwrap();
        assert_eq!(display.cursor(), Cursor::new(5, FONT_WIDTH as u8));
        assert_eq!(bus.data_bytes(), glyph_bytes("xy"));
    }

    #[test]
    fn test_new_line_cycle_returns_to_start_page() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(5, 30).unwrap();
        for _ in 0..8 {
            display.new_line().unwrap();
        }
        assert_eq!(display.cursor(), Cursor::new(5, 0));
    }

    #[test]
    fn test_new_line_same_column() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(7, 30).unwrap();
        display.put_char(b'a').unwrap();
        display.new_line_with(NewLine::SameColumn).unwrap();
        assert_eq!(display.cursor(), Cursor::new(0, 30));
    }

    #[test]
    fn test_print_newline_draws_no_glyph() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.print(format_args!("A\nB")).unwrap();
        assert_eq!(display.cursor(), Cursor::new(1, FONT_WIDTH as u8));

        let mut expected: Vec<Vec<u8>> = Vec::new();
        expected.extend(glyph_bytes("A").into_iter().map(|b| vec![0x40, b]));
        expected.extend(window(1, 0).into_iter().map(|b| vec![0x00, b]));
        expected.extend(glyph_bytes("B").into_iter().map(|b| vec![0x40, b]));
        assert_eq!(bus.packets, expected);
    }

    #[test]
    fn test_print_formats_arguments() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let celsius = 21;
        display.print(format_args!("T={celsius}C")).unwrap();
        assert_eq!(display.cursor(), Cursor::new(0, 5 * FONT_WIDTH as u8));
        assert_eq!(bus.data_bytes(), glyph_bytes("T=21C"));
    }

    #[test]
    fn test_print_wraps_long_lines() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        // 21 cells fill 126 columns, the 22nd wraps
        display.print(format_args!("{:<22}", "")).unwrap();
        assert_eq!(display.cursor(), Cursor::new(1, FONT_WIDTH as u8));
    }

    #[test]
    fn test_print_overflow_sends_nothing() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let result = display.print(format_args!("{:>300}", "x"));
        assert!(matches!(
            result,
            Err(Error::FormatOverflow {
                capacity: MAX_MESSAGE_LENGTH
            })
        ));
        assert!(bus.packets.is_empty());
    }

    #[test]
    fn test_print_at_capacity_succeeds() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.print(format_args!("{:>256}", "x")).unwrap();
        assert_eq!(bus.data_packets(), MAX_MESSAGE_LENGTH * FONT_WIDTH);
    }

    #[test]
    fn test_print_str() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.print_str("ok").unwrap();
        assert_eq!(bus.data_bytes(), glyph_bytes("ok"));
    }

    #[test]
    fn test_print_str_overflow_sends_nothing() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let long = [b'a'; MAX_MESSAGE_LENGTH + 1];
        let long = core::str::from_utf8(&long).unwrap();
        assert!(matches!(
            display.print_str(long),
            Err(Error::FormatOverflow { .. })
        ));
        assert!(bus.packets.is_empty());
    }

    #[test]
    fn test_undefined_glyph_drawn_blank_by_default() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.put_char(0x80).unwrap();
        assert_eq!(display.cursor(), Cursor::new(0, FONT_WIDTH as u8));
        assert_eq!(bus.data_bytes(), vec![0u8; FONT_WIDTH]);
    }

    #[test]
    fn test_undefined_glyph_rejected_by_policy() {
        let mut bus = RecordingBus::new();
        let config = Builder::new()
            .glyph_policy(GlyphPolicy::Reject)
            .build()
            .unwrap();
        let mut display = Display::new(&mut bus, config);
        let result = display.put_char(0xC3);
        assert!(matches!(result, Err(Error::UndefinedGlyph(0xC3))));
        assert_eq!(display.cursor(), Cursor::ORIGIN);
        assert!(bus.packets.is_empty());
    }

    #[test]
    fn test_rejected_glyph_in_message_draws_nothing() {
        let mut bus = RecordingBus::new();
        let config = Builder::new()
            .glyph_policy(GlyphPolicy::Reject)
            .build()
            .unwrap();
        let mut display = Display::new(&mut bus, config);
        let result = display.print(format_args!("ab\u{e9}"));
        assert!(matches!(result, Err(Error::UndefinedGlyph(0xC3))));
        assert!(matches!(
            display.print_str("x\u{e9}y"),
            Err(Error::UndefinedGlyph(0xC3))
        ));
        assert_eq!(display.cursor(), Cursor::ORIGIN);
        assert!(bus.packets.is_empty());
    }

    #[test]
    fn test_fill_covers_screen_from_origin() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(3, 50).unwrap();
        display.put_char(b'z').unwrap();

        display.fill(0xFF).unwrap();
        assert_eq!(display.cursor(), Cursor::ORIGIN);

        let mut expected_commands = window(3, 50);
        expected_commands.extend(window(0, 0));
        assert_eq!(bus.command_bytes(), expected_commands);

        let fill_packets = &bus.packets[6 + FONT_WIDTH..];
        assert_eq!(fill_packets.len(), 6 + 1024);
        assert!(fill_packets[..6].iter().all(|packet| packet[0] == 0x00));
        assert!(fill_packets[6..].iter().all(|packet| *packet == [0x40u8, 0xFF]));
    }

    #[test]
    fn test_clear_fills_zero() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.clear().unwrap();
        assert_eq!(bus.data_bytes(), vec![0u8; 1024]);
    }

    #[test]
    fn test_fill_batched_framing() {
        let mut bus = RecordingBus::new();
        let config = Builder::new().framing(Framing::Batched).build().unwrap();
        let mut display = Display::new(&mut bus, config);
        display.fill(0xAA).unwrap();

        assert_eq!(
            bus.packets[..2],
            [vec![0x00, 0x21, 0x00, 0x7F], vec![0x00, 0x22, 0x00, 0x07]]
        );
        assert_eq!(bus.data_packets(), 1024 / crate::framer::MAX_BATCH);
        assert_eq!(bus.data_bytes(), vec![0xAA; 1024]);
    }

    #[test]
    fn test_draw_bitmap_rows_start_at_same_column() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let update = display.draw_bitmap(Cursor::new(2, 10), &DINOSAUR).unwrap();
        assert_eq!(update, CursorUpdate::Moved);

        let mut expected_commands = window(2, 10);
        for page in 3..=6 {
            expected_commands.extend(window(page, 10));
        }
        assert_eq!(display.cursor(), Cursor::new(6, 10));
        assert_eq!(bus.command_bytes(), expected_commands);
        assert_eq!(bus.data_bytes(), DINOSAUR.data());
    }

    #[test]
    fn test_draw_full_screen_bitmap_pages_in_order() {
        let data: Vec<u8> = (0..1024).map(|i| (i / 128) as u8).collect();
        let bitmap = Bitmap::new(&data, COLUMN_LENGTH);
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let _ = display.draw_bitmap(Cursor::ORIGIN, &bitmap).unwrap();

        // one new line per page, the last wraps back to the top
        assert_eq!(display.cursor(), Cursor::ORIGIN);
        assert_eq!(bus.data_bytes(), data);
    }

    #[test]
    fn test_draw_bitmap_out_of_range_start_is_ignored() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let update = display.draw_bitmap(Cursor::new(8, 0), &DINOSAUR).unwrap();
        assert_eq!(update, CursorUpdate::Ignored);
        assert!(bus.packets.is_empty());
    }

    #[test]
    fn test_draw_bitmap_too_wide_is_rejected() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        let result = display.draw_bitmap(Cursor::new(0, 100), &DINOSAUR);
        assert!(matches!(
            result,
            Err(Error::InvalidBitmap { width: 32, len: 128 })
        ));
        assert!(bus.packets.is_empty());
    }

    #[test]
    fn test_bus_error_aborts_glyph() {
        let mut bus = RecordingBus::failing_at(8);
        let mut display = test_display(&mut bus);
        let _ = display.set_cursor(1, 0).unwrap();
        let result = display.print_str("AB");
        assert!(matches!(result, Err(Error::Bus(BusFault))));
        assert_eq!(display.cursor(), Cursor::new(1, 0));
        assert_eq!(bus.attempts, 9);
        assert_eq!(bus.packets.len(), 8);
    }

    #[test]
    fn test_with_i2c_uses_configured_address() {
        use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

        #[derive(Debug, Default)]
        struct AddressProbe {
            addresses: Vec<u8>,
        }
        impl ErrorType for AddressProbe {
            type Error = ErrorKind;
        }
        impl I2c for AddressProbe {
            fn transaction(
                &mut self,
                address: u8,
                _operations: &mut [Operation<'_>],
            ) -> Result<(), Self::Error> {
                self.addresses.push(address);
                Ok(())
            }
        }

        let config = Builder::new().address(0x3D).build().unwrap();
        let mut display = Display::with_i2c(AddressProbe::default(), config);
        display.init().unwrap();
        let i2c = display.release().release();
        assert_eq!(i2c.addresses.len(), 14);
        assert!(i2c.addresses.iter().all(|&address| address == 0x3D));
    }
}

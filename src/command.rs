//! SSD1306 command definitions
//!
//! This module defines the command opcodes and control bytes used to drive
//! the SSD1306 OLED controller over I2C. Every I2C write starts with a
//! control byte that tells the controller how to interpret what follows:
//! [`CONTROL_COMMAND`] for opcodes and their parameters, [`CONTROL_DATA`]
//! for display RAM contents.
//!
//! ## Command Structure
//!
//! Each command is framed as:
//! 1. Control byte `0x00`
//! 2. Opcode byte
//! 3. Parameter bytes (if any), each behind its own control byte when sent
//!    one at a time
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_text::{command, Framer, Framing, Kind};
//! # use core::convert::Infallible;
//! # struct MockBus;
//! # impl ssd1306_text::BusInterface for MockBus {
//! #     type Error = Infallible;
//! #     fn send(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut framer = Framer::new(MockBus, Framing::PerByte);
//!
//! // Display off
//! let _ = framer.write(Kind::Command, command::SET_DISPLAY_OFF, &[]);
//!
//! // Contrast 0x80
//! let _ = framer.write(Kind::Command, command::SET_CONTRAST_CONTROL, &[0x80]);
//! ```

// Control bytes

/// Control byte preceding a command opcode or command parameter (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte preceding display RAM data (0x40)
///
/// The D/C# bit (bit 6) is set, so the bytes that follow are written to
/// GDDRAM at the current column/page address.
pub const CONTROL_DATA: u8 = 0x40;

/// Placeholder register for data transactions
///
/// Data writes are positioned by the column/page address window, not by a
/// register, so the address field carries no meaning.
pub const DONT_CARE: u8 = 0x00;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 byte: contrast level, 0x00..=0xFF.
pub const SET_CONTRAST_CONTROL: u8 = 0x81;

/// Entire display on, following RAM content (0xA4)
///
/// Output follows the GDDRAM contents (as opposed to 0xA5, all pixels on).
pub const SET_ENTIRE_DISPLAY_ON: u8 = 0xA4;

/// Display off (sleep mode) command (0xAE)
pub const SET_DISPLAY_OFF: u8 = 0xAE;

/// Display on (normal mode) command (0xAF)
pub const SET_DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Deactivate scroll command (0x2E)
///
/// Stops any horizontal scroll set up by earlier scroll commands. RAM
/// contents must be rewritten after a scroll is stopped.
pub const SET_DEACTIVATE_SCROLL: u8 = 0x2E;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 byte, see [`HORIZONTAL_ADDRESSING`].
pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;

/// Horizontal addressing mode parameter (0x00)
///
/// The column pointer advances after each data byte and wraps to the next
/// page at the end of the column window.
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Set column address window command (0x21)
///
/// Requires 2 bytes: [start column, end column], each 0..=127.
/// Only valid in horizontal or vertical addressing mode.
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window command (0x22)
///
/// Requires 2 bytes: [start page, end page], each 0..=7.
/// Only valid in horizontal or vertical addressing mode.
pub const SET_PAGE_ADDRESS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line command base (0x40)
///
/// The start line (0..=63) is OR-ed into the low 6 bits; no parameter byte.
pub const SET_DISPLAY_START_LINE: u8 = 0x40;

/// Set display offset command (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

// Charge pump commands

/// Charge pump setting command (0x8D)
///
/// Followed by [`SET_CHARGE_PUMP_ENABLE`]. The pump must be enabled before
/// the display is switched on.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable parameter (0x14)
pub const SET_CHARGE_PUMP_ENABLE: u8 = 0x14;

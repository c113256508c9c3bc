//! Display configuration types and builder

pub use crate::error::{BuilderError, ROW_COUNT};
use crate::framer::Framing;
use crate::interface::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS};

/// Default contrast level
pub const DEFAULT_CONTRAST: u8 = 0x80;

/// What to draw for character codes without a glyph (above 127)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphPolicy {
    /// Draw a blank cell and keep going
    #[default]
    Blank,
    /// Fail with [`Error::UndefinedGlyph`](crate::error::Error::UndefinedGlyph)
    /// before anything is sent
    Reject,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Contrast level sent during init
    pub contrast: u8,
    /// Vertical display offset (0..=63)
    pub display_offset: u8,
    /// RAM row mapped to the top of the panel (0..=63)
    pub start_line: u8,
    /// Packet framing
    pub framing: Framing,
    /// Handling of codes without a glyph
    pub glyph_policy: GlyphPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            contrast: DEFAULT_CONTRAST,
            display_offset: 0,
            start_line: 0,
            framing: Framing::PerByte,
            glyph_policy: GlyphPolicy::Blank,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_text::{Builder, Framing, GlyphPolicy};
///
/// let config = match Builder::new()
///     .address(0x3D)
///     .contrast(0xCF)
///     .framing(Framing::Batched)
///     .glyph_policy(GlyphPolicy::Reject)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C address (0x3C or 0x3D)
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value;
        self
    }

    /// Set vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.config.display_offset = value;
        self
    }

    /// Set display start line
    pub fn start_line(mut self, value: u8) -> Self {
        self.config.start_line = value;
        self
    }

    /// Set packet framing
    pub fn framing(mut self, framing: Framing) -> Self {
        self.config.framing = framing;
        self
    }

    /// Set handling of codes without a glyph
    pub fn glyph_policy(mut self, policy: GlyphPolicy) -> Self {
        self.config.glyph_policy = policy;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::UnsupportedAddress` if the address is not 0x3C or 0x3D
    /// - `BuilderError::InvalidDisplayOffset` if the offset is 64 or more
    /// - `BuilderError::InvalidStartLine` if the start line is 64 or more
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;
        if config.address != DEFAULT_ADDRESS && config.address != ALTERNATE_ADDRESS {
            return Err(BuilderError::UnsupportedAddress(config.address));
        }
        if config.display_offset >= ROW_COUNT {
            return Err(BuilderError::InvalidDisplayOffset(config.display_offset));
        }
        if config.start_line >= ROW_COUNT {
            return Err(BuilderError::InvalidStartLine(config.start_line));
        }
        Ok(config)
    }
}

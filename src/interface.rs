//! Hardware interface abstraction
//!
//! This module provides the [`BusInterface`] trait and the [`I2cInterface`]
//! struct for sending raw byte packets to the SSD1306 controller.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode needs only SDA and SCL. The controller answers on
//! one of two 7-bit addresses selected by the SA0 strap:
//! - **0x3C**: SA0 low (most breakout boards)
//! - **0x3D**: SA0 high
//!
//! The driver never reads from the bus.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ssd1306_text::{BusInterface, I2cInterface, DEFAULT_ADDRESS};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//!
//! // Control byte 0x00 + display on
//! let _ = interface.send(&[0x00, 0xAF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of the SSD1306 (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address of the SSD1306 (SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Trait for the bus transport underneath the driver
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Framer`](crate::framer::Framer) to work with any transport that can
/// write a byte sequence to the display in one blocking call.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait yourself to put the driver on a shared bus manager, or to record
/// traffic in tests.
pub trait BusInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `bytes` to the display as a single bus transaction
    ///
    /// The first byte is always a control byte
    /// ([`CONTROL_COMMAND`](crate::command::CONTROL_COMMAND) or
    /// [`CONTROL_DATA`](crate::command::CONTROL_DATA)).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails (NACK, arbitration loss, ...).
    fn send(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

impl<T: BusInterface + ?Sized> BusInterface for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        T::send(self, bytes)
    }
}

/// I2C implementation of [`BusInterface`]
///
/// Implements [`BusInterface`] for any embedded-hal v1.0 [`I2c`] bus,
/// writing every packet to a fixed device address.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the device at `address`
    ///
    /// The address is not validated here; [`Builder`](crate::config::Builder)
    /// checks it against the addresses the SSD1306 can answer on.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> BusInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn send(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, bytes)
    }
}

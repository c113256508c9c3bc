//! Command/data transaction framing
//!
//! The [`Framer`] turns a logical write (kind, register, parameters) into
//! the control-byte-prefixed packets the SSD1306 expects and hands each
//! packet to the [`BusInterface`].
//!
//! ## Wire Format
//!
//! With [`Framing::PerByte`] (the default) every byte travels in its own
//! two-byte packet:
//!
//! | Write                              | Packets                                  |
//! |------------------------------------|------------------------------------------|
//! | Command `0xAF`, no parameters      | `[00 AF]`                                |
//! | Command `0x21`, parameters `[0 7F]`| `[00 21]` `[00 00]` `[00 7F]`            |
//! | Data, parameters `[7C 12]`         | `[40 7C]` `[40 12]`                      |
//! | Data, no parameters                | `[40 address]`                           |
//!
//! With [`Framing::Batched`] a command goes out as one packet
//! (`[00 21 00 7F]`) and data goes out in packets of up to [`MAX_BATCH`]
//! bytes behind a single control byte. Both shapes are accepted by the
//! controller; packet order always matches parameter order.

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::interface::BusInterface;

/// Largest number of data bytes carried by one batched packet
pub const MAX_BATCH: usize = 32;

/// Transaction kind, selects the control byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Address is an opcode, parameters are its arguments
    Command,
    /// Parameters are column-slice bytes for display RAM
    Data,
}

impl Kind {
    /// Control byte sent ahead of every packet of this kind
    pub const fn control_byte(self) -> u8 {
        match self {
            Self::Command => CONTROL_COMMAND,
            Self::Data => CONTROL_DATA,
        }
    }
}

/// How multi-byte writes are split into bus packets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Framing {
    /// One `[control, byte]` packet per byte
    #[default]
    PerByte,
    /// One packet per command, data in chunks of [`MAX_BATCH`] bytes
    Batched,
}

/// Encodes transactions and writes them to the bus
///
/// The framer performs no retries: the first bus error is returned as-is
/// and nothing further is sent for that write.
#[derive(Debug)]
pub struct Framer<B> {
    bus: B,
    framing: Framing,
}

impl<B> Framer<B>
where
    B: BusInterface,
{
    /// Create a framer over `bus`
    pub fn new(bus: B, framing: Framing) -> Self {
        Self { bus, framing }
    }

    /// Consume the framer and return the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Send one transaction
    ///
    /// For [`Kind::Data`] the `address` is only transmitted when
    /// `parameters` is empty.
    ///
    /// # Errors
    ///
    /// Returns the bus error of the first packet that fails.
    pub fn write(&mut self, kind: Kind, address: u8, parameters: &[u8]) -> Result<(), B::Error> {
        match self.framing {
            Framing::PerByte => self.write_per_byte(kind, address, parameters),
            Framing::Batched => self.write_batched(kind, address, parameters),
        }
    }

    fn write_per_byte(&mut self, kind: Kind, address: u8, parameters: &[u8]) -> Result<(), B::Error> {
        let control = kind.control_byte();

        if kind == Kind::Command || parameters.is_empty() {
            self.send(&[control, address])?;
        }
        for &byte in parameters {
            self.send(&[control, byte])?;
        }
        Ok(())
    }

    fn write_batched(&mut self, kind: Kind, address: u8, parameters: &[u8]) -> Result<(), B::Error> {
        let control = kind.control_byte();
        let mut packet = [0u8; MAX_BATCH + 2];
        packet[0] = control;

        match kind {
            Kind::Command => {
                // Arguments past MAX_BATCH continue in follow-up command packets
                packet[1] = address;
                let (head, rest) = parameters.split_at(parameters.len().min(MAX_BATCH));
                packet[2..2 + head.len()].copy_from_slice(head);
                self.send(&packet[..2 + head.len()])?;
                for chunk in rest.chunks(MAX_BATCH) {
                    packet[1..=chunk.len()].copy_from_slice(chunk);
                    self.send(&packet[..=chunk.len()])?;
                }
            }
            Kind::Data if parameters.is_empty() => self.send(&[control, address])?,
            Kind::Data => {
                for chunk in parameters.chunks(MAX_BATCH) {
                    packet[1..=chunk.len()].copy_from_slice(chunk);
                    self.send(&packet[..=chunk.len()])?;
                }
            }
        }
        Ok(())
    }

    fn send(&mut self, packet: &[u8]) -> Result<(), B::Error> {
        log::trace!("bus <- {:02x?}", packet);
        self.bus.send(packet)
    }
}

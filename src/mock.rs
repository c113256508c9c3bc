//! Recording bus shared by the unit tests

use alloc::vec::Vec;

use crate::interface::BusInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Records every packet; optionally fails the n-th send (0-based)
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub packets: Vec<Vec<u8>>,
    pub attempts: usize,
    pub fail_at: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    /// Payload bytes of every data packet, control bytes stripped
    pub fn data_bytes(&self) -> Vec<u8> {
        self.packets
            .iter()
            .filter(|packet| packet[0] == 0x40)
            .flat_map(|packet| packet[1..].iter().copied())
            .collect()
    }

    /// Number of data packets
    pub fn data_packets(&self) -> usize {
        self.packets.iter().filter(|packet| packet[0] == 0x40).count()
    }

    /// Command stream bytes, control bytes stripped
    pub fn command_bytes(&self) -> Vec<u8> {
        self.packets
            .iter()
            .filter(|packet| packet[0] == 0x00)
            .flat_map(|packet| packet[1..].iter().copied())
            .collect()
    }
}

impl BusInterface for RecordingBus {
    type Error = BusFault;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(BusFault);
        }
        self.packets.push(bytes.to_vec());
        Ok(())
    }
}

//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Debug, Display, Formatter, Result},
    ops::Deref,
    write,
};

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -18 dBm | -6 dBm | -12 dBm |
    Min,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -12 dBm | 0 dBm | -4 dBm |
    Low,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -6 dBm | 3 dBm | 1 dBm |
    High,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | 0 dBm | 7 dBm | 4 dBm |
    Max,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of the CRC checksum appended to every packet.
///
/// Auto-acknowledgement needs a CRC, so it cannot be disabled here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            8 => CrcLength::Bit8,
            _ => CrcLength::Bit16,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The number of bytes in a pipe address. This applies to every pipe on the radio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddressWidth {
    /// 3 byte addresses
    Bytes3,
    /// 4 byte addresses
    Bytes4,
    /// 5 byte addresses
    Bytes5,
}

impl AddressWidth {
    /// Get the width matching an address of `len` bytes, if the radio supports it.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            3 => Some(AddressWidth::Bytes3),
            4 => Some(AddressWidth::Bytes4),
            5 => Some(AddressWidth::Bytes5),
            _ => None,
        }
    }

    /// The number of address bytes.
    pub const fn bytes(self) -> usize {
        match self {
            AddressWidth::Bytes3 => 3,
            AddressWidth::Bytes4 => 4,
            AddressWidth::Bytes5 => 5,
        }
    }

    /// The SETUP_AW register value.
    pub(crate) const fn into_bits(self) -> u8 {
        self.bytes() as u8 - 2
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AddressWidth {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=usize} bytes", self.bytes())
    }
}

impl Display for AddressWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} bytes", self.bytes())
    }
}

/// The operating modes that the driver moves the radio between.
///
/// The mode is a product of the CONFIG register's PRIM_RX bit and the CE pin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperatingMode {
    /// CE pin is inactive. The radio neither transmits nor listens.
    Standby,
    /// CE pin is active and PRIM_RX is cleared.
    Transmit,
    /// CE pin is active and PRIM_RX is set.
    Receive,
}

#[cfg(feature = "defmt")]
impl defmt::Format for OperatingMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OperatingMode::Standby => defmt::write!(fmt, "Standby"),
            OperatingMode::Transmit => defmt::write!(fmt, "Transmit"),
            OperatingMode::Receive => defmt::write!(fmt, "Receive"),
        }
    }
}

impl Display for OperatingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            OperatingMode::Standby => write!(f, "Standby"),
            OperatingMode::Transmit => write!(f, "Transmit"),
            OperatingMode::Receive => write!(f, "Receive"),
        }
    }
}

/// Identifies one of the radio's two FIFOs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fifo {
    Tx,
    Rx,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fifo {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Fifo::Tx => defmt::write!(fmt, "TX"),
            Fifo::Rx => defmt::write!(fmt, "RX"),
        }
    }
}

impl Display for Fifo {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Fifo::Tx => write!(f, "TX"),
            Fifo::Rx => write!(f, "RX"),
        }
    }
}

/// A payload received from the radio's RX FIFO.
///
/// The length always equals the configured payload width.
/// A [`Packet`] dereferences to a byte slice.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    buf: [u8; Packet::MAX_LEN],
    len: u8,
}

impl Packet {
    /// The largest payload the radio's FIFOs can hold.
    pub const MAX_LEN: usize = 32;

    /// `data` is truncated to [`Packet::MAX_LEN`] bytes.
    pub(crate) fn from_slice(data: &[u8]) -> Self {
        let len = data.len().min(Self::MAX_LEN);
        let mut buf = [0u8; Self::MAX_LEN];
        buf[..len].copy_from_slice(&data[..len]);
        Self {
            buf,
            len: len as u8,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for Packet {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Debug for Packet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple("Packet").field(&self.as_slice()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Packet {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Packet({=[u8]})", self.as_slice())
    }
}

use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

pub(crate) mod bit_fields;
use bit_fields::Config;
mod constants;
pub use constants::{commands, mnemonics, registers, timing};
mod fifo;
mod init;
mod mode;
mod radio;
mod status;
pub use status::{FifoStatus, ObserveTx, ProtocolViolation, StatusFlags, StatusSnapshot};

use super::{MonotonicClock, RadioConfig, RadioHandle};
use crate::{Fifo, OperatingMode};

/// Names the check that failed during [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitCheck {
    /// The RX_ADDR_P0 register did not read back the address that was written.
    RxAddress,
    /// The STATUS register still showed a payload or a latched TX event
    /// after the FIFOs were flushed and the flags cleared.
    CleanStatus,
}

impl Display for InitCheck {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InitCheck::RxAddress => write!(f, "RX address readback"),
            InitCheck::CleanStatus => write!(f, "clean STATUS"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InitCheck {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            InitCheck::RxAddress => defmt::write!(fmt, "RX address readback"),
            InitCheck::CleanStatus => defmt::write!(fmt, "clean STATUS"),
        }
    }
}

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO).
    ///
    /// This is also returned for an empty SPI exchange.
    TransportFault,
    /// The packet given to transmit does not match the configured payload width.
    InvalidPacketLength { expected: u8, actual: usize },
    /// A check made while initializing the radio failed.
    InitVerificationFailed(InitCheck),
    /// The CONFIG register did not hold the PRIM_RX value needed for the requested mode.
    ModeTransitionFailed(OperatingMode),
    /// A FIFO was not empty after flushing it.
    FlushFailed(Fifo),
    /// The radio did not report a transmission result within the
    /// [`RadioConfig::tx_watchdog()`] limit.
    TxWatchdogExpired,
}

impl<SPI, DO> From<ProtocolViolation> for Nrf24Error<SPI, DO> {
    fn from(_value: ProtocolViolation) -> Self {
        Nrf24Error::TransportFault
    }
}

impl<SPI: Debug, DO: Debug> Display for Nrf24Error<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Nrf24Error::Spi(e) => write!(f, "SPI error: {e:?}"),
            Nrf24Error::Gpo(e) => write!(f, "CE pin error: {e:?}"),
            Nrf24Error::TransportFault => write!(f, "malformed data on the SPI bus"),
            Nrf24Error::InvalidPacketLength { expected, actual } => {
                write!(f, "packet of {actual} bytes does not match payload width {expected}")
            }
            Nrf24Error::InitVerificationFailed(check) => {
                write!(f, "init verification failed: {check}")
            }
            Nrf24Error::ModeTransitionFailed(mode) => {
                write!(f, "failed to enter {mode} mode")
            }
            Nrf24Error::FlushFailed(fifo) => write!(f, "{fifo} FIFO not empty after flush"),
            Nrf24Error::TxWatchdogExpired => write!(f, "transmission watchdog expired"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI error"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "CE pin error"),
            Nrf24Error::TransportFault => defmt::write!(fmt, "malformed data on the SPI bus"),
            Nrf24Error::InvalidPacketLength { expected, actual } => defmt::write!(
                fmt,
                "packet of {=usize} bytes does not match payload width {=u8}",
                actual,
                expected
            ),
            Nrf24Error::InitVerificationFailed(check) => {
                defmt::write!(fmt, "init verification failed: {}", check)
            }
            Nrf24Error::ModeTransitionFailed(mode) => {
                defmt::write!(fmt, "failed to enter {} mode", mode)
            }
            Nrf24Error::FlushFailed(fifo) => {
                defmt::write!(fmt, "{} FIFO not empty after flush", fifo)
            }
            Nrf24Error::TxWatchdogExpired => defmt::write!(fmt, "transmission watchdog expired"),
        }
    }
}

#[cfg(feature = "std")]
impl<SPI: Debug, DO: Debug> std::error::Error for Nrf24Error<SPI, DO> {}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The driver borrows a [`RadioHandle`] for its whole lifetime, so only one
/// driver can use a given radio at a time.
/// ```ignore
/// let mut handle = RadioHandle::new(spi, ce_pin, delay, clock);
/// let mut radio = Nrf24::new(&mut handle, RadioConfig::default());
/// radio.init()?;
/// ```
pub struct Nrf24<'a, SPI, CE, DELAY, CLOCK> {
    handle: &'a mut RadioHandle<SPI, CE, DELAY, CLOCK>,
    _config: RadioConfig,
    _buf: [u8; 33],
    _config_reg: Config,
    _ce_active: bool,
}

impl<'a, SPI, CE, DELAY, CLOCK> Nrf24<'a, SPI, CE, DELAY, CLOCK> {
    /// Instantiate a [`Nrf24`] object that drives the radio behind `handle`.
    ///
    /// No SPI traffic happens until [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init)
    /// is called.
    pub fn new(handle: &'a mut RadioHandle<SPI, CE, DELAY, CLOCK>, config: RadioConfig) -> Self {
        Self {
            handle,
            _config: config,
            _buf: [0u8; 33],
            _config_reg: config.config_reg,
            _ce_active: false,
        }
    }

    /// The configuration this driver was created with.
    pub fn config(&self) -> &RadioConfig {
        &self._config
    }
}

impl<SPI, CE, DELAY, CLOCK> Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    /// Exchange the first `len` bytes of the internal buffer.
    /// Returns the STATUS byte.
    fn spi_transfer(&mut self, len: u8) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        self.handle.transfer(&mut self._buf[..len as usize])
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// let status = self.spi_read(0, commands::FLUSH_TX)?;
    /// ```
    /// The `len` bytes read are stored in `self._buf[1..=len]`.
    fn spi_read(
        &mut self,
        len: u8,
        command: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = command;
        self._buf[1..=len as usize].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        command: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)?;
        Ok(())
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len as u8 + 1)?;
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        self.spi_read(1, commands::R_REGISTER | register)?;
        Ok(self._buf[1])
    }
}

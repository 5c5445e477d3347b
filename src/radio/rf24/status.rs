use core::fmt::{Display, Formatter, Result as FmtResult};

use bitfield_struct::bitfield;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbStatus, MonotonicClock, Nrf24, Nrf24Error};

use super::{commands, mnemonics, registers};

/// A struct used to describe the STATUS register.
///
/// To instantiate an object with flags that have different values:
/// ```ignore
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _reserved: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached
    /// without receiving an ACK.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    /// The value 7 means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all fields are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        if flag {
            Self::from_bits(new_val | (1 << Self::RX_DR_OFFSET))
        } else {
            Self::from_bits(new_val)
        }
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        if flag {
            Self::from_bits(new_val | (1 << Self::TX_DS_OFFSET))
        } else {
            Self::from_bits(new_val)
        }
    }

    /// A flag to describe if the maximum number of retransmits was reached.
    pub fn with_max_rt(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::MAX_RT_OFFSET);
        if flag {
            Self::from_bits(new_val | (1 << Self::MAX_RT_OFFSET))
        } else {
            Self::from_bits(new_val)
        }
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

/// The FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct FifoStatus {
    #[bits(1)]
    _reserved0: u8,

    #[bits(1, access = RO)]
    pub tx_reuse: bool,

    #[bits(1, access = RO)]
    pub tx_full: bool,

    #[bits(1, access = RO)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved1: u8,

    #[bits(1, access = RO)]
    pub rx_full: bool,

    #[bits(1, access = RO)]
    pub rx_empty: bool,
}

/// The OBSERVE_TX register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct ObserveTx {
    /// Count of lost packets. Only reset by writing the RF_CH register.
    #[bits(4, access = RO)]
    pub plos_cnt: u8,

    /// Count of retransmitted packets. Reset when a new transmission starts.
    #[bits(4, access = RO)]
    pub arc_cnt: u8,
}

/// Returned when a STATUS byte has its reserved bit set.
///
/// The radio never sets that bit, so this means the bytes read over the
/// SPI bus are not what the radio sent (bad wiring or a disconnected radio).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolViolation(pub u8);

impl Display for ProtocolViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "reserved bit set in STATUS byte {:#04X}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ProtocolViolation {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "reserved bit set in STATUS byte {=u8:#x}", self.0)
    }
}

/// A decoded snapshot of the STATUS, FIFO_STATUS and OBSERVE_TX registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusSnapshot {
    flags: StatusFlags,
    fifo: FifoStatus,
    observe_tx: ObserveTx,
}

impl StatusSnapshot {
    /// Decode the raw register values.
    ///
    /// Fails if the reserved bit of `status` is set.
    pub const fn decode(
        status: u8,
        fifo_status: u8,
        observe_tx: u8,
    ) -> Result<Self, ProtocolViolation> {
        if status & mnemonics::STATUS_RESERVED != 0 {
            return Err(ProtocolViolation(status));
        }
        Ok(Self {
            flags: StatusFlags::from_bits(status),
            fifo: FifoStatus::from_bits(fifo_status),
            observe_tx: ObserveTx::from_bits(observe_tx),
        })
    }

    /// The STATUS byte exactly as it was read.
    ///
    /// Writing this back to the STATUS register clears every IRQ flag it has set.
    pub const fn raw_status(&self) -> u8 {
        self.flags.into_bits()
    }

    pub const fn flags(&self) -> StatusFlags {
        self.flags
    }

    pub const fn fifo(&self) -> FifoStatus {
        self.fifo
    }

    pub const fn observe_tx(&self) -> ObserveTx {
        self.observe_tx
    }

    pub const fn rx_dr(&self) -> bool {
        self.flags.rx_dr()
    }

    pub const fn tx_ds(&self) -> bool {
        self.flags.tx_ds()
    }

    pub const fn max_rt(&self) -> bool {
        self.flags.max_rt()
    }

    pub const fn rx_pipe(&self) -> u8 {
        self.flags.rx_pipe()
    }

    /// Is there a payload waiting in the RX FIFO?
    pub const fn has_rx_data(&self) -> bool {
        self.flags.rx_pipe() < mnemonics::RX_PIPE_EMPTY
    }

    pub const fn tx_full(&self) -> bool {
        self.fifo.tx_full()
    }

    pub const fn tx_empty(&self) -> bool {
        self.fifo.tx_empty()
    }

    pub const fn rx_full(&self) -> bool {
        self.fifo.rx_full()
    }

    pub const fn rx_empty(&self) -> bool {
        self.fifo.rx_empty()
    }

    pub const fn arc_cnt(&self) -> u8 {
        self.observe_tx.arc_cnt()
    }

    pub const fn plos_cnt(&self) -> u8 {
        self.observe_tx.plos_cnt()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} rx_pipe: {=u8}, tx_empty: {}, tx_full: {}, rx_empty: {}, rx_full: {}, arc: {=u8}, plos: {=u8}",
            self.flags,
            self.rx_pipe(),
            self.tx_empty(),
            self.tx_full(),
            self.rx_empty(),
            self.rx_full(),
            self.arc_cnt(),
            self.plos_cnt()
        )
    }
}

impl<SPI, CE, DELAY, CLOCK> EsbStatus for Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type StatusErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn read_status(&mut self) -> Result<StatusSnapshot, Self::StatusErrorType> {
        let status = self.spi_read(1, commands::R_REGISTER | registers::FIFO_STATUS)?;
        let fifo_status = self._buf[1];
        self.spi_read(1, commands::R_REGISTER | registers::OBSERVE_TX)?;
        let observe_tx = self._buf[1];
        StatusSnapshot::decode(status, fifo_status, observe_tx).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}", e);
            Nrf24Error::from(e)
        })
    }

    fn clear_status(&mut self, snapshot: &StatusSnapshot) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(registers::STATUS, snapshot.raw_status())
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }
}

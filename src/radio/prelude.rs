//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use rf24p0::radio::prelude::*;
//! ```

use core::time::Duration;

use crate::{OperatingMode, Packet, StatusFlags, StatusSnapshot};

/// A trait to represent reading and clearing the status registers
/// of an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Read and decode the STATUS, FIFO_STATUS and OBSERVE_TX registers.
    ///
    /// A STATUS byte with its reserved bit set is reported as an error
    /// because it means the SPI bus did not carry what the radio sent.
    fn read_status(&mut self) -> Result<StatusSnapshot, Self::StatusErrorType>;

    /// Write the STATUS byte held by `snapshot` back to the radio.
    ///
    /// The IRQ flags are "write 1 to clear", so this clears exactly
    /// the events that were latched when the `snapshot` was taken.
    fn clear_status(&mut self, snapshot: &StatusSnapshot) -> Result<(), Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Setting any member of [`StatusFlags`] to `false` will leave
    /// the corresponding status flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    ///
    /// The RX FIFO is verified to be empty afterward.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// The TX FIFO is verified to be empty afterward.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent the operating mode and power state
/// of an ESB capable transceiver.
pub trait EsbMode {
    type ModeErrorType;

    /// Activate the radio's CE pin.
    ///
    /// This blocks for 130 microseconds, the time the radio needs before
    /// any RF activity can begin.
    fn enable(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Deactivate the radio's CE pin. This takes effect immediately.
    fn disable(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Put the radio into active TX mode.
    ///
    /// The CONFIG register is read back afterward to verify the PRIM_RX bit is cleared.
    fn enter_tx(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Put the radio into active RX mode.
    ///
    /// The CONFIG register is read back afterward to verify the PRIM_RX bit is set.
    fn enter_rx(&mut self) -> Result<(), Self::ModeErrorType>;

    /// The [`OperatingMode`] the driver last put the radio into.
    fn mode(&self) -> OperatingMode;

    /// Power down the radio.
    ///
    /// The CE pin is deactivated first. The radio keeps its register values.
    fn power_down(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Power up the radio.
    ///
    /// This blocks for 1.5 milliseconds, the time the radio's crystal oscillator
    /// needs to stabilize.
    fn power_up(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Was the radio powered up by the driver?
    fn is_powered(&self) -> bool;
}

/// A trait to represent the one-time setup of an ESB capable transceiver.
pub trait EsbInit {
    type ConfigErrorType;

    /// Program the radio with the driver's [`RadioConfig`](crate::radio::RadioConfig).
    ///
    /// This must be called once before transmitting or receiving.
    /// The radio is left powered up in active RX mode.
    ///
    /// The RX address is read back after writing it, and the STATUS register
    /// is checked for a clean state at the end. Either check failing is
    /// reported as an error since it points to a wiring problem.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent sending and receiving fixed size packets
/// with an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Load `packet` into the TX FIFO and start transmitting it.
    ///
    /// This does not wait for the transmission to finish.
    /// Use [`EsbRadio::poll_transmit()`] to check the result
    /// (for example, when the radio's IRQ pin becomes active).
    ///
    /// The `packet` length must equal the configured payload width;
    /// otherwise an error is returned before the SPI bus is used.
    fn start_transmit(&mut self, packet: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Check the result of a transmission started by [`EsbRadio::start_transmit()`].
    ///
    /// Returns `None` while the radio is still transmitting.
    /// Otherwise, the latched flags are cleared, the radio is put back into RX mode, and
    /// - `Some(true)` means the packet was acknowledged.
    /// - `Some(false)` means the auto-retry budget was exhausted without an acknowledgement.
    fn poll_transmit(&mut self) -> Result<Option<bool>, Self::RadioErrorType>;

    /// Send one `packet` and block until the radio reports the result.
    ///
    /// Returns `true` if the packet was acknowledged and `false` if
    /// the auto-retry budget was exhausted.
    /// A failed transmission is not an error.
    fn transmit(&mut self, packet: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Check the RX FIFO once.
    ///
    /// If a packet is waiting, it is read and returned.
    fn poll_receive(&mut self) -> Result<Option<Packet>, Self::RadioErrorType>;

    /// Block until a packet is received or `timeout` has elapsed.
    ///
    /// Returns `None` when no packet arrived in time. A timeout is not an error.
    /// The RX FIFO is checked at least once, even if `timeout` is zero.
    fn receive(&mut self, timeout: Duration) -> Result<Option<Packet>, Self::RadioErrorType>;
}

use core::time::Duration;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, timing, Nrf24, Nrf24Error, StatusFlags};
use crate::radio::{
    prelude::{EsbFifo, EsbMode, EsbRadio, EsbStatus},
    MonotonicClock,
};
use crate::Packet;

impl<SPI, CE, DELAY, CLOCK> EsbRadio for Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type RadioErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// See [`EsbRadio::start_transmit()`] for implementation-agnostic detail.
    ///
    /// The TX FIFO is flushed first, so only the given `packet` gets sent.
    fn start_transmit(&mut self, packet: &[u8]) -> Result<(), Self::RadioErrorType> {
        let expected = self._config.payload_width();
        if packet.len() != expected as usize {
            return Err(Nrf24Error::InvalidPacketLength {
                expected,
                actual: packet.len(),
            });
        }
        self.flush_tx()?;
        self.enter_tx()?;
        self._buf[0] = commands::W_TX_PAYLOAD;
        self._buf[1..=packet.len()].copy_from_slice(packet);
        self.spi_transfer(expected + 1)?;
        Ok(())
    }

    fn poll_transmit(&mut self) -> Result<Option<bool>, Self::RadioErrorType> {
        let status = self.read_status()?;
        if !status.tx_ds() && !status.max_rt() {
            return Ok(None);
        }
        // reset IRQ
        self.clear_status(&status)?;
        self.enter_rx()?;
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "transmit {} after {=u8} retries",
            if status.tx_ds() { "acknowledged" } else { "failed" },
            status.arc_cnt()
        );
        Ok(Some(status.tx_ds()))
    }

    /// See [`EsbRadio::transmit()`] for implementation-agnostic detail.
    ///
    /// The radio is put back into RX mode before this function returns a result.
    /// If [`RadioConfig::tx_watchdog()`](fn@crate::radio::RadioConfig::tx_watchdog) is set
    /// and no result is reported in time, the CE pin is deactivated and
    /// [`Nrf24Error::TxWatchdogExpired`] is returned.
    fn transmit(&mut self, packet: &[u8]) -> Result<bool, Self::RadioErrorType> {
        self.start_transmit(packet)?;
        let start = self.handle.now();
        loop {
            if let Some(result) = self.poll_transmit()? {
                return Ok(result);
            }
            if let Some(limit) = self._config.tx_watchdog() {
                if self.handle.now().saturating_sub(start) >= limit {
                    #[cfg(feature = "defmt")]
                    defmt::warn!(
                        "no transmit result within {=u64} us",
                        limit.as_micros() as u64
                    );
                    self.disable()?;
                    return Err(Nrf24Error::TxWatchdogExpired);
                }
            }
            self.handle.delay_us(self._config.tx_poll_interval());
        }
    }

    /// See [`EsbRadio::poll_receive()`] for implementation-agnostic detail.
    ///
    /// The RX_DR flag is cleared before the payload is read.
    fn poll_receive(&mut self) -> Result<Option<Packet>, Self::RadioErrorType> {
        let status = self.read_status()?;
        if !status.has_rx_data() {
            return Ok(None);
        }
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        let width = self._config.payload_width();
        self.spi_read(width, commands::R_RX_PAYLOAD)?;
        let packet = Packet::from_slice(&self._buf[1..=width as usize]);
        // let the radio finish sending the auto-ack
        self.handle.delay_us(timing::ACK_SETTLE_US);
        Ok(Some(packet))
    }

    fn receive(&mut self, timeout: Duration) -> Result<Option<Packet>, Self::RadioErrorType> {
        let start = self.handle.now();
        loop {
            if let Some(packet) = self.poll_receive()? {
                return Ok(Some(packet));
            }
            self.handle.delay_us(self._config.rx_poll_interval());
            if self.handle.now().saturating_sub(start) >= timeout {
                #[cfg(feature = "defmt")]
                defmt::debug!("receive timed out");
                return Ok(None);
            }
        }
    }
}

use core::time::Duration;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{MonotonicClock, Nrf24Error};

/// The hardware collaborators for one nRF24L01 radio.
///
/// The caller owns this bundle for as long as the radio is in use.
/// A [`Nrf24`](crate::radio::Nrf24) driver only ever borrows it.
///
/// The radio's CSN pin (aka Chip Select pin) shall be defined
/// when instantiating the [`SpiDevice`] object (passed to the `spi` parameter).
/// Each register exchange is exactly one SPI transaction,
/// so CSN is asserted for the exchange and released right after it.
pub struct RadioHandle<SPI, CE, DELAY, CLOCK> {
    spi: SPI,
    ce_pin: CE,
    delay_impl: DELAY,
    clock: CLOCK,
}

impl<SPI, CE, DELAY, CLOCK> RadioHandle<SPI, CE, DELAY, CLOCK> {
    pub fn new(spi: SPI, ce_pin: CE, delay_impl: DELAY, clock: CLOCK) -> Self {
        Self {
            spi,
            ce_pin,
            delay_impl,
            clock,
        }
    }

    /// Give back the collaborators passed to [`RadioHandle::new()`].
    pub fn release(self) -> (SPI, CE, DELAY, CLOCK) {
        (self.spi, self.ce_pin, self.delay_impl, self.clock)
    }
}

impl<SPI, CE, DELAY, CLOCK> RadioHandle<SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    /// Exchange `buf` with the radio in a single SPI transaction.
    ///
    /// The bytes in `buf` are clocked out and replaced in place by the bytes clocked in.
    /// The first byte in is always the radio's STATUS register, which is returned.
    ///
    /// An empty `buf` is rejected with [`Nrf24Error::TransportFault`] without touching the bus.
    pub fn transfer(&mut self, buf: &mut [u8]) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        if buf.is_empty() {
            return Err(Nrf24Error::TransportFault);
        }
        self.spi.transfer_in_place(buf).map_err(Nrf24Error::Spi)?;
        Ok(buf[0])
    }

    pub(crate) fn ce_high(&mut self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    pub(crate) fn ce_low(&mut self) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    pub(crate) fn delay_us(&mut self, us: u32) {
        self.delay_impl.delay_us(us);
    }

    pub(crate) fn now(&mut self) -> Duration {
        self.clock.now()
    }
}

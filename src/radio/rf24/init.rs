use super::{commands, mnemonics, registers, timing, InitCheck, Nrf24, Nrf24Error};
use crate::radio::{
    prelude::{EsbFifo, EsbInit, EsbMode, EsbStatus},
    MonotonicClock,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, CE, DELAY, CLOCK> EsbInit for Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// Initialize the radio's hardware using the [`RadioConfig`](crate::radio::RadioConfig)
    /// given to [`Nrf24::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        let config = self._config;

        // start from a known CE state
        self.disable()?;
        self.enable()?;

        // Set CONFIG register:
        //      IRQ events per config (all masked by default)
        //      CRC length
        //      Power up
        //      Enable PRX
        self._config_reg = config.config_reg.with_power(true).as_rx();
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        self.handle.delay_us(timing::POWER_UP_SETTLE_US);

        // only pipe 0 is used (with auto-ack)
        self.spi_write_byte(registers::EN_AA, mnemonics::PIPE0)?;
        self.spi_write_byte(registers::EN_RXADDR, mnemonics::PIPE0)?;
        self.spi_write_byte(registers::SETUP_AW, config.address_width().into_bits())?;
        self.spi_write_byte(registers::SETUP_RETR, config.auto_retries.into_bits())?;
        self.spi_write_byte(registers::RF_CH, config.channel())?;
        self.spi_write_byte(registers::RF_SETUP, config.rf_setup.into_bits())?;

        let address = config.address();
        self.spi_write_buf(registers::RX_ADDR_P0, address)?;
        let width = address.len();
        self.spi_read(width as u8, commands::R_REGISTER | registers::RX_ADDR_P0)?;
        if &self._buf[1..=width] != address {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "RX_ADDR_P0 reads {=[u8]}, expected {=[u8]}",
                &self._buf[1..=width],
                address
            );
            return Err(Nrf24Error::InitVerificationFailed(InitCheck::RxAddress));
        }
        self.spi_write_buf(registers::TX_ADDR, address)?;
        self.spi_write_byte(registers::RX_PW_P0, config.payload_width())?;

        self.flush_tx()?;
        self.flush_rx()?;

        // clear any latched events
        let status = self.read_status()?;
        self.clear_status(&status)?;

        let status = self.read_status()?;
        if status.has_rx_data() || status.tx_ds() || status.max_rt() {
            #[cfg(feature = "defmt")]
            defmt::warn!("STATUS not clean after init: {}", status);
            return Err(Nrf24Error::InitVerificationFailed(InitCheck::CleanStatus));
        }
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "radio initialized on channel {=u8} with {=u8} byte payloads",
            config.channel(),
            config.payload_width()
        );
        Ok(())
    }
}

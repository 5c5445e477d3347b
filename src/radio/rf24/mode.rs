use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbMode, MonotonicClock, Nrf24, Nrf24Error};
use crate::OperatingMode;

use super::{bit_fields::Config, registers, timing};

impl<SPI, CE, DELAY, CLOCK> Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    /// Shared by [`EsbMode::enter_tx()`] and [`EsbMode::enter_rx()`].
    fn enter_mode(
        &mut self,
        target: OperatingMode,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        let as_rx = target == OperatingMode::Receive;
        self.disable()?;
        let current = Config::from_bits(self.read_register(registers::CONFIG)?);
        // RX mode is always rewritten; TX mode only when PRIM_RX is set or PWR_UP is clear
        if as_rx || current.is_rx() || !current.power() {
            let next = if as_rx { current.as_rx() } else { current.as_tx() };
            self.spi_write_byte(registers::CONFIG, next.with_power(true).into_bits())?;
            if !current.power() {
                self.handle.delay_us(timing::POWER_UP_SETTLE_US);
            }
        }
        self.enable()?;

        self._config_reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        // a powered down radio never reports a TX or RX event
        if self._config_reg.is_rx() != as_rx || !self._config_reg.power() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "CONFIG {=u8:#x} does not match {} mode",
                self._config_reg.into_bits(),
                target
            );
            return Err(Nrf24Error::ModeTransitionFailed(target));
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("entered {} mode", target);
        Ok(())
    }
}

impl<SPI, CE, DELAY, CLOCK> EsbMode for Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type ModeErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn enable(&mut self) -> Result<(), Self::ModeErrorType> {
        self.handle.ce_high()?;
        self._ce_active = true;
        self.handle.delay_us(timing::CE_SETTLE_US);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::ModeErrorType> {
        self.handle.ce_low()?;
        self._ce_active = false;
        Ok(())
    }

    fn enter_tx(&mut self) -> Result<(), Self::ModeErrorType> {
        self.enter_mode(OperatingMode::Transmit)
    }

    fn enter_rx(&mut self) -> Result<(), Self::ModeErrorType> {
        self.enter_mode(OperatingMode::Receive)
    }

    fn mode(&self) -> OperatingMode {
        if !self._ce_active {
            OperatingMode::Standby
        } else if self._config_reg.is_rx() {
            OperatingMode::Receive
        } else {
            OperatingMode::Transmit
        }
    }

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::ModeErrorType> {
        self.disable()?; // Guarantee CE is low on power down
        self._config_reg = self._config_reg.with_power(false);
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())
    }

    fn power_up(&mut self) -> Result<(), Self::ModeErrorType> {
        if self._config_reg.power() {
            return Ok(());
        }
        self._config_reg = self._config_reg.with_power(true);
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())?;
        self.handle.delay_us(timing::POWER_UP_SETTLE_US);
        Ok(())
    }

    fn is_powered(&self) -> bool {
        self._config_reg.power()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbMode};
    use crate::{
        radio::{rf24::commands, Nrf24, Nrf24Error, RadioConfig},
        spi_test_expects,
        test::mk_radio,
        OperatingMode,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn enable_waits_for_settle() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut mocks = mk_radio(&ce_expectations, &[]);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        assert_eq!(radio.mode(), OperatingMode::Standby);
        radio.enable().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Transmit);
        radio.disable().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Standby);
        assert_eq!(mocks.3.delays_us(), vec![130]);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_tx() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            // read CONFIG (PRIM_RX is set)
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Fu8]),
            // clear PRIM_RX flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Eu8],
                vec![0xEu8, 0u8],
            ),
            // verify CONFIG
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.enter_tx().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Transmit);
        assert!(radio.is_powered());
        assert_eq!(mocks.3.delays_us(), vec![130]);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_tx_failed() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Fu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Eu8],
                vec![0xEu8, 0u8],
            ),
            // PRIM_RX is still set
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Fu8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        assert_eq!(
            radio.enter_tx(),
            Err(Nrf24Error::ModeTransitionFailed(OperatingMode::Transmit))
        );
        assert_eq!(radio.mode(), OperatingMode::Receive);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_tx_powers_up() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            // read CONFIG (powered down, PRIM_RX clear)
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Cu8]),
            // set PWR_UP flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Eu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.enter_tx().unwrap();
        assert!(radio.is_powered());
        assert_eq!(radio.mode(), OperatingMode::Transmit);
        assert_eq!(mocks.3.delays_us(), vec![1500, 130]);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_rx_still_powered_down() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Cu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Fu8],
                vec![0xEu8, 0u8],
            ),
            // PWR_UP did not stick
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Du8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        assert_eq!(
            radio.enter_rx(),
            Err(Nrf24Error::ModeTransitionFailed(OperatingMode::Receive))
        );
        assert!(!radio.is_powered());
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_tx_already_tx() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            // read CONFIG (PRIM_RX is already clear; nothing to write)
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
            // verify CONFIG
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.enter_tx().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Transmit);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_rx() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
            // assert PRIM_RX flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Fu8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.enter_rx().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Receive);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn enter_rx_failed() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Fu8],
                vec![0xEu8, 0u8],
            ),
            // the write did not stick
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0x7Eu8]),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        assert_eq!(
            radio.enter_rx(),
            Err(Nrf24Error::ModeTransitionFailed(OperatingMode::Receive))
        );
        assert_eq!(radio.mode(), OperatingMode::Transmit);
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn power_up_and_down() {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            // set PWR_UP flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Eu8],
                vec![0xEu8, 0u8],
            ),
            // clear PWR_UP flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Cu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.power_up().unwrap();
        assert!(radio.is_powered());
        // already powered up; no SPI traffic
        radio.power_up().unwrap();
        radio.power_down().unwrap();
        assert!(!radio.is_powered());
        assert_eq!(radio.mode(), OperatingMode::Standby);
        assert_eq!(mocks.3.delays_us(), vec![1500]);
        mocks.1.done();
        mocks.2.done();
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{
    prelude::{EsbFifo, EsbStatus},
    MonotonicClock, Nrf24, Nrf24Error,
};
use crate::Fifo;

use super::commands;

impl<SPI, CE, DELAY, CLOCK> EsbFifo for Nrf24<'_, SPI, CE, DELAY, CLOCK>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type FifoErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)?;
        let status = self.read_status()?;
        if !status.rx_empty() || status.rx_full() {
            #[cfg(feature = "defmt")]
            defmt::warn!("RX FIFO not empty after flush: {}", status);
            return Err(Nrf24Error::FlushFailed(Fifo::Rx));
        }
        Ok(())
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)?;
        let status = self.read_status()?;
        if !status.tx_empty() || status.tx_full() {
            #[cfg(feature = "defmt")]
            defmt::warn!("TX FIFO not empty after flush: {}", status);
            return Err(Nrf24Error::FlushFailed(Fifo::Tx));
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, EsbFifo};
    use crate::{
        radio::{registers, Nrf24, Nrf24Error, RadioConfig},
        spi_test_expects,
        test::mk_radio,
        Fifo,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn flush_rx() {
        let spi_expectations = spi_test_expects![
            // flush RX FIFO
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            // read status registers
            (
                vec![registers::FIFO_STATUS, commands::NOP],
                vec![0xEu8, 0x11u8],
            ),
            (vec![registers::OBSERVE_TX, commands::NOP], vec![0xEu8, 0u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.flush_rx().unwrap();
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn flush_tx() {
        let spi_expectations = spi_test_expects![
            // flush TX FIFO
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            // read status registers (RX FIFO is not empty, but that doesn't matter here)
            (
                vec![registers::FIFO_STATUS, commands::NOP],
                vec![0xEu8, 0x10u8],
            ),
            (vec![registers::OBSERVE_TX, commands::NOP], vec![0xEu8, 0u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        radio.flush_tx().unwrap();
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn flush_tx_failed() {
        let spi_expectations = spi_test_expects![
            (vec![commands::FLUSH_TX], vec![0xFu8]),
            // TX FIFO still full
            (
                vec![registers::FIFO_STATUS, commands::NOP],
                vec![0xFu8, 0x21u8],
            ),
            (vec![registers::OBSERVE_TX, commands::NOP], vec![0xFu8, 0u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        assert_eq!(radio.flush_tx(), Err(Nrf24Error::FlushFailed(Fifo::Tx)));
        mocks.1.done();
        mocks.2.done();
    }

    #[test]
    pub fn flush_rx_failed() {
        let spi_expectations = spi_test_expects![
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            // RX FIFO still holds a payload
            (
                vec![registers::FIFO_STATUS, commands::NOP],
                vec![0xEu8, 0x10u8],
            ),
            (vec![registers::OBSERVE_TX, commands::NOP], vec![0xEu8, 0u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let mut radio = Nrf24::new(&mut mocks.0, RadioConfig::default());
        assert_eq!(radio.flush_rx(), Err(Nrf24Error::FlushFailed(Fifo::Rx)));
        mocks.1.done();
        mocks.2.done();
    }
}

use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, PaLevel};

use super::mnemonics;

/// The CONFIG register.
///
/// All IRQ events are masked from the IRQ pin by default since the driver polls
/// the STATUS register instead.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Configure the radio's "RX Data Ready" IRQ event.
    #[bits(1, access = None, default = true)]
    pub rx_dr: bool,

    /// Configure the radio's "TX Data Sent" IRQ event.
    #[bits(1, access = None, default = true)]
    pub tx_ds: bool,

    /// Configure the radio's "Max Retries" IRQ event.
    #[bits(1, access = None, default = true)]
    pub max_rt: bool,

    #[bits(2, access = None, default = 3)]
    pub crc_length: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub(crate) const CRC_MASK: u8 = 0b1100;

    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits() & Self::CRC_MASK)
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_val = self.into_bits() & !Self::CRC_MASK | length.into_bits();
        Self::from_bits(new_val)
    }

    /// Is the "RX Data Ready" event routed to the IRQ pin?
    pub const fn rx_dr(&self) -> bool {
        (self.into_bits() & mnemonics::MASK_RX_DR) == 0
    }

    pub fn with_rx_dr(self, enable: bool) -> Self {
        Self::from_bits(
            self.into_bits() & !mnemonics::MASK_RX_DR | ((!enable as u8) * mnemonics::MASK_RX_DR),
        )
    }

    /// Is the "TX Data Sent" event routed to the IRQ pin?
    pub const fn tx_ds(&self) -> bool {
        (self.into_bits() & mnemonics::MASK_TX_DS) == 0
    }

    pub fn with_tx_ds(self, enable: bool) -> Self {
        Self::from_bits(
            self.into_bits() & !mnemonics::MASK_TX_DS | ((!enable as u8) * mnemonics::MASK_TX_DS),
        )
    }

    /// Is the "Max Retries" event routed to the IRQ pin?
    pub const fn max_rt(&self) -> bool {
        (self.into_bits() & mnemonics::MASK_MAX_RT) == 0
    }

    pub fn with_max_rt(self, enable: bool) -> Self {
        Self::from_bits(
            self.into_bits() & !mnemonics::MASK_MAX_RT | ((!enable as u8) * mnemonics::MASK_MAX_RT),
        )
    }

    pub fn as_rx(self) -> Self {
        Self::from_bits(self.into_bits() | mnemonics::PRIM_RX)
    }

    pub fn as_tx(self) -> Self {
        Self::from_bits(self.into_bits() & !mnemonics::PRIM_RX)
    }
}

/// The SETUP_RETR register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay`.
    #[bits(4, default = 1)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 15)]
    pub arc: u8,
}

/// The RF_SETUP register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct RfSetup {
    #[bits(2)]
    _padding: u8,

    #[bits(3, access = None, default = 1)]
    data_rate: u8,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    #[bits(1, default = true)]
    pub lna_enable: bool,
}

impl RfSetup {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.into_bits() & DataRate::MASK)
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_val = self.into_bits() & !DataRate::MASK;
        Self::from_bits(new_val | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits() & PaLevel::MASK)
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_val = self.into_bits() & !PaLevel::MASK;
        Self::from_bits(new_val | level.into_bits())
    }
}

#[cfg(test)]
mod test {
    use super::{Config, RfSetup, SetupRetry};
    use crate::{CrcLength, DataRate, PaLevel};

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.into_bits(), 0x7C);
        assert!(!config.rx_dr());
        assert!(!config.tx_ds());
        assert!(!config.max_rt());
        assert_eq!(config.crc_length(), CrcLength::Bit16);
        assert_eq!(config.with_power(true).as_rx().into_bits(), 0x7F);
    }

    #[test]
    fn config_irq_and_crc() {
        let config = Config::default()
            .with_rx_dr(true)
            .with_tx_ds(true)
            .with_max_rt(true)
            .with_crc_length(CrcLength::Bit8);
        assert_eq!(config.into_bits(), 0x08);
        assert!(config.rx_dr() && config.tx_ds() && config.max_rt());
        assert_eq!(config.as_rx().as_tx(), config);
    }

    #[test]
    fn setup_retry_packing() {
        assert_eq!(SetupRetry::default().into_bits(), 0x1F);
        assert_eq!(SetupRetry::default().with_ard(5).with_arc(3).into_bits(), 0x53);
    }

    #[test]
    fn rf_setup_packing() {
        let rf_setup = RfSetup::default();
        assert_eq!(rf_setup.into_bits(), 0x0F);
        assert_eq!(rf_setup.data_rate(), DataRate::Mbps2);
        assert_eq!(rf_setup.pa_level(), PaLevel::Max);
        let rf_setup = rf_setup
            .with_data_rate(DataRate::Kbps250)
            .with_pa_level(PaLevel::Low)
            .with_lna_enable(false);
        assert_eq!(rf_setup.into_bits(), 0x22);
        assert_eq!(rf_setup.data_rate(), DataRate::Kbps250);
    }
}

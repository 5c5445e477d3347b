use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Duration,
};

use crate::radio::rf24::{
    bit_fields::{Config, RfSetup, SetupRetry},
    timing,
};
use crate::{AddressWidth, CrcLength, DataRate, PaLevel, Packet};

/// Reasons a [`RadioConfig`] value was rejected.
///
/// These are caught while building the configuration, before any SPI traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The channel must be in range [0, 63].
    Channel(u8),
    /// The address must be 3, 4 or 5 bytes long. Holds the given length.
    AddressWidth(usize),
    /// The payload width must be in range [1, 32].
    PayloadWidth(u8),
    /// The auto-retry delay must be in range [0, 15].
    RetryDelay(u8),
    /// The auto-retry count must be in range [0, 15].
    RetryCount(u8),
    /// Poll intervals must be non-zero.
    PollInterval,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigError::Channel(ch) => write!(f, "channel {ch} is not in range [0, 63]"),
            ConfigError::AddressWidth(len) => {
                write!(f, "address of {len} bytes is not 3, 4 or 5 bytes long")
            }
            ConfigError::PayloadWidth(len) => {
                write!(f, "payload width {len} is not in range [1, 32]")
            }
            ConfigError::RetryDelay(ard) => {
                write!(f, "auto-retry delay {ard} is not in range [0, 15]")
            }
            ConfigError::RetryCount(arc) => {
                write!(f, "auto-retry count {arc} is not in range [0, 15]")
            }
            ConfigError::PollInterval => write!(f, "poll interval must be non-zero"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::Channel(ch) => defmt::write!(fmt, "invalid channel {=u8}", ch),
            ConfigError::AddressWidth(len) => {
                defmt::write!(fmt, "invalid address length {=usize}", len)
            }
            ConfigError::PayloadWidth(len) => {
                defmt::write!(fmt, "invalid payload width {=u8}", len)
            }
            ConfigError::RetryDelay(ard) => defmt::write!(fmt, "invalid retry delay {=u8}", ard),
            ConfigError::RetryCount(arc) => defmt::write!(fmt, "invalid retry count {=u8}", arc),
            ConfigError::PollInterval => defmt::write!(fmt, "invalid poll interval"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// Setters that take a bounded value return a [`ConfigError`] when the value is out of range.
/// ```ignore
/// let config = RadioConfig::default()
///     .with_channel(42)?
///     .with_address(b"1Node")?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) auto_retries: SetupRetry,
    pub(crate) rf_setup: RfSetup,
    channel: u8,
    address: [u8; 5],
    address_width: AddressWidth,
    payload_width: u8,
    tx_poll_us: u32,
    rx_poll_us: u32,
    tx_watchdog: Option<Duration>,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `2` |
    /// | [`RadioConfig::address()`] | `[0xDD, 0xAA, 0x33]` |
    /// | [`RadioConfig::address_width()`] | [`AddressWidth::Bytes3`] |
    /// | [`RadioConfig::payload_width()`] | `32` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::lna_enable()`] | `true` |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps2`] |
    /// | [`RadioConfig::auto_retry_delay()`] | `1` |
    /// | [`RadioConfig::auto_retry_count()`] | `15` |
    /// | [`RadioConfig::rx_dr()`] | `false` |
    /// | [`RadioConfig::tx_ds()`] | `false` |
    /// | [`RadioConfig::max_rt()`] | `false` |
    /// | [`RadioConfig::tx_poll_interval()`] | `500` microseconds |
    /// | [`RadioConfig::rx_poll_interval()`] | `5000` microseconds |
    /// | [`RadioConfig::tx_watchdog()`] | `None` |
    fn default() -> Self {
        Self {
            /*
               - all events masked from the IRQ pin
               - 16 bit CRC
               - powered down
               - inactive TX (StandBy-I) mode
            */
            config_reg: Config::default(),
            /*
               - 1 * 250 + 250 = 500 us delay between attempts
               - 15 max attempts
            */
            auto_retries: SetupRetry::default(),
            /*
                - 2 Mbps data rate
                - Max PA level
                - LNA enabled
            */
            rf_setup: RfSetup::default(),
            channel: 2,
            address: [0xDD, 0xAA, 0x33, 0, 0],
            address_width: AddressWidth::Bytes3,
            payload_width: Packet::MAX_LEN as u8,
            tx_poll_us: timing::TX_POLL_US,
            rx_poll_us: timing::RX_POLL_US,
            tx_watchdog: None,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_config = self.config_reg.with_crc_length(length);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.rf_setup.data_rate()
    }

    /// The Data Rate (over the air).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_config = self.rf_setup.with_data_rate(data_rate);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.rf_setup.pa_level()
    }

    /// The Power Amplitude (PA) level.
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_config = self.rf_setup.with_pa_level(level);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_lna_enable()`].
    pub const fn lna_enable(&self) -> bool {
        self.rf_setup.lna_enable()
    }

    /// Enable or disable the chip's Low Noise Amplifier (LNA) feature.
    ///
    /// This value may not be respected depending on the radio module used.
    /// Consult the radio's manufacturer for accurate details.
    pub fn with_lna_enable(self, enable: bool) -> Self {
        let new_config = self.rf_setup.with_lna_enable(enable);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// The `channel` must be in range [0, 63].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, channel: u8) -> Result<Self, ConfigError> {
        if channel > 63 {
            return Err(ConfigError::Channel(channel));
        }
        Ok(Self { channel, ..self })
    }

    /// Returns the address set by [`RadioConfig::with_address()`].
    ///
    /// The returned slice is [`RadioConfig::address_width()`] bytes long.
    pub fn address(&self) -> &[u8] {
        &self.address[..self.address_width.bytes()]
    }

    /// Returns the address width implied by [`RadioConfig::with_address()`].
    pub const fn address_width(&self) -> AddressWidth {
        self.address_width
    }

    /// The address used for both receiving (pipe 0) and transmitting.
    ///
    /// The length of `address` sets the radio's address width,
    /// so it must be 3, 4 or 5 bytes long.
    /// Addresses are sent over the air least significant byte first.
    pub fn with_address(self, address: &[u8]) -> Result<Self, ConfigError> {
        let address_width =
            AddressWidth::from_len(address.len()).ok_or(ConfigError::AddressWidth(address.len()))?;
        let mut buf = [0u8; 5];
        buf[..address.len()].copy_from_slice(address);
        Ok(Self {
            address: buf,
            address_width,
            ..self
        })
    }

    /// Returns the value set by [`RadioConfig::with_payload_width()`].
    pub const fn payload_width(&self) -> u8 {
        self.payload_width
    }

    /// The fixed size of every packet sent or received.
    ///
    /// The `width` must be in range [1, 32].
    pub fn with_payload_width(self, width: u8) -> Result<Self, ConfigError> {
        if width == 0 || width as usize > Packet::MAX_LEN {
            return Err(ConfigError::PayloadWidth(width));
        }
        Ok(Self {
            payload_width: width,
            ..self
        })
    }

    /// The auto-retry feature's `delay` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// The auto-retry feature's `count` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set the auto-retry feature's `delay` and `count` parameters.
    ///
    /// - `delay` is in range [0, 15]. The time between attempts is
    ///   `delay * 250 + 250` microseconds.
    /// - `count` is in range [0, 15]. This is the number of retransmissions attempted
    ///   before a transmission is considered failed.
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Result<Self, ConfigError> {
        if delay > 15 {
            return Err(ConfigError::RetryDelay(delay));
        }
        if count > 15 {
            return Err(ConfigError::RetryCount(count));
        }
        let new_config = self.auto_retries.with_ard(delay).with_arc(count);
        Ok(Self {
            auto_retries: new_config,
            ..self
        })
    }

    /// Get the value set by [`RadioConfig::with_rx_dr()`].
    pub const fn rx_dr(&self) -> bool {
        self.config_reg.rx_dr()
    }

    /// Enable or disable the "RX Data Ready" event triggering the radio's IRQ pin.
    ///
    /// The driver never waits on the IRQ pin, so this only matters to
    /// an application that watches the pin itself.
    pub fn with_rx_dr(self, enable: bool) -> Self {
        let new_config = self.config_reg.with_rx_dr(enable);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Get the value set by [`RadioConfig::with_tx_ds()`].
    pub const fn tx_ds(&self) -> bool {
        self.config_reg.tx_ds()
    }

    /// Enable or disable the "TX Data Sent" event triggering the radio's IRQ pin.
    pub fn with_tx_ds(self, enable: bool) -> Self {
        let new_config = self.config_reg.with_tx_ds(enable);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Get the value set by [`RadioConfig::with_max_rt()`].
    pub const fn max_rt(&self) -> bool {
        self.config_reg.max_rt()
    }

    /// Enable or disable the "Max Retries" event triggering the radio's IRQ pin.
    pub fn with_max_rt(self, enable: bool) -> Self {
        let new_config = self.config_reg.with_max_rt(enable);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_tx_poll_interval()`] (in microseconds).
    pub const fn tx_poll_interval(&self) -> u32 {
        self.tx_poll_us
    }

    /// How long to sleep (in microseconds) between status polls
    /// while waiting for a transmission to finish.
    pub fn with_tx_poll_interval(self, us: u32) -> Result<Self, ConfigError> {
        if us == 0 {
            return Err(ConfigError::PollInterval);
        }
        Ok(Self {
            tx_poll_us: us,
            ..self
        })
    }

    /// Returns the value set by [`RadioConfig::with_rx_poll_interval()`] (in microseconds).
    pub const fn rx_poll_interval(&self) -> u32 {
        self.rx_poll_us
    }

    /// How long to sleep (in microseconds) between status polls
    /// while waiting for a packet.
    ///
    /// This is also the granularity of the receive timeout.
    pub fn with_rx_poll_interval(self, us: u32) -> Result<Self, ConfigError> {
        if us == 0 {
            return Err(ConfigError::PollInterval);
        }
        Ok(Self {
            rx_poll_us: us,
            ..self
        })
    }

    /// Returns the value set by [`RadioConfig::with_tx_watchdog()`].
    pub const fn tx_watchdog(&self) -> Option<Duration> {
        self.tx_watchdog
    }

    /// An upper bound on how long a transmission may wait for a result.
    ///
    /// Normally the radio's auto-retry budget bounds a transmission,
    /// but a radio that stops answering on the SPI bus never reports a result.
    /// With `None` (the default), transmitting blocks until the radio reports
    /// either an ACK or the exhausted retries.
    pub fn with_tx_watchdog(self, limit: Option<Duration>) -> Self {
        Self {
            tx_watchdog: limit,
            ..self
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{ConfigError, RadioConfig};
    use crate::{AddressWidth, CrcLength, DataRate, PaLevel};
    use core::time::Duration;
    use std::{format, string::String};

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.channel(), 2);
        assert_eq!(config.address(), &[0xDDu8, 0xAA, 0x33]);
        assert_eq!(config.address_width(), AddressWidth::Bytes3);
        assert_eq!(config.payload_width(), 32);
        assert_eq!(config.auto_retry_delay(), 1);
        assert_eq!(config.auto_retry_count(), 15);
        assert_eq!(config.data_rate(), DataRate::Mbps2);
        assert_eq!(config.pa_level(), PaLevel::Max);
        assert!(config.lna_enable());
        assert_eq!(config.crc_length(), CrcLength::Bit16);
        assert!(!config.rx_dr());
        assert!(!config.tx_ds());
        assert!(!config.max_rt());
        assert_eq!(config.tx_poll_interval(), 500);
        assert_eq!(config.rx_poll_interval(), 5000);
        assert_eq!(config.tx_watchdog(), None);
    }

    #[test]
    fn channel() {
        let config = RadioConfig::default().with_channel(63).unwrap();
        assert_eq!(config.channel(), 63);
        assert_eq!(
            RadioConfig::default().with_channel(64),
            Err(ConfigError::Channel(64))
        );
    }

    #[test]
    fn address() {
        let config = RadioConfig::default()
            .with_address(&[0xDD, 0xAA, 0xC4])
            .unwrap();
        assert_eq!(config.address(), &[0xDDu8, 0xAA, 0xC4]);
        assert_eq!(config.address_width(), AddressWidth::Bytes3);

        let config = config.with_address(b"1Node").unwrap();
        assert_eq!(config.address(), b"1Node");
        assert_eq!(config.address_width(), AddressWidth::Bytes5);

        assert_eq!(
            config.with_address(&[1, 2]),
            Err(ConfigError::AddressWidth(2))
        );
        assert_eq!(
            config.with_address(&[0; 6]),
            Err(ConfigError::AddressWidth(6))
        );
    }

    #[test]
    fn payload_width() {
        let config = RadioConfig::default().with_payload_width(1).unwrap();
        assert_eq!(config.payload_width(), 1);
        assert_eq!(
            config.with_payload_width(0),
            Err(ConfigError::PayloadWidth(0))
        );
        assert_eq!(
            config.with_payload_width(33),
            Err(ConfigError::PayloadWidth(33))
        );
    }

    #[test]
    fn auto_retries() {
        let config = RadioConfig::default().with_auto_retries(15, 0).unwrap();
        assert_eq!(config.auto_retry_delay(), 15);
        assert_eq!(config.auto_retry_count(), 0);
        assert_eq!(config.auto_retries.into_bits(), 0xF0);
        assert_eq!(
            config.with_auto_retries(16, 0),
            Err(ConfigError::RetryDelay(16))
        );
        assert_eq!(
            config.with_auto_retries(0, 16),
            Err(ConfigError::RetryCount(16))
        );
    }

    #[test]
    fn rf_setup() {
        let config = RadioConfig::default()
            .with_data_rate(DataRate::Mbps1)
            .with_pa_level(PaLevel::Min)
            .with_lna_enable(false);
        assert_eq!(config.data_rate(), DataRate::Mbps1);
        assert_eq!(config.pa_level(), PaLevel::Min);
        assert!(!config.lna_enable());
        assert_eq!(config.rf_setup.into_bits(), 0);
    }

    #[test]
    fn irq_events() {
        let config = RadioConfig::default()
            .with_rx_dr(true)
            .with_tx_ds(true)
            .with_max_rt(false)
            .with_crc_length(CrcLength::Bit8);
        assert!(config.rx_dr());
        assert!(config.tx_ds());
        assert!(!config.max_rt());
        assert_eq!(config.crc_length(), CrcLength::Bit8);
        assert_eq!(config.config_reg.into_bits(), 0x18);
    }

    #[test]
    fn polling() {
        let config = RadioConfig::default()
            .with_tx_poll_interval(250)
            .unwrap()
            .with_rx_poll_interval(1000)
            .unwrap()
            .with_tx_watchdog(Some(Duration::from_millis(100)));
        assert_eq!(config.tx_poll_interval(), 250);
        assert_eq!(config.rx_poll_interval(), 1000);
        assert_eq!(config.tx_watchdog(), Some(Duration::from_millis(100)));
        assert_eq!(
            config.with_rx_poll_interval(0),
            Err(ConfigError::PollInterval)
        );
    }

    #[test]
    fn display_errors() {
        assert_eq!(
            format!("{}", ConfigError::Channel(100)),
            String::from("channel 100 is not in range [0, 63]")
        );
        assert_eq!(
            format!("{}", ConfigError::AddressWidth(6)),
            String::from("address of 6 bytes is not 3, 4 or 5 bytes long")
        );
    }
}

#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`RadioHandle::new()`](fn@crate::radio::RadioHandle::new)
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::init()`](radio/struct.Nrf24.html#method.init)
//! - [`Nrf24::transmit()`](radio/struct.Nrf24.html#method.transmit)
//! - [`Nrf24::receive()`](radio/struct.Nrf24.html#method.receive)
//!
//! ## Advanced API
//!
//! - [`Nrf24::start_transmit()`](radio/struct.Nrf24.html#method.start_transmit)
//! - [`Nrf24::poll_transmit()`](radio/struct.Nrf24.html#method.poll_transmit)
//! - [`Nrf24::poll_receive()`](radio/struct.Nrf24.html#method.poll_receive)
//! - [`Nrf24::read_status()`](radio/struct.Nrf24.html#method.read_status)
//! - [`Nrf24::clear_status()`](radio/struct.Nrf24.html#method.clear_status)
//! - [`Nrf24::clear_status_flags()`](radio/struct.Nrf24.html#method.clear_status_flags)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::enter_rx()`](radio/struct.Nrf24.html#method.enter_rx)
//! - [`Nrf24::enter_tx()`](radio/struct.Nrf24.html#method.enter_tx)
//! - [`Nrf24::enable()`](radio/struct.Nrf24.html#method.enable)
//! - [`Nrf24::disable()`](radio/struct.Nrf24.html#method.disable)
//! - [`Nrf24::power_down()`](radio/struct.Nrf24.html#method.power_down)
//! - [`Nrf24::power_up()`](radio/struct.Nrf24.html#method.power_up)
//! - [`RadioHandle::transfer()`](fn@crate::radio::RadioHandle::transfer)
//!
//! ## Configuration API
//!
//! - [`RadioConfig::with_channel()`](fn@crate::radio::RadioConfig::with_channel)
//! - [`RadioConfig::with_address()`](fn@crate::radio::RadioConfig::with_address)
//! - [`RadioConfig::with_payload_width()`](fn@crate::radio::RadioConfig::with_payload_width)
//! - [`RadioConfig::with_auto_retries()`](fn@crate::radio::RadioConfig::with_auto_retries)
//! - [`RadioConfig::with_data_rate()`](fn@crate::radio::RadioConfig::with_data_rate)
//! - [`RadioConfig::with_pa_level()`](fn@crate::radio::RadioConfig::with_pa_level)
//! - [`RadioConfig::with_lna_enable()`](fn@crate::radio::RadioConfig::with_lna_enable)
//! - [`RadioConfig::with_crc_length()`](fn@crate::radio::RadioConfig::with_crc_length)
//! - [`RadioConfig::with_tx_poll_interval()`](fn@crate::radio::RadioConfig::with_tx_poll_interval)
//! - [`RadioConfig::with_rx_poll_interval()`](fn@crate::radio::RadioConfig::with_rx_poll_interval)
//! - [`RadioConfig::with_tx_watchdog()`](fn@crate::radio::RadioConfig::with_tx_watchdog)
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod types;
pub use types::{AddressWidth, CrcLength, DataRate, Fifo, OperatingMode, PaLevel, Packet};
pub mod radio;
pub use radio::{FifoStatus, ObserveTx, StatusFlags, StatusSnapshot};

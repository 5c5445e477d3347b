//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod rf24;
pub use rf24::{
    commands, mnemonics, registers, timing, FifoStatus, InitCheck, Nrf24, Nrf24Error, ObserveTx,
    ProtocolViolation, StatusFlags, StatusSnapshot,
};

mod config;
pub use config::{ConfigError, RadioConfig};

mod clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::MonotonicClock;

mod handle;
pub use handle::RadioHandle;

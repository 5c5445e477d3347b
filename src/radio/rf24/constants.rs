/// A module encapsulating register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_ADDR_P2: u8 = 0x0C;
    pub const RX_ADDR_P3: u8 = 0x0D;
    pub const RX_ADDR_P4: u8 = 0x0E;
    pub const RX_ADDR_P5: u8 = 0x0F;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const RX_PW_P2: u8 = 0x13;
    pub const RX_PW_P3: u8 = 0x14;
    pub const RX_PW_P4: u8 = 0x15;
    pub const RX_PW_P5: u8 = 0x16;
    pub const FIFO_STATUS: u8 = 0x17;
}

/// A module encapsulating SPI commands for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// A module to encapsulate bit mnemonics
pub mod mnemonics {
    /// The STATUS register's reserved bit. Always reads as 0 on a healthy bus.
    pub const STATUS_RESERVED: u8 = 1 << 7;
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
    /// The CONFIG register's receive-select bit.
    pub const PRIM_RX: u8 = 1;
    /// Auto-ack and RX address enable bit for pipe 0.
    pub const PIPE0: u8 = 1;
    /// The RX_P_NO value reported when the RX FIFO is empty.
    pub const RX_PIPE_EMPTY: u8 = 7;
}

/// A module to encapsulate the radio's timing requirements (in microseconds).
pub mod timing {
    /// Time needed after CE goes high before the radio starts RF activity.
    pub const CE_SETTLE_US: u32 = 130;
    /// Time needed after setting PWR_UP before the radio core is usable.
    pub const POWER_UP_SETTLE_US: u32 = 1500;
    /// Time given to the radio to send an automatic ACK after a payload is read.
    pub const ACK_SETTLE_US: u32 = 100;
    /// Default interval between status polls while waiting on a transmission.
    pub const TX_POLL_US: u32 = 500;
    /// Default interval between status polls while waiting for a payload.
    pub const RX_POLL_US: u32 = 5000;
}

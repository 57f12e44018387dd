//! Line-Token Link Protocol
//!
//! This crate defines the wire-level pieces of the link between a BBC
//! micro:bit and its peer (a serial host or a BLE UART central). The link
//! carries plain text, one token per line:
//!
//! ```text
//!  byte stream:   t e m p : 2 1 \n  b t n : A \n  p a r t i a
//!                 └───────┬──────┘  └────┬────┘  └────┬────
//!  tokens:           "temp:21"        "btn:A"     (buffered)
//! ```
//!
//! Transports deliver bytes in chunks at arbitrary boundaries; the
//! [`LineFramer`] reassembles them into whole tokens regardless of how
//! the stream was split. Outbound text goes through [`Command`], which
//! strips stray line breaks and appends the terminator.

#![no_std]
#![deny(unsafe_code)]

pub mod ble;
pub mod command;
pub mod framing;

pub use ble::{UART_MTU, UART_RX_CHARACTERISTIC_UUID, UART_SERVICE_UUID, UART_TX_CHARACTERISTIC_UUID};
pub use command::{Command, CommandError, MAX_COMMAND_LEN};
pub use framing::{LineFramer, TokenError, TokenSink, DELIMITER, MAX_TOKEN_LEN};

//! BLE UART service identifiers
//!
//! The micro:bit exposes the Nordic UART service over GATT. Connection
//! setup (scanning, pairing, characteristic discovery) belongs to the
//! BLE stack in use; this module only pins down the identifiers and the
//! payload limit so transports agree on them.
//!
//! Note the characteristic orientation: on the micro:bit, 0x6e400002 is
//! the device-transmit characteristic (notifications towards the
//! client) and 0x6e400003 accepts writes from the client.

/// UART service
pub const UART_SERVICE_UUID: u128 = 0x6e400001_b5a3_f393_e0a9_e50e24dcca9e;

/// Characteristic the micro:bit transmits on
pub const UART_TX_CHARACTERISTIC_UUID: u128 = 0x6e400002_b5a3_f393_e0a9_e50e24dcca9e;

/// Characteristic a connected client writes to
pub const UART_RX_CHARACTERISTIC_UUID: u128 = 0x6e400003_b5a3_f393_e0a9_e50e24dcca9e;

/// Canonical dashed forms, for stacks that address GATT by string
pub const UART_SERVICE_UUID_STR: &str = "6e400001-b5a3-f393-e0a9-e50e24dcca9e";
pub const UART_TX_CHARACTERISTIC_UUID_STR: &str = "6e400002-b5a3-f393-e0a9-e50e24dcca9e";
pub const UART_RX_CHARACTERISTIC_UUID_STR: &str = "6e400003-b5a3-f393-e0a9-e50e24dcca9e";

/// Maximum payload per notification or write, in bytes
pub const UART_MTU: usize = 20;

//! Link transport abstractions
//!
//! Provides traits for the byte transports that carry the token stream.
//! Transports deliver bytes in order; chunk boundaries carry no meaning.

/// Link transmitter
///
/// Trait for sending bytes towards the peer.
pub trait LinkTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the transport
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Link receiver
///
/// Trait for receiving bytes from the peer.
pub trait LinkRx {
    /// Error type for receive operations
    type Error;

    /// Read available bytes into the buffer
    ///
    /// Blocks until at least one byte is available or an error occurs.
    /// Returns the number of bytes read; the split into reads is up to
    /// the transport.
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte from the transport
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read_blocking(&mut buf)?;
        Ok(buf[0])
    }
}

/// Combined bidirectional transport
///
/// For transports that provide both directions on a single handle.
pub trait LinkPort: LinkTx + LinkRx {}

// Blanket implementation
impl<T: LinkTx + LinkRx> LinkPort for T {}

/// Serial transport configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for LinkConfig {
    fn default() -> Self {
        // The micro:bit talks 115200 8N1 on its edge-connector UART
        Self {
            baudrate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

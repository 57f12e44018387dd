//! Outbound command encoding.
//!
//! Commands travel as single lines: any CR/LF bytes inside the text are
//! stripped, then one terminating line feed is appended. The peer's
//! framer sees exactly one token per command.

use heapless::Vec;

use crate::framing::DELIMITER;

/// Carriage return, stripped from outbound text alongside the delimiter
const CR: u8 = 0x0D;

/// Maximum encoded command size in bytes, terminator included
pub const MAX_COMMAND_LEN: usize = 256;

/// Errors that can occur while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Buffer too small for the encoded line
    BufferTooSmall,
}

/// A single outbound line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    text: &'a str,
}

impl<'a> Command<'a> {
    /// Create a command from raw text
    ///
    /// The text may contain stray line breaks; they are removed during
    /// encoding.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Encode this command into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, CommandError> {
        let mut len = 0;
        for &byte in self.text.as_bytes() {
            if byte == DELIMITER || byte == CR {
                continue;
            }
            if len >= buffer.len() {
                return Err(CommandError::BufferTooSmall);
            }
            buffer[len] = byte;
            len += 1;
        }

        if len >= buffer.len() {
            return Err(CommandError::BufferTooSmall);
        }
        buffer[len] = DELIMITER;

        Ok(len + 1)
    }

    /// Encode this command into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_COMMAND_LEN>, CommandError> {
        let mut buffer = [0u8; MAX_COMMAND_LEN];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| CommandError::BufferTooSmall)?;
        Ok(vec)
    }
}

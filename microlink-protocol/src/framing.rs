//! Line framing for the token stream.
//!
//! The framer accumulates bytes between delimiters and hands each
//! completed token to a [`TokenSink`]:
//! - every 0x0A byte ends a token, no matter where it falls in a chunk
//! - bytes after the last delimiter stay buffered for the next `feed`
//! - tokens are decoded as UTF-8 and trimmed before delivery
//!
//! A malformed token (bad encoding, or longer than [`MAX_TOKEN_LEN`]) is
//! reported and dropped; the buffer is reset so the stream stays aligned
//! on the following delimiter.

use heapless::Vec;

/// Token boundary byte (ASCII line feed)
pub const DELIMITER: u8 = 0x0A;

/// Maximum token size in bytes, delimiter excluded
pub const MAX_TOKEN_LEN: usize = 256;

/// Errors that can occur while completing a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenError {
    /// Buffered bytes are not valid UTF-8
    InvalidUtf8,
    /// Token exceeds [`MAX_TOKEN_LEN`] bytes
    TooLong,
}

/// Receiver for framed tokens
///
/// `token` is called once per completed token, in stream order.
/// `invalid_token` is called instead when a completed token cannot be
/// delivered; the default implementation drops it silently.
pub trait TokenSink {
    /// Receive a decoded, trimmed token
    fn token(&mut self, token: &str);

    /// A completed token was dropped
    fn invalid_token(&mut self, error: TokenError) {
        let _ = error;
    }
}

// Closures work as sinks that ignore malformed tokens
impl<F: FnMut(&str)> TokenSink for F {
    fn token(&mut self, token: &str) {
        self(token)
    }
}

/// Incremental framer for the newline-delimited token stream
///
/// Single-writer: one framer per logical byte stream. `feed` never
/// blocks and performs no I/O; chunk delivery is the transport's job.
#[derive(Debug, Clone)]
pub struct LineFramer {
    buffer: Vec<u8, MAX_TOKEN_LEN>,
    oversize: bool,
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFramer {
    /// Create a new framer with an empty buffer
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            oversize: false,
        }
    }

    /// Discard any buffered partial token
    ///
    /// Used when the transport is closed or cancelled; there is no
    /// flush-on-close.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.oversize = false;
    }

    /// Number of bytes buffered since the last emitted token
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Consume one chunk, dispatching zero or more tokens in order
    ///
    /// The chunk may be empty, may contain any number of delimiters, and
    /// may end mid-token. A delimiter with nothing buffered emits an
    /// empty token.
    pub fn feed<S: TokenSink>(&mut self, chunk: &[u8], sink: &mut S) {
        let mut rest = chunk;
        while let Some(pos) = rest.iter().position(|&b| b == DELIMITER) {
            self.buffer_part(&rest[..pos]);
            self.complete(sink);
            rest = &rest[pos + 1..];
        }
        self.buffer_part(rest);
    }

    /// Append a delimiter-free fragment to the buffer
    fn buffer_part(&mut self, part: &[u8]) {
        if self.oversize {
            // Token already condemned; skip bytes until its delimiter
            return;
        }
        if self.buffer.extend_from_slice(part).is_err() {
            self.buffer.clear();
            self.oversize = true;
        }
    }

    /// Emit the buffered token and reset for the next one
    fn complete<S: TokenSink>(&mut self, sink: &mut S) {
        if self.oversize {
            sink.invalid_token(TokenError::TooLong);
        } else {
            match core::str::from_utf8(&self.buffer) {
                Ok(text) => sink.token(text.trim()),
                Err(_) => sink.invalid_token(TokenError::InvalidUtf8),
            }
        }
        self.buffer.clear();
        self.oversize = false;
    }
}

//! Transport read pump
//!
//! The receive path of the bridge: one `poll` reads a chunk from the
//! transport and pushes whatever tokens it completes into the sink. The
//! surrounding loop (and its cancellation) belongs to the caller, which
//! keeps the framer free of any I/O mechanism.

use microlink_hal::LinkRx;
use microlink_protocol::{LineFramer, TokenSink};

/// Bytes read from the transport per poll
pub const READ_CHUNK: usize = 64;

/// Read pump coupling a receiver to the line framer
pub struct Pump {
    framer: LineFramer,
}

impl Default for Pump {
    fn default() -> Self {
        Self::new()
    }
}

impl Pump {
    /// Create a pump with an empty framer
    pub fn new() -> Self {
        Self {
            framer: LineFramer::new(),
        }
    }

    /// Read one chunk and dispatch any completed tokens
    ///
    /// Returns the number of bytes read. Transport errors propagate to
    /// the caller; buffered state is untouched, so a recovered
    /// transport resumes mid-token.
    pub fn poll<R: LinkRx, S: TokenSink>(
        &mut self,
        rx: &mut R,
        sink: &mut S,
    ) -> Result<usize, R::Error> {
        let mut buf = [0u8; READ_CHUNK];
        let n = rx.read_blocking(&mut buf)?;
        self.framer.feed(&buf[..n], sink);
        Ok(n)
    }

    /// Bytes buffered towards the next token
    pub fn pending(&self) -> usize {
        self.framer.pending()
    }

    /// Discard the buffered partial token
    ///
    /// Called when the transport is closed or the read loop cancelled;
    /// partial tokens are never flushed.
    pub fn reset(&mut self) {
        self.framer.reset();
    }
}

//! Caller-owned connection handle
//!
//! The send path of the bridge. A [`Link`] wraps an optional transport:
//! attach one to go connected, detach to go back. There is no further
//! protocol state. A failed write detaches the transport, so a broken
//! connection never lingers behind a connected-looking handle.

use microlink_hal::LinkTx;
use microlink_protocol::{Command, CommandError};

/// Connection state of a [`Link`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Disconnected,
    Connected,
}

/// Errors that can occur on the send path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<E> {
    /// No transport attached
    NotConnected,
    /// The line could not be encoded
    Encode(CommandError),
    /// The transport failed; the handle has been detached
    Io(E),
}

/// Connection handle owning the outbound transport
pub struct Link<T: LinkTx> {
    transport: Option<T>,
}

impl<T: LinkTx> Default for Link<T> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<T: LinkTx> Link<T> {
    /// Create a link with no transport attached
    pub fn detached() -> Self {
        Self { transport: None }
    }

    /// Attach a transport, making the link connected
    ///
    /// Any previously attached transport is dropped.
    pub fn attach(&mut self, transport: T) {
        self.transport = Some(transport);
    }

    /// Detach the transport, returning it if one was attached
    pub fn detach(&mut self) -> Option<T> {
        self.transport.take()
    }

    /// Whether a transport is currently attached
    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Current connection state
    pub fn state(&self) -> LinkState {
        if self.is_connected() {
            LinkState::Connected
        } else {
            LinkState::Disconnected
        }
    }

    /// Send one line of text to the peer
    ///
    /// The text is sanitized and newline-terminated before the write.
    /// On a transport error the link detaches itself and returns the
    /// error.
    pub fn send_line(&mut self, text: &str) -> Result<(), LinkError<T::Error>> {
        let transport = self.transport.as_mut().ok_or(LinkError::NotConnected)?;
        let bytes = Command::new(text)
            .encode_to_vec()
            .map_err(LinkError::Encode)?;

        let result = transport
            .write_blocking(&bytes)
            .and_then(|()| transport.flush());
        if let Err(error) = result {
            self.transport = None;
            return Err(LinkError::Io(error));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockTx {
        written: heapless::Vec<u8, 64>,
        fail_writes: bool,
    }

    impl LinkTx for MockTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail_writes {
                return Err(());
            }
            self.written.extend_from_slice(data).map_err(|_| ())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_send_when_detached() {
        let mut link: Link<MockTx> = Link::detached();
        assert_eq!(link.state(), LinkState::Disconnected);
        assert_eq!(link.send_line("hello"), Err(LinkError::NotConnected));
    }

    #[test]
    fn test_send_line_terminates_and_sanitizes() {
        let mut link = Link::detached();
        link.attach(MockTx::default());
        assert_eq!(link.state(), LinkState::Connected);

        link.send_line("hello").unwrap();
        link.send_line("a\r\nb").unwrap();

        let transport = link.detach().unwrap();
        assert_eq!(&transport.written[..], b"hello\nab\n");
    }

    #[test]
    fn test_write_error_detaches() {
        let mut link = Link::detached();
        link.attach(MockTx {
            fail_writes: true,
            ..MockTx::default()
        });

        assert_eq!(link.send_line("hello"), Err(LinkError::Io(())));
        assert!(!link.is_connected());
        assert_eq!(link.send_line("again"), Err(LinkError::NotConnected));
    }

    #[test]
    fn test_attach_replaces_transport() {
        let mut link = Link::detached();
        link.attach(MockTx::default());
        link.send_line("old").unwrap();

        link.attach(MockTx::default());
        link.send_line("new").unwrap();

        let transport = link.detach().unwrap();
        assert_eq!(&transport.written[..], b"new\n");
    }
}

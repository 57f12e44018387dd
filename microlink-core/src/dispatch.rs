//! Token dispatch
//!
//! Fans each received token out to the registered handler and mirrors
//! it into a readout holding the most recent value. Malformed tokens
//! are counted and dropped; dispatch itself never fails.

use heapless::String;
use microlink_protocol::{TokenError, TokenSink, MAX_TOKEN_LEN};

use crate::traits::TokenHandler;

/// Most recently dispatched token
///
/// The bridge-side equivalent of a status readout: consumers that only
/// care about the latest value read it here instead of handling every
/// token.
#[derive(Debug, Default)]
pub struct Readout {
    last: String<MAX_TOKEN_LEN>,
}

impl Readout {
    /// Create an empty readout
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest token, or an empty string before the first one
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Record a token, truncating on a char boundary if it cannot fit
    fn record(&mut self, token: &str) {
        let limit = self.last.capacity();
        let text = if token.len() <= limit {
            token
        } else {
            let mut end = limit;
            while !token.is_char_boundary(end) {
                end -= 1;
            }
            &token[..end]
        };
        self.last.clear();
        let _ = self.last.push_str(text);
    }
}

/// Token fan-out: handler first, readout second
///
/// Implements [`TokenSink`], so it plugs directly into a
/// [`LineFramer`](microlink_protocol::LineFramer) or a
/// [`Pump`](crate::pump::Pump).
pub struct Dispatcher<H: TokenHandler> {
    handler: H,
    readout: Readout,
    dropped: u32,
}

impl<H: TokenHandler> Dispatcher<H> {
    /// Create a dispatcher around a handler
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            readout: Readout::new(),
            dropped: 0,
        }
    }

    /// The readout of the latest token
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Number of malformed tokens dropped so far
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Access the wrapped handler
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H: TokenHandler> TokenSink for Dispatcher<H> {
    fn token(&mut self, token: &str) {
        self.handler.on_token(token);
        self.readout.record(token);
    }

    fn invalid_token(&mut self, _error: TokenError) {
        self.dropped = self.dropped.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use microlink_protocol::LineFramer;

    #[derive(Default)]
    struct Collecting {
        seen: heapless::Vec<heapless::String<64>, 8>,
    }

    impl TokenHandler for Collecting {
        fn on_token(&mut self, token: &str) {
            let mut copy = heapless::String::new();
            copy.push_str(token).unwrap();
            self.seen.push(copy).unwrap();
        }
    }

    #[test]
    fn test_tokens_reach_handler_and_readout() {
        let mut dispatcher = Dispatcher::new(Collecting::default());

        dispatcher.token("first");
        dispatcher.token("second");

        assert_eq!(dispatcher.handler().seen.len(), 2);
        assert_eq!(dispatcher.handler().seen[0], "first");
        assert_eq!(dispatcher.handler().seen[1], "second");
        assert_eq!(dispatcher.readout().last(), "second");
    }

    #[test]
    fn test_invalid_tokens_counted_not_dispatched() {
        let mut dispatcher = Dispatcher::new(Collecting::default());

        dispatcher.invalid_token(TokenError::InvalidUtf8);
        dispatcher.invalid_token(TokenError::TooLong);

        assert_eq!(dispatcher.dropped(), 2);
        assert!(dispatcher.handler().seen.is_empty());
        assert_eq!(dispatcher.readout().last(), "");
    }

    #[test]
    fn test_dispatcher_as_framer_sink() {
        let mut framer = LineFramer::new();
        let mut dispatcher = Dispatcher::new(Collecting::default());

        framer.feed(b"temp:21\nbtn:A\n", &mut dispatcher);

        assert_eq!(dispatcher.handler().seen.len(), 2);
        assert_eq!(dispatcher.readout().last(), "btn:A");
    }

    #[test]
    fn test_readout_empty_before_first_token() {
        let dispatcher = Dispatcher::new(Collecting::default());
        assert_eq!(dispatcher.readout().last(), "");
    }

    #[test]
    fn test_readout_truncates_on_char_boundary() {
        let mut readout = Readout::new();

        // 'a' then 129 two-byte chars: 259 bytes, and the capacity limit
        // falls in the middle of a char
        let mut long = heapless::String::<512>::new();
        long.push('a').unwrap();
        for _ in 0..129 {
            long.push('é').unwrap();
        }
        readout.record(&long);

        assert_eq!(readout.last().len(), MAX_TOKEN_LEN - 1);
        assert!(readout.last().starts_with('a'));
        assert!(readout.last().ends_with('é'));
    }
}

//! Property tests for line framing.
//!
//! The central claim: how a byte stream is split into chunks never
//! changes the token sequence. A straightforward single-pass model over
//! the whole stream serves as the reference.

use microlink_protocol::{LineFramer, TokenError, TokenSink, DELIMITER, MAX_TOKEN_LEN};
use proptest::prelude::*;

#[derive(Debug, Default, PartialEq)]
struct Output {
    tokens: Vec<String>,
    errors: Vec<TokenError>,
}

impl TokenSink for Output {
    fn token(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    fn invalid_token(&mut self, error: TokenError) {
        self.errors.push(error);
    }
}

/// Feed the stream through a framer one chunk at a time
fn framed(chunks: &[Vec<u8>]) -> Output {
    let mut framer = LineFramer::new();
    let mut output = Output::default();
    for chunk in chunks {
        framer.feed(chunk, &mut output);
    }
    output
}

/// Single-pass reference: split on the delimiter, decode and trim each
/// terminated piece, drop the unterminated tail
fn model(stream: &[u8]) -> Output {
    let mut output = Output::default();
    let mut pieces: Vec<&[u8]> = stream.split(|&b| b == DELIMITER).collect();
    pieces.pop(); // bytes after the last delimiter are never emitted

    for piece in pieces {
        if piece.len() > MAX_TOKEN_LEN {
            output.errors.push(TokenError::TooLong);
        } else {
            match std::str::from_utf8(piece) {
                Ok(text) => output.tokens.push(text.trim().to_string()),
                Err(_) => output.errors.push(TokenError::InvalidUtf8),
            }
        }
    }
    output
}

/// Byte streams biased towards interesting content: text, whitespace,
/// delimiters, and bytes that break UTF-8
fn stream_strategy() -> impl Strategy<Value = Vec<u8>> {
    let byte = prop_oneof![
        4 => proptest::char::range('a', 'z').prop_map(|c| c as u8),
        1 => Just(b' '),
        1 => Just(b'\r'),
        2 => Just(DELIMITER),
        1 => Just(0xFFu8),
    ];
    proptest::collection::vec(byte, 0..400)
}

/// Partition a stream into chunks at the given relative cut points
fn partition(stream: &[u8], cuts: &[prop::sample::Index]) -> Vec<Vec<u8>> {
    let mut points: Vec<usize> = cuts.iter().map(|ix| ix.index(stream.len() + 1)).collect();
    points.sort_unstable();
    points.dedup();

    let mut chunks = Vec::new();
    let mut start = 0;
    for point in points {
        chunks.push(stream[start..point].to_vec());
        start = point;
    }
    chunks.push(stream[start..].to_vec());
    chunks
}

proptest! {
    #[test]
    fn chunking_is_invariant(
        stream in stream_strategy(),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..16),
    ) {
        let whole = framed(&[stream.clone()]);
        let split = framed(&partition(&stream, &cuts));
        prop_assert_eq!(whole, split);
    }

    #[test]
    fn framer_matches_model(stream in stream_strategy()) {
        prop_assert_eq!(framed(&[stream.clone()]), model(&stream));
    }

    #[test]
    fn byte_at_a_time_matches_model(stream in stream_strategy()) {
        let chunks: Vec<Vec<u8>> = stream.iter().map(|&b| vec![b]).collect();
        prop_assert_eq!(framed(&chunks), model(&stream));
    }

    #[test]
    fn delimiter_only_streams_emit_only_empty_tokens(count in 0usize..64) {
        let stream = vec![DELIMITER; count];
        let output = framed(&[stream]);
        prop_assert_eq!(output.tokens.len(), count);
        prop_assert!(output.tokens.iter().all(String::is_empty));
        prop_assert!(output.errors.is_empty());
    }
}

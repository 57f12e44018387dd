//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;

use microlink_protocol::{MAX_COMMAND_LEN, MAX_TOKEN_LEN};

/// Channel capacity for received tokens
const TOKEN_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outbound lines
const OUTBOUND_CHANNEL_SIZE: usize = 8;

/// Tokens received from the peer, in emission order
pub static TOKEN_CHANNEL: Channel<CriticalSectionRawMutex, String<MAX_TOKEN_LEN>, TOKEN_CHANNEL_SIZE> =
    Channel::new();

/// Lines queued for transmission to the peer
pub static OUTBOUND_CHANNEL: Channel<
    CriticalSectionRawMutex,
    String<MAX_COMMAND_LEN>,
    OUTBOUND_CHANNEL_SIZE,
> = Channel::new();

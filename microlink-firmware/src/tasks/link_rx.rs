//! Link UART receive task
//!
//! Reads byte chunks from the UART, frames them into tokens and
//! forwards each token into the token channel.

use defmt::*;
use embassy_nrf::buffered_uarte::BufferedUarteRx;
use embedded_io_async::Read;
use heapless::String;

use microlink_core::dispatch::Dispatcher;
use microlink_core::traits::TokenHandler;
use microlink_protocol::{LineFramer, MAX_TOKEN_LEN};

use crate::channels::TOKEN_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Forwards each token into [`TOKEN_CHANNEL`], dropping when full
struct ChannelForwarder;

impl TokenHandler for ChannelForwarder {
    fn on_token(&mut self, token: &str) {
        let mut copy: String<MAX_TOKEN_LEN> = String::new();
        if copy.push_str(token).is_err() {
            warn!("Token exceeds channel item capacity, dropping");
            return;
        }
        // Drop the token if the channel is full rather than stall the UART
        if TOKEN_CHANNEL.try_send(copy).is_err() {
            warn!("Token channel full, dropping token");
        }
    }
}

/// Link RX task - frames incoming bytes and dispatches tokens
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUarteRx<'static>) {
    info!("Link RX task started");

    let mut framer = LineFramer::new();
    let mut dispatcher = Dispatcher::new(ChannelForwarder);
    let mut dropped_seen = 0;
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                framer.feed(&buf[..n], &mut dispatcher);

                let dropped = dispatcher.dropped();
                if dropped != dropped_seen {
                    warn!("Malformed tokens dropped: {}", dropped);
                    dropped_seen = dropped;
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

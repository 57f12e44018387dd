//! Link UART transmit task
//!
//! Drains the outbound channel and writes each line to the UART,
//! sanitized and newline-terminated.

use defmt::*;
use embassy_nrf::buffered_uarte::BufferedUarteTx;
use embedded_io_async::Write;

use microlink_protocol::{Command, MAX_COMMAND_LEN};

use crate::channels::OUTBOUND_CHANNEL;

/// Link TX task - sends queued lines to the peer
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUarteTx<'static>) {
    info!("Link TX task started");

    loop {
        let line = OUTBOUND_CHANNEL.receive().await;

        let mut buf = [0u8; MAX_COMMAND_LEN];
        match Command::new(&line).encode(&mut buf) {
            Ok(len) => {
                if let Err(e) = tx.write_all(&buf[..len]).await {
                    warn!("Failed to send line: {:?}", e);
                } else {
                    trace!("TX: {} bytes", len);
                }
            }
            Err(e) => {
                warn!("Line does not fit an encoded command: {:?}", e);
            }
        }
    }
}

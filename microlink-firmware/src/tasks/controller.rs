//! Application controller task
//!
//! The application end of the bridge: drains received tokens and queues
//! outbound lines. Replace the logging below with real handling; the
//! channels are the whole interface.

use defmt::*;
use heapless::String;

use microlink_protocol::MAX_COMMAND_LEN;

use crate::channels::{OUTBOUND_CHANNEL, TOKEN_CHANNEL};

/// Controller task - consumes received tokens
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    // Announce ourselves so a listening peer sees traffic right away
    let mut greeting: String<MAX_COMMAND_LEN> = String::new();
    let _ = greeting.push_str("Hello");
    OUTBOUND_CHANNEL.send(greeting).await;

    loop {
        let token = TOKEN_CHANNEL.receive().await;
        info!("Token received: {}", token.as_str());
    }
}

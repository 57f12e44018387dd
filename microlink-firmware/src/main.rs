//! Microlink Firmware
//!
//! Bridge firmware for the BBC micro:bit v2 (nRF52833). Frames the
//! edge-connector UART byte stream into newline-delimited text tokens
//! and exposes both directions as channels to application tasks.

#![no_std]
#![no_main]

mod channels;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::{bind_interrupts, peripherals, uarte};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use microlink_hal::LinkConfig;

use crate::tasks::{controller_task, link_rx_task, link_tx_task};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

/// UART ring buffer sizes
const UART_BUF_SIZE: usize = 256;

static RX_BUFFER: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static TX_BUFFER: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("Microlink firmware starting");

    let link_config = LinkConfig::default();
    let mut config = uarte::Config::default();
    config.baudrate = baudrate_of(&link_config);

    // micro:bit v2 edge connector UART: TX on P0.06, RX on P1.08
    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        Irqs,
        p.P1_08,
        p.P0_06,
        config,
        RX_BUFFER.init([0; UART_BUF_SIZE]),
        TX_BUFFER.init([0; UART_BUF_SIZE]),
    );
    let (rx, tx) = uart.split();

    spawner.spawn(link_rx_task(rx)).unwrap();
    spawner.spawn(link_tx_task(tx)).unwrap();
    spawner.spawn(controller_task()).unwrap();

    info!("Link tasks running");
}

/// Map the configured baud rate onto a UARTE divisor
///
/// The UARTE supports a fixed set of rates; unsupported values fall
/// back to the link default.
fn baudrate_of(config: &LinkConfig) -> uarte::Baudrate {
    match config.baudrate {
        9_600 => uarte::Baudrate::BAUD9600,
        31_250 => uarte::Baudrate::BAUD31250,
        38_400 => uarte::Baudrate::BAUD38400,
        57_600 => uarte::Baudrate::BAUD57600,
        _ => uarte::Baudrate::BAUD115200,
    }
}

//! Board-agnostic link logic for the Microlink bridge
//!
//! This crate contains everything between the wire protocol and a
//! concrete transport:
//!
//! - Token handler trait (the application-facing callback seam)
//! - Token dispatch with a readout of the latest token
//! - Caller-owned connection handle for the send path
//! - Read pump coupling a receiver to the line framer
//!
//! Nothing here performs I/O on its own; transports are passed in
//! through the `microlink-hal` traits.

#![no_std]
#![deny(unsafe_code)]

pub mod dispatch;
pub mod link;
pub mod pump;
pub mod traits;

pub use dispatch::{Dispatcher, Readout};
pub use link::{Link, LinkError, LinkState};
pub use pump::Pump;
pub use traits::TokenHandler;

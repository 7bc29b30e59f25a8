//! Timeout-bounded waiting for [`fifobuf`] FIFOs.
//!
//! The core FIFO never blocks. This crate adds helpers that spin on a FIFO half
//! until it has room (or items) or until a [`VirtualTimer`](timer::VirtualTimer) expires.

#![no_std]
#[cfg(feature = "std")]
extern crate std;

mod consumer;
mod error;
mod producer;
pub mod timer;
mod utils;

pub mod traits {
    pub use crate::consumer::PollingConsumer;
    pub use crate::producer::PollingProducer;
    pub use crate::timer::VirtualTimer;
}

pub use error::TimeoutError;
#[cfg(feature = "std")]
pub use timer::StdTimer;

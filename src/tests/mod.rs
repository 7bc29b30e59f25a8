use crate::StaticFifo as Fifo;

mod basic;
mod fmt_write;
mod hold;
#[cfg(feature = "std")]
mod read_write;

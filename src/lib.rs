//! Fixed-capacity FIFO ring buffer for passing data between an interrupt context and the main loop.
//!
//! The FIFO keeps two cursors over a fixed slot array: `head` is moved only by the consumer,
//! `tail` only by the producer. One slot always stays free, so a FIFO of `N` slots holds up to `N - 1` items
//! and never needs a shared counter.
//!
//! Sharing between contexts relies on cursors being updated atomically.
//! [`SharedFifo`] uses atomic cursors (see [`index::SharedIndex`] for targets without native atomics),
//! [`LocalFifo`] uses plain cells and cannot be shared at all.
//!
//! The FIFO never allocates unless built over [`storage::Heap`].
//! Pushing onto a full FIFO and popping from an empty one are caller errors:
//! check [`Observer::is_full`](traits::Observer::is_full) and [`Observer::is_empty`](traits::Observer::is_empty)
//! first, or use `try_push` / `try_pop`.

#![no_std]
#![allow(clippy::type_complexity)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod alias;
pub mod error;
pub mod index;
pub mod rb;
pub mod storage;
pub mod traits;
mod utils;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use alias::*;
pub use error::Error;
pub use rb::Fifo;
pub use wrap::{Cons, Obs, Prod};

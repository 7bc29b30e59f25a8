//! Cursor cells.
//!
//! A FIFO stores its `head` and `tail` cursors in cells of one of the kinds below.
//! The kind decides whether the FIFO may be shared between execution contexts.

#[cfg(feature = "portable-atomic")]
use portable_atomic::{AtomicBool, AtomicUsize, Ordering};

use core::cell::Cell;
#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use crossbeam_utils::CachePadded;

/// Cursor cell with a flag telling whether its end of the FIFO is held by a producer or consumer.
pub trait Index {
    fn new(value: usize) -> Self;

    fn get(&self) -> usize;
    fn set(&self, value: usize);

    fn is_held(&self) -> bool;
    /// Returns old value.
    fn hold(&self, flag: bool) -> bool;
}

/// Cursor for a FIFO that never leaves its execution context.
///
/// Makes the FIFO `!Sync`, so it cannot be touched from an interrupt handler and the main loop at once.
pub struct LocalIndex {
    value: Cell<usize>,
    held: Cell<bool>,
}

impl Index for LocalIndex {
    fn new(value: usize) -> Self {
        Self {
            value: Cell::new(value),
            held: Cell::new(false),
        }
    }

    #[inline]
    fn get(&self) -> usize {
        self.value.get()
    }
    #[inline]
    fn set(&self, value: usize) {
        self.value.set(value);
    }

    #[inline]
    fn is_held(&self) -> bool {
        self.held.get()
    }
    #[inline]
    fn hold(&self, flag: bool) -> bool {
        self.held.replace(flag)
    }
}

/// Cursor for a FIFO shared between a producer context and a consumer context.
///
/// Cursor stores are `Release` and loads are `Acquire`, so whoever observes a moved cursor
/// also observes the slot written or read before the move.
///
/// # Platform atomicity
///
/// Sharing is only sound if the target can load and store a `usize` without tearing.
/// On targets lacking native pointer-sized atomics (AVR, MSP430, some Cortex-M0 parts)
/// enable the `portable-atomic` feature. Then `portable-atomic` provides the atomics,
/// usually through a `critical-section` implementation that masks interrupts.
/// Without it the crate does not build for such targets, instead of silently reading torn cursors.
pub struct SharedIndex {
    value: CachePadded<AtomicUsize>,
    held: AtomicBool,
}

impl Index for SharedIndex {
    fn new(value: usize) -> Self {
        Self {
            value: CachePadded::new(AtomicUsize::new(value)),
            held: AtomicBool::new(false),
        }
    }

    #[inline]
    fn get(&self) -> usize {
        self.value.load(Ordering::Acquire)
    }
    #[inline]
    fn set(&self, value: usize) {
        self.value.store(value, Ordering::Release);
    }

    #[inline]
    fn is_held(&self) -> bool {
        self.held.load(Ordering::Relaxed)
    }
    #[inline]
    fn hold(&self, flag: bool) -> bool {
        self.held.swap(flag, Ordering::Relaxed)
    }
}

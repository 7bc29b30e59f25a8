//! Virtual timer interface and its hosted implementation.

use crate::utils::log_warn;
#[cfg(feature = "std")]
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
    time::{Duration, Instant},
    vec,
    vec::Vec,
};

/// Source of countdown timers measured in system ticks.
///
/// Timers are a limited resource: [`Self::alloc`] may fail, and every allocated handle
/// must eventually be given back with [`Self::release`].
pub trait VirtualTimer {
    type Handle;

    /// Allocates a timer, or returns `None` if none is free.
    fn alloc(&self) -> Option<Self::Handle>;
    /// Starts a countdown of `ticks` system ticks.
    fn arm(&self, handle: &Self::Handle, ticks: u32);
    /// Whether the countdown started by the last [`Self::arm`] has run out.
    ///
    /// A timer that was never armed is expired.
    fn expired(&self, handle: &Self::Handle) -> bool;
    fn release(&self, handle: Self::Handle);
}

/// Allocated and armed timer, released on drop.
pub(crate) struct Armed<'a, V: VirtualTimer + ?Sized> {
    timer: &'a V,
    handle: Option<V::Handle>,
}

impl<'a, V: VirtualTimer + ?Sized> Armed<'a, V> {
    /// Returns `None` if `timer` has no free slot.
    pub fn new(timer: &'a V, ticks: u32) -> Option<Self> {
        let handle = match timer.alloc() {
            Some(handle) => handle,
            None => {
                log_warn!("no free virtual timer");
                return None;
            }
        };
        timer.arm(&handle, ticks);
        Some(Self {
            timer,
            handle: Some(handle),
        })
    }

    pub fn expired(&self) -> bool {
        match &self.handle {
            Some(handle) => self.timer.expired(handle),
            None => true,
        }
    }
}

impl<'a, V: VirtualTimer + ?Sized> Drop for Armed<'a, V> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.release(handle);
        }
    }
}

#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
enum Slot {
    Free,
    /// `None` deadline is never reached.
    Used(Option<Instant>),
}

#[cfg(feature = "std")]
static NEXT_TIMER_ID: AtomicUsize = AtomicUsize::new(0);

/// Timer table backed by [`Instant`].
///
/// Holds a fixed number of slots. One tick lasts [`Self::tick`].
///
/// Handles remember the table they came from. A handle passed to another table
/// is ignored by [`VirtualTimer::arm`] and [`VirtualTimer::release`] and reads as expired.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdTimer {
    id: usize,
    tick: Duration,
    slots: Mutex<Vec<Slot>>,
}

/// Handle to a [`StdTimer`] slot.
#[cfg(feature = "std")]
#[derive(Debug, PartialEq, Eq)]
pub struct StdTimerHandle {
    timer: usize,
    index: usize,
}

#[cfg(feature = "std")]
impl StdTimer {
    pub const DEFAULT_TICK: Duration = Duration::from_millis(1);
    pub const DEFAULT_SLOTS: usize = 8;

    /// Creates a table of `slots` timers ticking every `tick`.
    pub fn new(tick: Duration, slots: usize) -> Self {
        Self {
            id: NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed),
            tick,
            slots: Mutex::new(vec![Slot::Free; slots]),
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Number of timers currently allocated.
    pub fn allocated(&self) -> usize {
        self.lock().iter().filter(|slot| matches!(slot, Slot::Used(_))).count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` on the slot of `handle`, or returns `None` if the handle belongs to another table.
    fn with_slot<U>(&self, handle: &StdTimerHandle, f: impl FnOnce(&mut Slot) -> U) -> Option<U> {
        if handle.timer != self.id {
            log_warn!("virtual timer handle used with a foreign timer table");
            return None;
        }
        self.lock().get_mut(handle.index).map(f)
    }
}

#[cfg(feature = "std")]
impl Default for StdTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICK, Self::DEFAULT_SLOTS)
    }
}

#[cfg(feature = "std")]
impl VirtualTimer for StdTimer {
    type Handle = StdTimerHandle;

    fn alloc(&self) -> Option<StdTimerHandle> {
        let mut slots = self.lock();
        let index = slots.iter().position(|slot| matches!(slot, Slot::Free))?;
        slots[index] = Slot::Used(Some(Instant::now()));
        Some(StdTimerHandle { timer: self.id, index })
    }

    fn arm(&self, handle: &StdTimerHandle, ticks: u32) {
        let deadline = Instant::now().checked_add(self.tick.saturating_mul(ticks));
        self.with_slot(handle, |slot| *slot = Slot::Used(deadline));
    }

    fn expired(&self, handle: &StdTimerHandle) -> bool {
        self.with_slot(handle, |slot| match *slot {
            Slot::Used(Some(deadline)) => Instant::now() >= deadline,
            Slot::Used(None) => false,
            Slot::Free => true,
        })
        .unwrap_or(true)
    }

    fn release(&self, handle: StdTimerHandle) {
        self.with_slot(&handle, |slot| *slot = Slot::Free);
    }
}

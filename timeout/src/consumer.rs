use crate::{
    error::TimeoutError,
    timer::{Armed, VirtualTimer},
    utils::log_debug,
};
use core::hint::spin_loop;
use fifobuf::traits::Consumer;

/// Consumer that can wait for items, bounded by a virtual timer.
///
/// Waiting is a busy loop. `ticks == 0` checks the FIFO once and never allocates a timer.
pub trait PollingConsumer: Consumer {
    /// Spins until the FIFO has an item or the timer expires.
    ///
    /// Returns `false` on expiry, `None` if no timer could be allocated.
    fn wait_occupied<V: VirtualTimer + ?Sized>(&self, timer: &V, ticks: u32) -> Option<bool> {
        if !self.is_empty() {
            return Some(true);
        }
        if ticks == 0 {
            return Some(false);
        }
        let armed = Armed::new(timer, ticks)?;
        loop {
            if !self.is_empty() {
                return Some(true);
            }
            if armed.expired() {
                log_debug!("timed out waiting for FIFO items");
                return Some(!self.is_empty());
            }
            spin_loop();
        }
    }

    /// Removes the oldest item, waiting at most `ticks` for one to arrive.
    fn pop_timeout<V: VirtualTimer + ?Sized>(&mut self, timer: &V, ticks: u32) -> Result<Self::Item, TimeoutError<()>> {
        match self.wait_occupied(timer, ticks) {
            Some(true) => self.try_pop().ok_or(TimeoutError::Expired(())),
            Some(false) => Err(TimeoutError::Expired(())),
            None => Err(TimeoutError::NoTimer(())),
        }
    }

    /// Fills `elems` with removed items until it is full or the timer expires.
    ///
    /// One timer covers the whole transfer. Returns the number of removed items.
    fn pop_slice_timeout<V: VirtualTimer + ?Sized>(&mut self, elems: &mut [Self::Item], timer: &V, ticks: u32) -> usize {
        let mut count = self.pop_slice(elems);
        if count == elems.len() || ticks == 0 {
            return count;
        }
        let armed = match Armed::new(timer, ticks) {
            Some(armed) => armed,
            None => return count,
        };
        while count < elems.len() {
            let n = self.pop_slice(&mut elems[count..]);
            if n == 0 {
                if armed.expired() {
                    log_debug!("timed out popping slice, {} items missing", elems.len() - count);
                    break;
                }
                spin_loop();
            }
            count += n;
        }
        count
    }
}

impl<C: Consumer + ?Sized> PollingConsumer for C {}

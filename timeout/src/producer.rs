use crate::{
    error::TimeoutError,
    timer::{Armed, VirtualTimer},
    utils::log_debug,
};
use core::hint::spin_loop;
use fifobuf::traits::Producer;

/// Producer that can wait for room, bounded by a virtual timer.
///
/// Waiting is a busy loop. `ticks == 0` checks the FIFO once and never allocates a timer.
pub trait PollingProducer: Producer {
    /// Spins until the FIFO has room or the timer expires.
    ///
    /// Returns `false` on expiry, `None` if no timer could be allocated.
    fn wait_room<V: VirtualTimer + ?Sized>(&self, timer: &V, ticks: u32) -> Option<bool> {
        if !self.is_full() {
            return Some(true);
        }
        if ticks == 0 {
            return Some(false);
        }
        let armed = Armed::new(timer, ticks)?;
        loop {
            if !self.is_full() {
                return Some(true);
            }
            if armed.expired() {
                log_debug!("timed out waiting for FIFO room");
                return Some(!self.is_full());
            }
            spin_loop();
        }
    }

    /// Appends `value`, waiting at most `ticks` for room.
    fn push_timeout<V: VirtualTimer + ?Sized>(
        &mut self,
        value: Self::Item,
        timer: &V,
        ticks: u32,
    ) -> Result<(), TimeoutError<Self::Item>> {
        match self.wait_room(timer, ticks) {
            Some(true) => self.try_push(value).map_err(TimeoutError::Expired),
            Some(false) => Err(TimeoutError::Expired(value)),
            None => Err(TimeoutError::NoTimer(value)),
        }
    }

    /// Appends as many items of `elems` as fit before the timer expires.
    ///
    /// One timer covers the whole transfer. Returns the number of appended items.
    fn push_slice_timeout<V: VirtualTimer + ?Sized>(
        &mut self,
        mut elems: &[Self::Item],
        timer: &V,
        ticks: u32,
    ) -> usize {
        let mut count = self.push_slice(elems);
        elems = &elems[count..];
        if elems.is_empty() || ticks == 0 {
            return count;
        }
        let armed = match Armed::new(timer, ticks) {
            Some(armed) => armed,
            None => return count,
        };
        while !elems.is_empty() {
            let n = self.push_slice(elems);
            if n == 0 {
                if armed.expired() {
                    log_debug!("timed out pushing slice, {} items left", elems.len());
                    break;
                }
                spin_loop();
            }
            elems = &elems[n..];
            count += n;
        }
        count
    }
}

impl<P: Producer + ?Sized> PollingProducer for P {}

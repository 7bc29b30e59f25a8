use super::observer::Observer;

/// Producer part of the FIFO.
///
/// The producer context is the only one that moves `tail`. It reads `head` only to know
/// how much room is left.
pub trait Producer: Observer {
    /// Set tail position.
    ///
    /// # Safety
    ///
    /// Position must go only forward, never backward, and never past the slot preceding `head`.
    /// All slots between old and new position must be written before this call.
    unsafe fn set_tail(&self, value: usize);

    /// Moves `tail` by `count` slots forward.
    ///
    /// # Safety
    ///
    /// First `count` vacant slots must be written.
    ///
    /// Must not be called concurrently.
    unsafe fn advance_tail(&self, count: usize) {
        debug_assert!(count <= self.room());
        self.set_tail(self.advance_index(self.tail(), count));
    }

    /// Provides a direct access to the vacant slots.
    ///
    /// Returns a pair of slices, the second one may be empty.
    /// Items must be put starting from the beginning of first slice.
    /// When first slice is fully filled then items must be put to the beginning of the second slice.
    ///
    /// *This method must be followed by [`Self::advance_tail`] call with the number of items being put previously as argument.*
    /// *Contents of vacant slots are stale and must not be relied on.*
    fn vacant_slices_mut(&mut self) -> (&mut [Self::Item], &mut [Self::Item]) {
        let stop = self.prev_index(self.head());
        unsafe { self.unsafe_slices_mut(self.tail(), stop) }
    }

    /// Appends an item to the FIFO without checking for room.
    ///
    /// Writes the item at `tail`, then wraps `tail` to the first slot if it was at the last one,
    /// or moves it one slot forward otherwise.
    ///
    /// # Safety
    ///
    /// The FIFO must not be full (check [`Self::is_full`] or [`Self::room`] first).
    /// Pushing onto a full FIFO makes `tail` reach `head`, so all stored items are lost
    /// and the FIFO reads as empty.
    ///
    /// *In debug mode panics if the FIFO is full.*
    #[inline]
    unsafe fn push_unchecked(&mut self, elem: Self::Item) {
        debug_assert!(!self.is_full(), "push onto a full FIFO");
        let tail = self.tail();
        self.write_slot(tail, elem);
        if tail == self.end() {
            self.set_tail(0);
        } else {
            self.set_tail(tail + 1);
        }
    }

    /// Appends an item to the FIFO.
    ///
    /// If the FIFO is full returns an `Err` containing the item that hasn't been appended.
    fn try_push(&mut self, elem: Self::Item) -> Result<(), Self::Item> {
        if !self.is_full() {
            unsafe { self.push_unchecked(elem) };
            Ok(())
        } else {
            Err(elem)
        }
    }

    /// Appends items from an iterator to the FIFO.
    /// Elements that haven't been added to the FIFO remain in the iterator.
    ///
    /// Returns count of items been appended.
    ///
    /// *Inserted items are committed to the FIFO all at once in the end,*
    /// *e.g. when the FIFO is full or iterator has ended.*
    fn push_iter<I: Iterator<Item = Self::Item>>(&mut self, mut iter: I) -> usize {
        let (left, right) = self.vacant_slices_mut();
        let mut count = 0;
        for place in left.iter_mut().chain(right.iter_mut()) {
            match iter.next() {
                Some(elem) => *place = elem,
                None => break,
            }
            count += 1;
        }
        unsafe { self.advance_tail(count) };
        count
    }

    /// Appends items from slice to the FIFO.
    ///
    /// Copies at most two contiguous runs and moves `tail` once.
    ///
    /// Returns count of items been appended.
    fn push_slice(&mut self, elems: &[Self::Item]) -> usize {
        let (left, right) = self.vacant_slices_mut();
        let count = if elems.len() < left.len() {
            left[..elems.len()].copy_from_slice(elems);
            elems.len()
        } else {
            let (left_elems, elems) = elems.split_at(left.len());
            left.copy_from_slice(left_elems);
            left.len()
                + if elems.len() < right.len() {
                    right[..elems.len()].copy_from_slice(elems);
                    elems.len()
                } else {
                    right.copy_from_slice(&elems[..right.len()]);
                    right.len()
                }
        };
        unsafe { self.advance_tail(count) };
        count
    }
}

macro_rules! impl_fmt_write {
    ($type:ident $(< $( $param:tt $( : $first_bound:tt $(+ $next_bound:tt )* )? ),+ >)?) => {
        impl $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)? core::fmt::Write for $type $(< $( $param ),+ >)?
        where
            Self: $crate::traits::Producer<Item = u8>,
        {
            fn write_str(&mut self, s: &str) -> core::fmt::Result {
                let n = $crate::traits::Producer::push_slice(self, s.as_bytes());
                if n != s.len() {
                    Err(core::fmt::Error)
                } else {
                    Ok(())
                }
            }
        }
    };
}
pub(crate) use impl_fmt_write;

/// Implements `io::Write` and `fmt::Write` for a `u8` producer.
///
/// `io::Write::flush` would clash with [`Consumer::flush`](crate::traits::Consumer::flush),
/// so types that are consumers too get only [`impl_fmt_write`].
macro_rules! impl_producer_traits {
    ($type:ident $(< $( $param:tt $( : $first_bound:tt $(+ $next_bound:tt )* )? ),+ >)?) => {

        #[cfg(feature = "std")]
        impl $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)? std::io::Write for $type $(< $( $param ),+ >)?
        where
            Self: $crate::traits::Producer<Item = u8>,
        {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                let n = $crate::traits::Producer::push_slice(self, buf);
                if n == 0 && !buf.is_empty() {
                    Err(std::io::ErrorKind::WouldBlock.into())
                } else {
                    Ok(n)
                }
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        $crate::traits::producer::impl_fmt_write!($type $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)?);
    };
}
pub(crate) use impl_producer_traits;

use crate::utils::ranges;

/// FIFO observer.
///
/// Can observe FIFO state but cannot safely access its data.
///
/// Positions run over `0..=end()`: `0` is the first slot, [`Self::end`] the last one.
/// One slot always stays free, so the FIFO holds at most [`Self::capacity`] = `end()` items.
///
/// # Concurrent observation
///
/// Queries are meaningful while the opposite context keeps pushing or popping only if the
/// cursors are updated atomically, which is what [`SharedIndex`](crate::index::SharedIndex) provides.
/// Any answer may become stale right after it is returned, but only in the safe direction:
/// a producer never sees fewer free slots than there are, a consumer never sees more items.
pub trait Observer {
    type Item: Copy;

    /// Position of the last slot.
    ///
    /// It is constant during the whole FIFO lifetime.
    fn end(&self) -> usize;

    /// Position of the next item to be removed.
    fn head(&self) -> usize;
    /// Position where the next item will be written.
    fn tail(&self) -> usize;

    /// Read the slot at `index`.
    ///
    /// # Safety
    ///
    /// `index <= self.end()`, and the slot must not be written at the same time.
    unsafe fn read_slot(&self, index: usize) -> Self::Item;
    /// Write the slot at `index`.
    ///
    /// # Safety
    ///
    /// `index <= self.end()`, and the slot must not be accessed at the same time.
    unsafe fn write_slot(&self, index: usize, value: Self::Item);

    /// Get slices of slots walking circularly from `start` up to `stop`.
    ///
    /// # Safety
    ///
    /// Slice must not overlap with any mutable slice existing at the same time.
    unsafe fn unsafe_slices(&self, start: usize, stop: usize) -> (&[Self::Item], &[Self::Item]);
    /// Mutable version of [`Self::unsafe_slices`].
    ///
    /// # Safety
    ///
    /// There must not exist overlapping slices at the same time.
    #[allow(clippy::mut_from_ref)]
    unsafe fn unsafe_slices_mut(&self, start: usize, stop: usize) -> (&mut [Self::Item], &mut [Self::Item]);

    /// Whether the head end is held by a consumer.
    fn head_is_held(&self) -> bool;
    /// Whether the tail end is held by a producer.
    fn tail_is_held(&self) -> bool;

    /// Total number of slots, including the one that is never filled.
    #[inline]
    fn slots(&self) -> usize {
        self.end() + 1
    }

    /// Maximal number of items the FIFO can hold.
    ///
    /// Equals `end - begin`, i.e. one less than [`Self::slots`].
    /// This is a fixed value, for the number of stored items see [`Self::occupied_len`].
    #[inline]
    fn capacity(&self) -> usize {
        self.end()
    }

    /// Position following `index` in circular order.
    #[inline]
    fn next_index(&self, index: usize) -> usize {
        if index == self.end() {
            0
        } else {
            index + 1
        }
    }

    /// Position preceding `index` in circular order.
    #[inline]
    fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.end()
        } else {
            index - 1
        }
    }

    /// Position `count` steps after `index`.
    ///
    /// `count` must not exceed [`Self::slots`].
    #[inline]
    fn advance_index(&self, index: usize, count: usize) -> usize {
        debug_assert!(count <= self.slots());
        let index = index + count;
        if index > self.end() {
            index - self.slots()
        } else {
            index
        }
    }

    /// Checks if the FIFO is empty.
    ///
    /// *Safe to call while the producer context keeps pushing only if cursors are updated atomically
    /// (see [`SharedIndex`](crate::index::SharedIndex)). The result may become irrelevant at any time
    /// because of concurring producer activity.*
    #[inline]
    fn is_empty(&self) -> bool {
        self.head() == self.tail()
    }

    /// Checks if the FIFO is full.
    ///
    /// Full means `tail` is one slot behind `head` in circular order.
    /// When `head` is at the first slot, "one behind" is the last slot.
    ///
    /// *Safe to call while the consumer context keeps popping only if cursors are updated atomically
    /// (see [`SharedIndex`](crate::index::SharedIndex)). The result may become irrelevant at any time
    /// because of concurring consumer activity.*
    #[inline]
    fn is_full(&self) -> bool {
        let (head, tail) = (self.head(), self.tail());
        (head == 0 && tail == self.end()) || head.checked_sub(1) == Some(tail)
    }

    /// The number of free slots available for writing.
    ///
    /// Equals [`Self::capacity`] when empty and `0` when full.
    ///
    /// *Actual number may be greater than returned value due to concurring consumer activity.*
    #[inline]
    fn room(&self) -> usize {
        let (head, tail) = (self.head(), self.tail());
        if tail < head {
            head - tail - 1
        } else {
            head + self.end() - tail
        }
    }

    /// The number of items stored in the FIFO.
    ///
    /// *Actual number may be greater than returned value due to concurring producer activity.*
    #[inline]
    fn occupied_len(&self) -> usize {
        self.capacity() - self.room()
    }

    /// Ranges of occupied slots, older ones first.
    #[inline]
    fn occupied_ranges(&self) -> (core::ops::Range<usize>, core::ops::Range<usize>) {
        ranges(self.slots(), self.head(), self.tail())
    }

    /// Ranges of vacant slots, in writing order.
    #[inline]
    fn vacant_ranges(&self) -> (core::ops::Range<usize>, core::ops::Range<usize>) {
        ranges(self.slots(), self.tail(), self.prev_index(self.head()))
    }
}

use super::observer::Observer;
use core::{iter::Chain, slice};

/// Consumer part of the FIFO.
///
/// The consumer context is the only one that moves `head`. It reads `tail` only to know
/// how many items are stored.
pub trait Consumer: Observer {
    /// Set head position.
    ///
    /// # Safety
    ///
    /// Position must go only forward, never backward, and never past `tail`.
    unsafe fn set_head(&self, value: usize);

    /// Moves `head` by `count` slots forward.
    ///
    /// # Safety
    ///
    /// First `count` items in occupied slots must be consumed.
    ///
    /// Must not be called concurrently.
    unsafe fn advance_head(&self, count: usize) {
        debug_assert!(count <= self.occupied_len());
        self.set_head(self.advance_index(self.head(), count));
    }

    /// Returns a pair of slices which contain, in order, the contents of the FIFO.
    ///
    /// Elements with lower indices in slice are older. First slice contains older items that second one.
    fn as_slices(&self) -> (&[Self::Item], &[Self::Item]) {
        unsafe { self.unsafe_slices(self.head(), self.tail()) }
    }

    /// Returns a front-to-back iterator over the items in the FIFO.
    ///
    /// This iterator does not remove items out of the FIFO.
    fn iter(&self) -> Iter<'_, Self> {
        let (left, right) = self.as_slices();
        left.iter().chain(right.iter())
    }

    /// Removes the oldest item from the FIFO without checking for emptiness.
    ///
    /// Reads the item at `head`, then wraps `head` to the first slot if it was at the last one,
    /// or moves it one slot forward otherwise.
    /// The slot is read before `head` moves, so the producer never overwrites an item being read.
    ///
    /// # Safety
    ///
    /// The FIFO must not be empty (check [`Self::is_empty`] first).
    /// The slot at an empty `head` may be concurrently written by the producer.
    ///
    /// *In debug mode panics if the FIFO is empty.*
    #[inline]
    unsafe fn pop_unchecked(&mut self) -> Self::Item {
        debug_assert!(!self.is_empty(), "pop from an empty FIFO");
        let head = self.head();
        let elem = self.read_slot(head);
        if head == self.end() {
            self.set_head(0);
        } else {
            self.set_head(head + 1);
        }
        elem
    }

    /// Removes the oldest item from the FIFO and returns it.
    ///
    /// Returns `None` if the FIFO is empty.
    fn try_pop(&mut self) -> Option<Self::Item> {
        if !self.is_empty() {
            Some(unsafe { self.pop_unchecked() })
        } else {
            None
        }
    }

    /// Returns the oldest item without removing it.
    fn peek(&self) -> Option<Self::Item> {
        let head = self.head();
        if head != self.tail() {
            Some(unsafe { self.read_slot(head) })
        } else {
            None
        }
    }

    /// Removes items from the FIFO and writes them into a slice.
    ///
    /// Returns count of items been removed.
    fn pop_slice(&mut self, elems: &mut [Self::Item]) -> usize {
        let (left, right) = self.as_slices();
        let count = if elems.len() < left.len() {
            elems.copy_from_slice(&left[..elems.len()]);
            elems.len()
        } else {
            let (left_elems, elems) = elems.split_at_mut(left.len());
            left_elems.copy_from_slice(left);
            left.len()
                + if elems.len() < right.len() {
                    elems.copy_from_slice(&right[..elems.len()]);
                    elems.len()
                } else {
                    elems[..right.len()].copy_from_slice(right);
                    right.len()
                }
        };
        unsafe { self.advance_head(count) };
        count
    }

    /// Returns an iterator that removes items one by one from the FIFO.
    fn pop_iter(&mut self) -> PopIter<'_, Self> {
        PopIter { target: self }
    }

    /// Removes at most `count` oldest items.
    ///
    /// Returns the number of removed items.
    fn skip(&mut self, count: usize) -> usize {
        let count = usize::min(count, self.occupied_len());
        unsafe { self.advance_head(count) };
        count
    }

    /// Discards all buffered items at once by moving `head` to `tail`.
    ///
    /// Storage is not cleared.
    ///
    /// *Only the context owning the consumer may call this, since it moves `head`.
    /// If the producer keeps pushing concurrently then the FIFO may be not empty right after this call.*
    fn flush(&mut self) {
        unsafe { self.set_head(self.tail()) };
    }
}

/// An iterator that removes items from the FIFO.
pub struct PopIter<'a, C: Consumer + ?Sized> {
    target: &'a mut C,
}

impl<'a, C: Consumer + ?Sized> Iterator for PopIter<'a, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.target.try_pop()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.occupied_len(), None)
    }
}

/// Iterator over FIFO contents.
///
/// *Please do not rely on actual type, it may change in future.*
#[allow(type_alias_bounds)]
pub type Iter<'a, C: Consumer + ?Sized> = Chain<slice::Iter<'a, C::Item>, slice::Iter<'a, C::Item>>;

macro_rules! impl_consumer_traits {
    ($type:ident $(< $( $param:tt $( : $first_bound:tt $(+ $next_bound:tt )* )? ),+ >)?) => {

        #[cfg(feature = "std")]
        impl $(< $( $param $( : $first_bound $(+ $next_bound )* )? ),+ >)? std::io::Read for $type $(< $( $param ),+ >)?
        where
            Self: $crate::traits::Consumer<Item = u8>,
        {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                let n = $crate::traits::Consumer::pop_slice(self, buf);
                if n == 0 && !buf.is_empty() {
                    Err(std::io::ErrorKind::WouldBlock.into())
                } else {
                    Ok(n)
                }
            }
        }
    };
}
pub(crate) use impl_consumer_traits;

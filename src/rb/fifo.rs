#[cfg(feature = "alloc")]
use crate::{storage::Heap, traits::Split, Arc};
use crate::{
    error::Error,
    index::{Index, LocalIndex, SharedIndex},
    storage::{Array, Ref, Storage, MIN_SLOTS},
    traits::{
        consumer::{impl_consumer_traits, Consumer},
        producer::{impl_fmt_write, Producer},
        Observer, RingBuffer, SplitRef,
    },
    utils::{log_warn, ranges},
    wrap::{Cons, Prod},
};
#[cfg(feature = "alloc")]
use alloc::rc::Rc;

/// Fixed-capacity FIFO over `S` storage with `X` cursors.
///
/// Slots are numbered `0..=end`. `head` points to the oldest item, `tail` to the slot where the next item goes.
/// When a cursor passes the last slot it wraps back to the first one.
///
/// ```text
///  +-----------------------------------+
///  |  empty  |   valid data   |  empty |
///  +-----------------------------------+
///  ^         ^                ^        ^
///  0        head             tail     end
/// ```
///
/// The FIFO is empty when `head == tail` and full when `tail` is right behind `head`,
/// so one slot is never filled and the FIFO holds at most `end` items.
///
/// Choose `X` to be [`LocalIndex`] for a FIFO that stays in one context
/// or [`SharedIndex`] for one shared between an interrupt handler and the main loop.
/// See [`LocalFifo`](crate::LocalFifo) and [`SharedFifo`](crate::SharedFifo).
///
/// A `u8` FIFO implements `io::Read` and `fmt::Write`. `io::Write` is left to the producer half,
/// since its `flush` would make calls to [`Consumer::flush`] ambiguous.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use fifobuf::{HeapFifo, traits::*};

let fifo = HeapFifo::<u8>::with_slots(5);
let (mut prod, mut cons) = fifo.split();
thread::spawn(move || {
    for byte in b"ABCD" {
        prod.try_push(*byte).unwrap();
    }
    assert!(prod.is_full());
})
.join()
.unwrap();
assert_eq!(cons.pop_iter().collect::<Vec<_>>(), b"ABCD");
```
"##
)]
pub struct Fifo<S: Storage, X: Index> {
    storage: S,
    end: usize,
    head: X,
    tail: X,
}

impl<S: Storage, X: Index> Fifo<S, X> {
    /// Constructs an empty FIFO over `storage`.
    ///
    /// Returns an error if `storage` has fewer than 2 slots.
    pub fn try_new(storage: S) -> Result<Self, Error> {
        Self::from_raw_parts(storage, 0, 0)
    }

    /// Constructs an empty FIFO over `storage`.
    ///
    /// *Panics if `storage` has fewer than 2 slots.*
    pub fn new(storage: S) -> Self {
        match Self::try_new(storage) {
            Ok(this) => this,
            Err(err) => panic!("{}", err),
        }
    }

    /// Constructs a FIFO from storage and cursor positions.
    ///
    /// Slots from `head` up to `tail` are treated as stored items.
    pub fn from_raw_parts(storage: S, head: usize, tail: usize) -> Result<Self, Error> {
        let slots = storage.len();
        if slots < MIN_SLOTS {
            log_warn!("rejected FIFO storage of {} slots", slots);
            return Err(Error::TooSmall { slots });
        }
        if let Some(index) = [head, tail].into_iter().find(|&index| index >= slots) {
            return Err(Error::CursorOutOfRange { index, slots });
        }
        Ok(Self {
            storage,
            end: slots - 1,
            head: X::new(head),
            tail: X::new(tail),
        })
    }

    /// Destructures the FIFO into its storage and `head` and `tail` positions.
    pub fn into_raw_parts(self) -> (S, usize, usize) {
        let (head, tail) = (self.head.get(), self.tail.get());
        (self.storage, head, tail)
    }

    /// Builds an empty FIFO over storage whose size is already known to be valid.
    fn with_valid_storage(storage: S) -> Self {
        debug_assert!(storage.len() >= MIN_SLOTS);
        Self {
            end: storage.len() - 1,
            storage,
            head: X::new(0),
            tail: X::new(0),
        }
    }
}

impl<T: Copy + Default, const N: usize, X: Index> Default for Fifo<Array<T, N>, X> {
    fn default() -> Self {
        Self::with_valid_storage(Array::default())
    }
}

impl<T: Copy, const N: usize, X: Index> From<Array<T, N>> for Fifo<Array<T, N>, X> {
    fn from(storage: Array<T, N>) -> Self {
        Self::with_valid_storage(storage)
    }
}

impl<'a, T: Copy, X: Index> Fifo<Ref<'a, T>, X> {
    /// Constructs an empty FIFO borrowing `slice` as storage.
    ///
    /// Returns an error if `slice` is shorter than 2.
    pub fn from_slice(slice: &'a mut [T]) -> Result<Self, Error> {
        Self::try_new(Ref::new(slice))
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy + Default, X: Index> Fifo<Heap<T>, X> {
    /// Allocates a FIFO of `slots` slots, i.e. able to hold `slots - 1` items.
    ///
    /// *Panics if `slots` is less than 2.*
    pub fn with_slots(slots: usize) -> Self {
        Self::new(Heap::new(slots))
    }
}

impl<S: Storage, X: Index> Observer for Fifo<S, X> {
    type Item = S::Item;

    #[inline]
    fn end(&self) -> usize {
        self.end
    }

    #[inline]
    fn head(&self) -> usize {
        self.head.get()
    }
    #[inline]
    fn tail(&self) -> usize {
        self.tail.get()
    }

    #[inline]
    unsafe fn read_slot(&self, index: usize) -> S::Item {
        self.storage.read(index)
    }
    #[inline]
    unsafe fn write_slot(&self, index: usize, value: S::Item) {
        self.storage.write(index, value)
    }

    unsafe fn unsafe_slices(&self, start: usize, stop: usize) -> (&[S::Item], &[S::Item]) {
        let (first, second) = ranges(self.slots(), start, stop);
        (self.storage.slice(first), self.storage.slice(second))
    }
    unsafe fn unsafe_slices_mut(&self, start: usize, stop: usize) -> (&mut [S::Item], &mut [S::Item]) {
        let (first, second) = ranges(self.slots(), start, stop);
        (self.storage.slice_mut(first), self.storage.slice_mut(second))
    }

    #[inline]
    fn head_is_held(&self) -> bool {
        self.head.is_held()
    }
    #[inline]
    fn tail_is_held(&self) -> bool {
        self.tail.is_held()
    }
}

impl<S: Storage, X: Index> Producer for Fifo<S, X> {
    #[inline]
    unsafe fn set_tail(&self, value: usize) {
        self.tail.set(value);
    }
}

impl<S: Storage, X: Index> Consumer for Fifo<S, X> {
    #[inline]
    unsafe fn set_head(&self, value: usize) {
        self.head.set(value);
    }
}

impl<S: Storage, X: Index> RingBuffer for Fifo<S, X> {
    #[inline]
    unsafe fn hold_head(&self, flag: bool) -> bool {
        self.head.hold(flag)
    }
    #[inline]
    unsafe fn hold_tail(&self, flag: bool) -> bool {
        self.tail.hold(flag)
    }
}

#[cfg(feature = "alloc")]
impl<S: Storage> Split for Fifo<S, SharedIndex> {
    type Prod = Prod<Arc<Self>>;
    type Cons = Cons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let fifo = Arc::new(self);
        unsafe { (Prod::new(fifo.clone()), Cons::new(fifo)) }
    }
}

#[cfg(feature = "alloc")]
impl<S: Storage> Split for Fifo<S, LocalIndex> {
    type Prod = Prod<Rc<Self>>;
    type Cons = Cons<Rc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        let fifo = Rc::new(self);
        unsafe { (Prod::new(fifo.clone()), Cons::new(fifo)) }
    }
}

impl<S: Storage, X: Index> SplitRef for Fifo<S, X> {
    type RefProd<'a> = Prod<&'a Self> where Self: 'a;
    type RefCons<'a> = Cons<&'a Self> where Self: 'a;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        let this: &Self = self;
        unsafe { (Prod::new(this), Cons::new(this)) }
    }
}

impl_fmt_write!(Fifo<S: Storage, X: Index>);
impl_consumer_traits!(Fifo<S: Storage, X: Index>);

use crate::{
    rb::FifoRef,
    traits::{
        consumer::{impl_consumer_traits, Consumer},
        producer::{impl_producer_traits, Producer},
        Observer, RingBuffer,
    },
    utils::log_trace,
};
use core::{mem::ManuallyDrop, ptr};

/// Handle to one or both ends of a FIFO.
///
/// `P` tells whether it owns the tail end (may push), `C` whether it owns the head end (may pop and flush).
/// Owning an end is exclusive: the FIFO remembers which ends are held,
/// and creating a second producer or a second consumer panics.
///
/// Slots can only be read through the half owning the head end.
/// The underlying FIFO is not reachable from a half:
///
/// ```compile_fail
/// use fifobuf::{traits::*, HeapFifo};
///
/// let (mut prod, cons) = HeapFifo::<i32>::with_slots(4).split();
/// let obs = cons.observe();
/// prod.try_push(1).unwrap();
/// let (left, _) = obs.fifo().as_slices();
/// ```
pub struct Direct<R: FifoRef, const P: bool, const C: bool> {
    fifo: R,
}

/// Observer of FIFO.
pub type Obs<R> = Direct<R, false, false>;
/// Producer of FIFO.
pub type Prod<R> = Direct<R, true, false>;
/// Consumer of FIFO.
pub type Cons<R> = Direct<R, false, true>;

impl<R: FifoRef> Clone for Obs<R> {
    fn clone(&self) -> Self {
        Self { fifo: self.fifo.clone() }
    }
}

impl<R: FifoRef, const P: bool, const C: bool> Direct<R, P, C> {
    /// Takes the ends of `fifo` selected by `P` and `C`.
    ///
    /// Either both ends are taken or, on panic, none of them.
    ///
    /// *Panics if one of them is already held.*
    ///
    /// # Safety
    ///
    /// While the wrapper exists, the ends it takes must not be accessed through other clones of `fifo`.
    /// Use [`Split`](crate::traits::Split) or [`SplitRef`](crate::traits::SplitRef) for a safe way to get halves.
    pub unsafe fn new(fifo: R) -> Self {
        if P && fifo.fifo().hold_tail(true) {
            panic!("FIFO already has a producer");
        }
        if C && fifo.fifo().hold_head(true) {
            if P {
                fifo.fifo().hold_tail(false);
            }
            panic!("FIFO already has a consumer");
        }
        if P || C {
            log_trace!("FIFO end taken, producer: {}, consumer: {}", P, C);
        }
        Self { fifo }
    }

    pub(crate) fn fifo(&self) -> &R::Target {
        self.fifo.fifo()
    }

    pub fn observe(&self) -> Obs<R> {
        Obs { fifo: self.fifo.clone() }
    }

    /// Releases held ends and returns the underlying reference.
    ///
    /// # Safety
    ///
    /// The returned reference must not be used to access an end held by another wrapper.
    pub unsafe fn into_fifo_ref(mut self) -> R {
        self.close();
        let this = ManuallyDrop::new(self);
        unsafe { ptr::read(&this.fifo) }
    }

    fn close(&mut self) {
        if P {
            unsafe { self.fifo().hold_tail(false) };
        }
        if C {
            unsafe { self.fifo().hold_head(false) };
        }
        if P || C {
            log_trace!("FIFO end released, producer: {}, consumer: {}", P, C);
        }
    }
}

impl<R: FifoRef, const P: bool, const C: bool> Observer for Direct<R, P, C> {
    type Item = <R::Target as Observer>::Item;

    #[inline]
    fn end(&self) -> usize {
        self.fifo().end()
    }
    #[inline]
    fn head(&self) -> usize {
        self.fifo().head()
    }
    #[inline]
    fn tail(&self) -> usize {
        self.fifo().tail()
    }
    #[inline]
    unsafe fn read_slot(&self, index: usize) -> Self::Item {
        self.fifo().read_slot(index)
    }
    #[inline]
    unsafe fn write_slot(&self, index: usize, value: Self::Item) {
        self.fifo().write_slot(index, value)
    }
    #[inline]
    unsafe fn unsafe_slices(&self, start: usize, stop: usize) -> (&[Self::Item], &[Self::Item]) {
        self.fifo().unsafe_slices(start, stop)
    }
    #[inline]
    unsafe fn unsafe_slices_mut(&self, start: usize, stop: usize) -> (&mut [Self::Item], &mut [Self::Item]) {
        self.fifo().unsafe_slices_mut(start, stop)
    }
    #[inline]
    fn head_is_held(&self) -> bool {
        self.fifo().head_is_held()
    }
    #[inline]
    fn tail_is_held(&self) -> bool {
        self.fifo().tail_is_held()
    }
}

impl<R: FifoRef> Producer for Prod<R> {
    #[inline]
    unsafe fn set_tail(&self, value: usize) {
        self.fifo().set_tail(value)
    }
}

impl<R: FifoRef> Consumer for Cons<R> {
    #[inline]
    unsafe fn set_head(&self, value: usize) {
        self.fifo().set_head(value)
    }
}

impl<R: FifoRef, const P: bool, const C: bool> Drop for Direct<R, P, C> {
    fn drop(&mut self) {
        self.close();
    }
}

impl_producer_traits!(Prod<R: FifoRef>);
impl_consumer_traits!(Cons<R: FifoRef>);

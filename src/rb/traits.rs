use crate::traits::RingBuffer;
#[cfg(feature = "alloc")]
use crate::Arc;
#[cfg(feature = "alloc")]
use alloc::rc::Rc;

/// Reference to a FIFO shared by its producer and consumer.
///
/// # Safety
///
/// Every clone must refer to the same FIFO.
pub unsafe trait FifoRef: Clone {
    type Target: RingBuffer;
    fn fifo(&self) -> &Self::Target;
}

unsafe impl<'a, B: RingBuffer> FifoRef for &'a B {
    type Target = B;
    fn fifo(&self) -> &Self::Target {
        self
    }
}
#[cfg(feature = "alloc")]
unsafe impl<B: RingBuffer> FifoRef for Rc<B> {
    type Target = B;
    fn fifo(&self) -> &Self::Target {
        self
    }
}
#[cfg(feature = "alloc")]
unsafe impl<B: RingBuffer> FifoRef for Arc<B> {
    type Target = B;
    fn fifo(&self) -> &Self::Target {
        self
    }
}

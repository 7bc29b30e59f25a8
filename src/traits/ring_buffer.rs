use super::{consumer::Consumer, producer::Producer};

/// A FIFO that owns both of its ends.
pub trait RingBuffer: Consumer + Producer {
    /// Tell whether the head end of the FIFO is held by a consumer or not.
    ///
    /// Returns old value.
    ///
    /// # Safety
    ///
    /// Must not be set to `false` while consumer exists.
    unsafe fn hold_head(&self, flag: bool) -> bool;
    /// Tell whether the tail end of the FIFO is held by a producer or not.
    ///
    /// Returns old value.
    ///
    /// # Safety
    ///
    /// Must not be set to `false` while producer exists.
    unsafe fn hold_tail(&self, flag: bool) -> bool;
}

use crate::traits::{Consumer, Producer};

/// Hands the two ends of an owned FIFO to separate contexts.
///
/// The FIFO moves behind a shared pointer. It is freed when both halves are dropped.
pub trait Split {
    /// Half owning the tail end.
    type Prod: Producer;
    /// Half owning the head end.
    type Cons: Consumer;

    /// *Panics if either end is already held.*
    fn split(self) -> (Self::Prod, Self::Cons);
}

/// Hands the two ends of a borrowed FIFO to separate contexts.
///
/// Works for FIFOs placed into a `static`, where moving the FIFO is impossible.
pub trait SplitRef {
    type RefProd<'a>: Producer + 'a
    where
        Self: 'a;
    type RefCons<'a>: Consumer + 'a
    where
        Self: 'a;

    /// Both halves borrow the FIFO, which is usable as a whole again once they are dropped.
    ///
    /// *Panics if either end is already held.*
    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>);
}

#[cfg(feature = "alloc")]
use super::storage::Heap;
use super::{
    index::{LocalIndex, SharedIndex},
    rb::Fifo,
    storage::Array,
    wrap::{Cons, Prod},
};

#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
pub use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
pub use portable_atomic_util::Arc;

/// FIFO that stays within a single execution context.
pub type LocalFifo<S> = Fifo<S, LocalIndex>;

/// FIFO that can be shared between a producer context and a consumer context.
pub type SharedFifo<S> = Fifo<S, SharedIndex>;

/// Inline FIFO of `N` slots, i.e. able to hold `N - 1` items.
///
/// *`N` must be at least 2.*
pub type StaticFifo<T, const N: usize> = SharedFifo<Array<T, N>>;

/// Alias for [`StaticFifo`] producer.
pub type StaticProd<'a, T, const N: usize> = Prod<&'a StaticFifo<T, N>>;

/// Alias for [`StaticFifo`] consumer.
pub type StaticCons<'a, T, const N: usize> = Cons<&'a StaticFifo<T, N>>;

/// Byte FIFO of `N` slots.
pub type ByteFifo<const N: usize> = StaticFifo<u8, N>;

/// FIFO of `N` slots holding Q15 fixed-point samples.
pub type Q15Fifo<const N: usize> = StaticFifo<i16, N>;

/// Heap-allocated FIFO.
#[cfg(feature = "alloc")]
pub type HeapFifo<T> = SharedFifo<Heap<T>>;

#[cfg(feature = "alloc")]
/// Alias for [`HeapFifo`] producer.
pub type HeapProd<T> = Prod<Arc<HeapFifo<T>>>;

#[cfg(feature = "alloc")]
/// Alias for [`HeapFifo`] consumer.
pub type HeapCons<T> = Cons<Arc<HeapFifo<T>>>;

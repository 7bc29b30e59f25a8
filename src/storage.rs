//! Backing storage for the FIFO slots.
//!
//! Slots always hold initialized values of a `Copy` type, so reading a slot is never undefined
//! even if the cursor protocol is violated. Only the *contents* become meaningless then.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};
use core::{cell::UnsafeCell, marker::PhantomData, ops::Range, ptr::NonNull, slice};

/// Minimal number of slots a FIFO can be built over.
///
/// One slot is always kept free to tell a full FIFO from an empty one,
/// so a single slot could never hold anything.
pub const MIN_SLOTS: usize = 2;

/// Abstract storage for the FIFO.
///
/// # Safety
///
/// [`Self::as_mut_ptr`] must point to [`Self::len`] initialized items that stay valid and
/// are not accessed by anything else while the storage exists.
pub unsafe trait Storage {
    /// Stored item.
    type Item: Copy;

    /// Number of slots.
    fn len(&self) -> usize;

    /// Whether there are no slots at all.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pointer to the first slot.
    fn as_mut_ptr(&self) -> *mut Self::Item;

    /// Read the item at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::len`] and the slot must not be written concurrently.
    #[inline]
    unsafe fn read(&self, index: usize) -> Self::Item {
        debug_assert!(index < self.len());
        self.as_mut_ptr().add(index).read()
    }

    /// Write `value` to the slot at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::len`] and the slot must not be accessed concurrently.
    #[inline]
    unsafe fn write(&self, index: usize, value: Self::Item) {
        debug_assert!(index < self.len());
        self.as_mut_ptr().add(index).write(value)
    }

    /// Slots in `range`.
    ///
    /// # Safety
    ///
    /// Slice must not overlap with any mutable slice existing at the same time.
    #[inline]
    unsafe fn slice(&self, range: Range<usize>) -> &[Self::Item] {
        debug_assert!(range.end <= self.len());
        slice::from_raw_parts(self.as_mut_ptr().add(range.start), range.len())
    }

    /// Mutable slots in `range`.
    ///
    /// # Safety
    ///
    /// There must not exist overlapping slices at the same time.
    #[allow(clippy::mut_from_ref)]
    #[inline]
    unsafe fn slice_mut(&self, range: Range<usize>) -> &mut [Self::Item] {
        debug_assert!(range.end <= self.len());
        slice::from_raw_parts_mut(self.as_mut_ptr().add(range.start), range.len())
    }
}

/// Inline array storage.
///
/// Can be placed into a `static`. Building it with `N < 2` fails to compile.
pub struct Array<T: Copy, const N: usize> {
    data: UnsafeCell<[T; N]>,
}

unsafe impl<T: Copy + Send, const N: usize> Sync for Array<T, N> {}

impl<T: Copy, const N: usize> Array<T, N> {
    const ENOUGH_SLOTS: () = assert!(N >= MIN_SLOTS, "FIFO storage needs at least 2 slots");

    pub const fn new(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ENOUGH_SLOTS;
        Self {
            data: UnsafeCell::new(data),
        }
    }

    pub fn into_inner(self) -> [T; N] {
        self.data.into_inner()
    }
}

unsafe impl<T: Copy, const N: usize> Storage for Array<T, N> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn as_mut_ptr(&self) -> *mut T {
        self.data.get() as *mut T
    }
}

impl<T: Copy + Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new([T::default(); N])
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

/// Storage borrowed from the caller.
///
/// The FIFO built over it cannot outlive the borrowed slice.
pub struct Ref<'a, T: Copy> {
    ptr: NonNull<T>,
    len: usize,
    _ghost: PhantomData<&'a mut [T]>,
}

unsafe impl<'a, T: Copy + Send> Send for Ref<'a, T> {}
unsafe impl<'a, T: Copy + Send> Sync for Ref<'a, T> {}

impl<'a, T: Copy> Ref<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            len: slice.len(),
            ptr: NonNull::from(slice).cast(),
            _ghost: PhantomData,
        }
    }
}

unsafe impl<'a, T: Copy> Storage for Ref<'a, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn as_mut_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<'a, T: Copy> From<&'a mut [T]> for Ref<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        Self::new(value)
    }
}

impl<'a, T: Copy, const N: usize> From<&'a mut [T; N]> for Ref<'a, T> {
    fn from(value: &'a mut [T; N]) -> Self {
        Self::new(value.as_mut_slice())
    }
}

/// Heap-allocated storage.
#[cfg(feature = "alloc")]
pub struct Heap<T: Copy> {
    data: Box<[UnsafeCell<T>]>,
}

#[cfg(feature = "alloc")]
unsafe impl<T: Copy + Send> Sync for Heap<T> {}

#[cfg(feature = "alloc")]
impl<T: Copy + Default> Heap<T> {
    /// Allocates `slots` default-initialized slots.
    pub fn new(slots: usize) -> Self {
        Self {
            data: (0..slots).map(|_| UnsafeCell::new(T::default())).collect(),
        }
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T: Copy> Storage for Heap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn as_mut_ptr(&self) -> *mut T {
        UnsafeCell::raw_get(self.data.as_ptr())
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy> From<Vec<T>> for Heap<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            data: value.into_iter().map(UnsafeCell::new).collect(),
        }
    }
}

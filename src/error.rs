use core::fmt;

/// FIFO construction error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Storage has fewer than [`MIN_SLOTS`](crate::storage::MIN_SLOTS) slots.
    ///
    /// With a single slot the empty and the full state would coincide.
    TooSmall { slots: usize },
    /// A cursor passed to [`Fifo::from_raw_parts`](crate::Fifo::from_raw_parts) points outside the storage.
    CursorOutOfRange { index: usize, slots: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { slots } => write!(f, "FIFO storage has {} slots, at least 2 required", slots),
            Self::CursorOutOfRange { index, slots } => {
                write!(f, "cursor {} is out of range for FIFO storage of {} slots", index, slots)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

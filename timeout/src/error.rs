use core::fmt;

/// Why a timed wait on a FIFO gave up.
///
/// Both variants hand back the value that was not transferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeoutError<T> {
    /// The timer expired before the FIFO became ready.
    Expired(T),
    /// No timer slot could be allocated for the wait.
    NoTimer(T),
}

impl<T> TimeoutError<T> {
    /// Returns the value that was not transferred.
    pub fn into_inner(self) -> T {
        match self {
            Self::Expired(value) | Self::NoTimer(value) => value,
        }
    }
}

impl<T> fmt::Display for TimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired(_) => write!(f, "FIFO wait timed out"),
            Self::NoTimer(_) => write!(f, "no virtual timer available for FIFO wait"),
        }
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for TimeoutError<T> {}

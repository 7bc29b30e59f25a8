use core::ops::Range;

/// Storage ranges covered when walking circularly from `start` up to `stop` (exclusive).
///
/// Both positions must be less than `slots`. The first range starts from `start`.
/// If the first range is empty then the second one is empty too.
pub fn ranges(slots: usize, start: usize, stop: usize) -> (Range<usize>, Range<usize>) {
    if start <= stop {
        (start..stop, 0..0)
    } else {
        (start..slots, 0..stop)
    }
}

macro_rules! log_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    };
}
pub(crate) use log_trace;

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)+);
    };
}
pub(crate) use log_warn;

macro_rules! log_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
    };
}
pub(crate) use log_debug;

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)+);
    };
}
pub(crate) use log_warn;

// src/logging.rs
// Shorthands over the `log` facade. Every record goes to the crate's target so
// hosts can filter graph builds separately from their own output.

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::__log::info!(target: $crate::config::consts::LOG_TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::__log::debug!(target: $crate::config::consts::LOG_TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::__log::error!(target: $crate::config::consts::LOG_TARGET, $($arg)*)
    };
}

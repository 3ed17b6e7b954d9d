//! Logging shim.
//!
//! On the microcontroller these forward to `defmt`. Host builds have no
//! defmt logger to link against, so there the arguments are type-checked
//! and dropped.

#[cfg(target_os = "none")]
macro_rules! trace {
    ($($arg:tt)*) => { ::defmt::trace!($($arg)*) };
}

#[cfg(target_os = "none")]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(not(target_os = "none"))]
macro_rules! trace {
    ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }};
}

#[cfg(not(target_os = "none"))]
macro_rules! debug {
    ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }};
}

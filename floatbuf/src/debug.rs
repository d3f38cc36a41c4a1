//! Logging hooks
//!
//! The macros here forward to the [`log`] facade when the `log` feature is
//! enabled and compile to nothing otherwise. Code in this crate logs through
//! these macros rather than calling `log` directly.

#[cfg(all(doc, feature = "log"))]
use __raw_log as log;

/// Feature-gated [`log::trace!()`].
macro_rules! trace {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::trace!($($args)*);
    }
}

/// Feature-gated [`log::debug!()`].
macro_rules! debug {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::debug!($($args)*);
    }
}

/// Feature-gated [`log::error!()`].
macro_rules! error {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::error!($($args)*);
    }
}

/// Logs a failed transfer and returns it as an `Err`.
macro_rules! fail {
    ($kind:expr, $path:expr) => {{
        let err = $crate::TransferError::new($kind, $path);
        error!("{}", err);
        Err(err)
    }};
    ($kind:expr, $path:expr, $source:expr) => {{
        let source: std::io::Error = $source;
        error!("{}: {}", $crate::TransferError::new($kind, $path), source);
        Err($crate::TransferError::with_source($kind, $path, source))
    }};
}

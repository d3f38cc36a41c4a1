//! Fail-fast wrappers for top-level drivers
//!
//! Simulation drivers that cannot do anything useful after a failed transfer
//! use these to print the diagnostic to stderr and exit with a failure status.

use crate::{transfer, TransferError};
use std::path::Path;

/// Exit status used when a transfer fails
pub const EXIT_FAILURE: i32 = 1;

/// Turn a transfer result into its value or a process exit
pub trait OrExit<T> {
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, TransferError> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}

/// [`transfer::load`], exiting the process on failure
pub fn load_or_exit<P: AsRef<Path>>(path: P, buffer: &mut [f32]) {
    transfer::load(path, buffer).or_exit()
}

/// [`transfer::store`], exiting the process on failure
pub fn store_or_exit<P: AsRef<Path>>(path: P, buffer: &[f32]) {
    transfer::store(path, buffer).or_exit()
}

//! floatbuf - raw f32 buffer files
//!
//! Moves a contiguous block of `f32` values between memory and a headerless
//! binary file. The file holds exactly `count * 4` bytes in the platform's
//! native byte order and nothing else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use floatbuf::{load, store};
//!
//! fn example() -> floatbuf::Result<()> {
//!     let positions = [1.5f32, -2.25, 0.0, 3.4028235e38];
//!     store("positions.bin", &positions)?;
//!
//!     let mut restored = [0.0f32; 4];
//!     load("positions.bin", &mut restored)?;
//!     assert_eq!(positions, restored);
//!     Ok(())
//! }
//! ```
//!
//! Errors are returned as [`TransferError`]. Drivers that treat any failed
//! transfer as fatal can use [`fatal::OrExit`] to print the diagnostic and
//! exit.
//!
//! ## Features
//!
//! - **log** (default): transfer events through the `log` facade
//! - **mmap** (default): zero-copy reads with [`MappedBuffer`]
//! - **serde**: serialization for the core layout and error kinds

#[cfg(feature = "log")]
extern crate log as __raw_log;

#[macro_use]
mod debug;

pub mod error;
pub mod fatal;
#[cfg(feature = "mmap")]
pub mod mmap;
pub mod transfer;

pub use floatbuf_core::{Access, BufferLayout, ErrorKind};

pub use error::{Result, TransferError};
pub use fatal::OrExit;
#[cfg(feature = "mmap")]
pub use mmap::MappedBuffer;
pub use transfer::{element_count, load, load_all, load_vec, store};

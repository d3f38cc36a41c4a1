#![no_std]

//! floatbuf core - layout and error definitions for raw f32 buffer files
//!
//! A buffer file is a flat run of native-endian `f32` values with no header,
//! no length prefix and no checksum. This crate holds the pieces of that
//! contract that need no I/O: the byte count arithmetic, the byte views over
//! element slices and the error taxonomy shared by every transfer.

pub mod element;
pub mod error;
pub mod layout;

pub use element::{as_bytes, as_bytes_mut, BufferElement};
pub use error::*;
pub use layout::BufferLayout;

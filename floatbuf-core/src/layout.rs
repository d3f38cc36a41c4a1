//! Byte count contract for buffer files
//!
//! A file holding `count` elements is exactly `count * size_of::<f32>()`
//! bytes. Both directions of that conversion are checked here.

use crate::{BufferElement, ErrorKind};

/// Element count and byte length of one buffer file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferLayout {
    pub count: usize,
    pub byte_len: usize,
}

impl BufferLayout {
    /// Layout for `count` f32 values
    ///
    /// Fails when the byte length exceeds `isize::MAX`, the largest
    /// allocation or slice Rust can address.
    pub const fn for_count(count: usize) -> Result<Self, ErrorKind> {
        match count.checked_mul(core::mem::size_of::<f32>()) {
            Some(byte_len) if byte_len <= isize::MAX as usize => Ok(Self { count, byte_len }),
            _ => Err(ErrorKind::SizeOverflow),
        }
    }

    /// Layout for a slice; cannot overflow since the slice already exists
    pub fn of<T: BufferElement>(values: &[T]) -> Self {
        Self {
            count: values.len(),
            byte_len: core::mem::size_of_val(values),
        }
    }

    /// Layout of a file that is `byte_len` bytes long
    pub const fn from_byte_len(byte_len: usize) -> Result<Self, ErrorKind> {
        let element_size = core::mem::size_of::<f32>();

        if byte_len % element_size != 0 {
            return Err(ErrorKind::Misaligned);
        }

        Ok(Self {
            count: byte_len / element_size,
            byte_len,
        })
    }

    /// Layout of a file whose length comes from filesystem metadata
    pub fn from_file_len(file_len: u64) -> Result<Self, ErrorKind> {
        let byte_len = usize::try_from(file_len).map_err(|_| ErrorKind::SizeOverflow)?;
        Self::from_byte_len(byte_len)
    }

    /// Whether a file of `file_len` bytes holds at least this many elements
    pub fn fits_in(&self, file_len: u64) -> bool {
        file_len >= self.byte_len as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

//! Zero-copy reads through a read-only memory map

use crate::{Result, TransferError};
use floatbuf_core::{Access, BufferLayout, ErrorKind};
use memmap2::{Mmap, MmapOptions};
use std::{fs::File, path::Path};

/// The first `count` floats of a file, mapped into memory
///
/// The file handle and mapping live as long as this value. Writes to the
/// file by other processes while it is mapped are visible through
/// [`MappedBuffer::as_slice`].
pub struct MappedBuffer {
    mmap: Option<Mmap>,
    layout: BufferLayout,
}

impl MappedBuffer {
    /// Map `path` and expose its first `count` floats
    pub fn open<P: AsRef<Path>>(path: P, count: usize) -> Result<Self> {
        let path = path.as_ref();
        let layout = BufferLayout::for_count(count).map_err(|kind| TransferError::new(kind, path))?;

        trace!("mapping {} for reading", path.display());
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => return fail!(ErrorKind::Open(Access::Read), path, e),
        };
        let file_len = match file.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => return fail!(ErrorKind::ShortRead, path, e),
        };
        if !layout.fits_in(file_len) {
            return fail!(ErrorKind::ShortRead, path);
        }

        if layout.is_empty() {
            return Ok(Self { mmap: None, layout });
        }

        // SAFETY: read-only mapping of exactly the validated prefix
        let mmap = match unsafe { MmapOptions::new().len(layout.byte_len).map(&file) } {
            Ok(mmap) => mmap,
            Err(e) => return fail!(ErrorKind::ShortRead, path, e),
        };

        debug!(
            "mapped {} floats ({} bytes) from {}",
            layout.count,
            layout.byte_len,
            path.display()
        );
        Ok(Self {
            mmap: Some(mmap),
            layout,
        })
    }

    pub fn as_slice(&self) -> &[f32] {
        match &self.mmap {
            Some(mmap) => bytemuck::cast_slice(&mmap[..]),
            None => &[],
        }
    }

    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    /// Copy the mapped floats into a caller-owned buffer of the same length
    ///
    /// # Panics
    ///
    /// Panics if `buffer.len()` differs from the mapped count.
    pub fn copy_to(&self, buffer: &mut [f32]) {
        buffer.copy_from_slice(self.as_slice());
    }
}

impl std::ops::Deref for MappedBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.as_slice()
    }
}

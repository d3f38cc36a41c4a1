//! Load and store f32 buffers as raw bytes
//!
//! Files are headerless: `count` native-endian floats and nothing else. A
//! file written with one `count` must be read back with the same `count`,
//! since nothing in the file records it.

use crate::{Result, TransferError};
use floatbuf_core::{as_bytes, as_bytes_mut, Access, BufferLayout, ErrorKind};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// Fill `buffer` with the first `buffer.len()` floats stored at `path`
///
/// For regular files the length is checked before anything is read, so a
/// short file leaves `buffer` untouched. Devices and pipes report no length
/// and are read until the buffer is full. Bytes past the end of the buffer
/// are ignored.
pub fn load<P: AsRef<Path>>(path: P, buffer: &mut [f32]) -> Result<()> {
    let path = path.as_ref();
    let layout = BufferLayout::of(&*buffer);

    let mut file = open_for_read(path, layout)?;
    read_into(&mut file, path, buffer)
}

fn open_for_read(path: &Path, layout: BufferLayout) -> Result<File> {
    trace!("opening {} for reading", path.display());
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return fail!(ErrorKind::Open(Access::Read), path, e),
    };

    let meta = match file.metadata() {
        Ok(meta) => meta,
        Err(e) => return fail!(ErrorKind::ShortRead, path, e),
    };
    if meta.is_file() && !layout.fits_in(meta.len()) {
        return fail!(ErrorKind::ShortRead, path);
    }

    Ok(file)
}

fn read_into(file: &mut File, path: &Path, buffer: &mut [f32]) -> Result<()> {
    if let Err(e) = file.read_exact(as_bytes_mut(buffer)) {
        return fail!(ErrorKind::ShortRead, path, e);
    }

    debug!(
        "loaded {} floats ({} bytes) from {}",
        buffer.len(),
        std::mem::size_of_val(buffer),
        path.display()
    );
    Ok(())
}

/// Write `buffer` to `path`, creating the file or truncating it
///
/// On success the file is exactly `buffer.len() * 4` bytes long. Missing
/// parent directories are an open failure; they are not created.
pub fn store<P: AsRef<Path>>(path: P, buffer: &[f32]) -> Result<()> {
    let path = path.as_ref();

    trace!("opening {} for writing", path.display());
    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(e) => return fail!(ErrorKind::Open(Access::Write), path, e),
    };

    if let Err(e) = file.write_all(as_bytes(buffer)).and_then(|()| file.flush()) {
        return fail!(ErrorKind::ShortWrite, path, e);
    }

    debug!(
        "stored {} floats ({} bytes) to {}",
        buffer.len(),
        std::mem::size_of_val(buffer),
        path.display()
    );
    Ok(())
}

/// Load `count` floats from `path` into a freshly allocated vector
///
/// The vector is only allocated once a regular file is known to hold
/// `count` floats.
pub fn load_vec<P: AsRef<Path>>(path: P, count: usize) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let layout = BufferLayout::for_count(count).map_err(|kind| TransferError::new(kind, path))?;

    let mut file = open_for_read(path, layout)?;
    let mut buffer = vec![0.0f32; count];
    read_into(&mut file, path, &mut buffer)?;
    Ok(buffer)
}

/// Number of whole floats stored at `path`
pub fn element_count<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let file_len = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return fail!(ErrorKind::Open(Access::Read), path, e),
    };

    match BufferLayout::from_file_len(file_len) {
        Ok(layout) => Ok(layout.count),
        Err(kind) => fail!(kind, path),
    }
}

/// Load every float stored at `path`
///
/// The count is inferred from the file length. The format does not record
/// how many floats were meant to be stored, so prefer [`load_vec`] when the
/// caller knows the count.
pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let count = element_count(path)?;
    load_vec(path, count)
}

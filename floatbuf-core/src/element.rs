//! Byte views over element slices
//!
//! Values are copied verbatim in the platform's native byte order, so NaN
//! payloads, infinities and subnormals survive a round trip unchanged.

use bytemuck::Pod;

/// Types that can live in a buffer file
///
/// `Pod` guarantees every bit pattern is valid and there is no padding, which
/// is what lets a file's bytes be reinterpreted in place.
pub trait BufferElement: Pod {
    /// Size in bytes of one element on disk
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

impl BufferElement for f32 {}

/// View an element slice as its raw bytes
pub fn as_bytes<T: BufferElement>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// View an element slice as raw bytes that can be filled from a file
pub fn as_bytes_mut<T: BufferElement>(values: &mut [T]) -> &mut [u8] {
    bytemuck::cast_slice_mut(values)
}

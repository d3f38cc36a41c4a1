//! Error kinds for buffer transfers

/// Direction a file was being opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Access {
    Read,
    Write,
}

/// Everything that can go wrong moving a buffer to or from a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The file could not be opened
    Open(Access),
    /// Fewer bytes were available than the buffer requires
    ShortRead,
    /// Fewer bytes were written than the buffer holds
    ShortWrite,
    /// `count * size_of::<f32>()` does not fit in `usize`
    SizeOverflow,
    /// A byte length is not a whole number of elements
    Misaligned,
}

impl ErrorKind {
    /// True for the three kinds a transfer itself can fail with.
    ///
    /// Layout kinds are raised before any file is touched.
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorKind::Open(_) | ErrorKind::ShortRead | ErrorKind::ShortWrite
        )
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorKind::Open(Access::Read) => "Failed to open file for reading",
            ErrorKind::Open(Access::Write) => "Failed to open file for writing",
            ErrorKind::ShortRead => "Failed to read expected number of bytes from",
            ErrorKind::ShortWrite => "Failed to write expected number of bytes to",
            ErrorKind::SizeOverflow => "Buffer size overflows addressable memory",
            ErrorKind::Misaligned => "File size is not a multiple of the element size",
        };
        write!(f, "{msg}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_kinds() {
        assert!(ErrorKind::Open(Access::Read).is_fatal());
        assert!(ErrorKind::Open(Access::Write).is_fatal());
        assert!(ErrorKind::ShortRead.is_fatal());
        assert!(ErrorKind::ShortWrite.is_fatal());

        assert!(!ErrorKind::SizeOverflow.is_fatal());
        assert!(!ErrorKind::Misaligned.is_fatal());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ErrorKind::Open(Access::Write)).unwrap();
        assert_eq!(json, r#"{"Open":"Write"}"#);

        let kind: ErrorKind = serde_json::from_str(r#""ShortRead""#).unwrap();
        assert_eq!(kind, ErrorKind::ShortRead);
    }
}

use thiserror::Error;

/// An enumeration of the ways a decode can fail.
///
/// Bencode has no resynchronization markers, so every failure is terminal:
/// the first violated rule aborts the whole decode and there is no partial
/// result. Each variant carries the byte offset at which the violation was
/// detected.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The byte at the cursor begins no bencode construct. Also reported
    /// when a dictionary key position holds anything but a byte string.
    #[error("unknown type tag {found:?} at offset {offset}")]
    UnknownTag {
        /// Position of the offending byte.
        offset: usize,
        /// The offending byte.
        found: char,
    },

    /// A required `e` or `:` delimiter was not where it had to be.
    #[error("expected {expected:?}, got {found:?} at offset {offset}")]
    MalformedDelimiter {
        /// Position of the offending byte.
        offset: usize,
        /// The delimiter that was required.
        expected: char,
        /// The byte found instead.
        found: char,
    },

    /// A decimal run broke the canonical integer rules: no digits, non-digit
    /// content, a leading zero, or negative zero.
    #[error("invalid integer: expected {expected}, got {found:?} at offset {offset}")]
    InvalidInteger {
        /// Position of the offending byte.
        offset: usize,
        /// What the digit scanner would have accepted here.
        expected: &'static str,
        /// The byte found instead.
        found: char,
    },

    /// A byte string declared more content than the buffer holds.
    #[error("byte string at offset {offset} declares {declared} bytes but only {available} remain")]
    LengthMismatch {
        /// Position of the length prefix.
        offset: usize,
        /// The declared length (saturated at `u64::MAX`).
        declared: u64,
        /// How many bytes actually remained after the colon.
        available: usize,
    },

    /// Dictionary keys were not strictly ascending in raw byte order.
    /// Duplicate keys fail the same rule.
    #[error("dictionary keys not in ascending order at offset {offset}")]
    UnsortedKeys {
        /// Position of the key that broke the order.
        offset: usize,
    },

    /// Containers were nested deeper than the configured limit.
    #[error("maximum nesting depth exceeded at offset {offset}")]
    DepthExceeded {
        /// Position of the container that crossed the limit.
        offset: usize,
    },

    /// The buffer ended in the middle of a value.
    #[error("reached end of input in the middle of a value at offset {offset}")]
    UnexpectedEof {
        /// The buffer length, where the missing bytes would have started.
        offset: usize,
    },

    /// Bytes were left over after the single outermost value.
    #[error("trailing bytes after the outermost value at offset {offset}")]
    TrailingBytes {
        /// Position of the first leftover byte.
        offset: usize,
    },
}

impl Error {
    pub(crate) fn invalid_integer(expected: &'static str, found: u8, offset: usize) -> Self {
        Error::InvalidInteger {
            offset,
            expected,
            found: found as char,
        }
    }

    pub(crate) fn malformed_delimiter(expected: u8, found: u8, offset: usize) -> Self {
        Error::MalformedDelimiter {
            offset,
            expected: expected as char,
            found: found as char,
        }
    }
}

#[test]
fn decoding_errors_are_sync_send() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}
    is_send::<Error>();
    is_sync::<Error>();
}

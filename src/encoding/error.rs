use thiserror::Error;

/// An enumeration of the ways an encode can fail.
///
/// The [`Value`](crate::Value) union is closed, so there is no "unsupported
/// type" failure; what remains are the value-validity rules the type system
/// cannot express.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The dictionary holds two entries with the same key. Duplicate keys
    /// have no canonical representation, so the encoder refuses to pick one.
    #[error("duplicate dictionary key `{}`", String::from_utf8_lossy(.key))]
    DuplicateKey {
        /// The repeated key, as raw bytes.
        key: Vec<u8>,
    },

    /// The value nests deeper than the configured limit.
    #[error("maximum nesting depth ({max_depth}) exceeded")]
    DepthExceeded {
        /// The limit that was in effect.
        max_depth: usize,
    },
}

#[test]
fn encoding_errors_are_sync_send() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}
    is_send::<Error>();
    is_sync::<Error>();
}

//! Encodes and decodes bencoded structures.
//!
//! The decoder does not accept any sort of invalid encoding in any mode,
//! including non-canonical ones: integers with superfluous leading zeros,
//! negative zero, and dictionaries whose keys are not strictly ascending are
//! all rejected outright. The encoder likewise only produces canonical
//! output, re-sorting dictionary entries by raw key bytes no matter how the
//! caller ordered them. As a result there is exactly one byte representation
//! per value, and `encode(decode(buf)) == buf` holds for every buffer the
//! decoder accepts.
//!
//! Integers are arbitrary precision ([`num_bigint::BigInt`]); bencode places
//! no size limit on them and neither does this crate.
//!
//! ```
//! use benc::{decode, encode, Value};
//!
//! let value = decode(b"d3:cow3:moo4:spam4:eggse")?;
//! assert_eq!(value.get("cow").and_then(Value::as_str), Some("moo"));
//!
//! let bytes = encode(&value)?;
//! assert_eq!(bytes, b"d3:cow3:moo4:spam4:eggse");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(test), warn(missing_docs))]

pub mod decoding;
pub mod encoding;
mod value;

pub use crate::value::Value;

use crate::{decoding::Decoder, encoding::Encoder};

/// The nesting depth limit applied when none is configured explicitly.
///
/// Atoms (integers and byte strings) have depth zero; a list or dictionary is
/// one level deeper than its deepest member. Inputs that nest past the limit
/// are rejected instead of exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 2048;

/// Decode a complete bencoded value from `buf`.
///
/// The buffer must contain exactly one value; trailing bytes are an error.
/// Uses the [`DEFAULT_MAX_DEPTH`] nesting limit. To configure the limit, use
/// [`Decoder`] directly.
pub fn decode(buf: &[u8]) -> Result<Value, decoding::Error> {
    Decoder::new(buf).decode()
}

/// Encode `value` into its canonical byte representation.
///
/// Uses the [`DEFAULT_MAX_DEPTH`] nesting limit. To configure the limit, use
/// [`Encoder`] directly.
pub fn encode(value: &Value) -> Result<Vec<u8>, encoding::Error> {
    Encoder::new().encode(value)
}

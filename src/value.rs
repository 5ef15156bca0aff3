//! `Value`s hold decoded bencode data. A `Value` owns all of its content, so
//! it stays valid after the buffer it was decoded from is gone, and it can be
//! cloned and traversed freely.

use num_bigint::BigInt;

use crate::{decoding, encoding};

/// A single bencoded value.
///
/// Dictionaries are kept as the sequence of key/value pairs in the order they
/// were parsed or constructed. The decoder only ever produces strictly
/// ascending keys; hand-built dictionaries may be in any order, since the
/// encoder re-sorts entries into canonical order on its own.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Value {
    /// A signed integer of arbitrary precision
    Integer(BigInt),
    /// A byte string; may not be UTF-8
    Bytes(Vec<u8>),
    /// A list of values
    List(Vec<Value>),
    /// A dictionary of byte string keys and their values, in insertion order
    Dict(Vec<(Vec<u8>, Value)>),
}

impl Value {
    /// Decode a value from its bencoded representation.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, decoding::Error> {
        crate::decode(buf)
    }

    /// Encode this value into its canonical bencoded representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, encoding::Error> {
        crate::encode(self)
    }

    /// The name of this value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bytes(_) => "byte string",
            Value::List(_) => "list",
            Value::Dict(_) => "dictionary",
        }
    }

    /// Borrow the integer, if this is an integer.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(int) => Some(int),
            _ => None,
        }
    }

    /// Borrow the raw bytes, if this is a byte string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// View this byte string as text.
    ///
    /// This is the only point where the crate interprets bytes as text, and
    /// it is strict UTF-8: returns `None` if this is not a byte string or the
    /// bytes are not valid UTF-8. The wire format is unaffected either way.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Borrow the entries, if this is a dictionary.
    pub fn as_dict(&self) -> Option<&[(Vec<u8>, Value)]> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a dictionary entry by key.
    ///
    /// Returns `None` if this is not a dictionary or the key is absent. The
    /// scan is linear; dictionaries in bencoded data are small.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let key = key.as_ref();
        match self {
            Value::Dict(entries) => entries
                .iter()
                .find(|(candidate, _)| candidate.as_slice() == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty)*) => {$(
        impl From<$ty> for Value {
            fn from(int: $ty) -> Self {
                Value::Integer(BigInt::from(int))
            }
        }
    )*};
}

impl_from_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<BigInt> for Value {
    fn from(int: BigInt) -> Self {
        Value::Integer(int)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Bytes(text.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Bytes(text.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::List(list)
    }
}

impl From<Vec<(Vec<u8>, Value)>> for Value {
    fn from(entries: Vec<(Vec<u8>, Value)>) -> Self {
        Value::Dict(entries)
    }
}

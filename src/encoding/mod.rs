//! Encodes a [`Value`](crate::Value) tree into its canonical byte form.
//!
//! Every value has exactly one encoding. The encoder enforces that on its
//! own: dictionary entries are re-sorted by ascending raw key bytes no
//! matter how the caller ordered them, and integers render with minimal
//! digits. Whatever buffer comes out of here decodes back to an equal value,
//! and re-encoding that value reproduces the buffer byte for byte.
//!
//! ```
//! use benc::{encoding::Encoder, Value};
//!
//! let dict = Value::Dict(vec![
//!     (b"spam".to_vec(), Value::from("eggs")),
//!     (b"cow".to_vec(), Value::from("moo")),
//! ]);
//!
//! // entries come out sorted, not in the order above
//! let bytes = Encoder::new().encode(&dict)?;
//! assert_eq!(bytes, b"d3:cow3:moo4:spam4:eggse");
//! # Ok::<(), benc::encoding::Error>(())
//! ```

mod encoder;
mod error;

pub use self::{encoder::Encoder, error::Error};

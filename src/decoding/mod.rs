//! Decodes a bencoded buffer into a [`Value`](crate::Value) tree.
//!
//! For the common case, [`decode`](crate::decode) at the crate root does
//! everything:
//!
//! ```
//! let _value = benc::decode(b"d3:fooi1ee")?;
//! # Ok::<(), benc::decoding::Error>(())
//! ```
//!
//! Decoders have a depth limit to prevent resource exhaustion from hostile
//! inputs. By default it is set high enough for most structures that you'd
//! encounter when prototyping, but the higher the depth limit, the more
//! stack space an attacker can cause your program to use, so for production
//! use we recommend setting the bound tightly:
//!
//! ```
//! use benc::decoding::Decoder;
//!
//! let _value = Decoder::new(b"d3:fooi1ee").with_max_depth(3).decode()?;
//! # Ok::<(), benc::decoding::Error>(())
//! ```
//!
//! Atoms (integers and byte strings) have depth zero, and lists and dicts
//! have a depth equal to the depth of their deepest member plus one.
//!
//! The decoder is strict. There is no partial result and no recovery: the
//! format has no resynchronization point, so the first violation anywhere in
//! the structure fails the whole buffer, with the byte offset of the
//! violation in the error.

mod decoder;
mod error;

pub use self::{decoder::Decoder, error::Error};

use num_bigint::BigInt;

use crate::{encoding::Error, Value, DEFAULT_MAX_DEPTH};

/// A canonical bencode encoder.
///
/// Produces the single canonical byte representation of a value: integers in
/// minimal decimal form, byte strings length-prefixed and verbatim, and
/// dictionary entries re-sorted by ascending raw key bytes regardless of the
/// order the caller supplied them in. Encoding is pure and deterministic;
/// the caller's value is never mutated.
#[derive(Debug)]
pub struct Encoder {
    output: Vec<u8>,
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            output: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Encoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Set the maximum nesting depth of the value to be encoded. Encoding
    /// recurses along the value tree the same way decoding recurses along
    /// the buffer, so the same guard applies.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Encode a single value, returning the canonical buffer.
    pub fn encode(mut self, value: &Value) -> Result<Vec<u8>, Error> {
        self.push_value(value, 0)?;
        Ok(self.output)
    }

    fn push_value(&mut self, value: &Value, depth: usize) -> Result<(), Error> {
        match value {
            Value::Integer(int) => {
                self.push_integer(int);
                Ok(())
            },
            Value::Bytes(bytes) => {
                self.push_bytes(bytes);
                Ok(())
            },
            Value::List(elements) => {
                self.check_depth(depth)?;
                self.output.push(b'l');
                for element in elements {
                    self.push_value(element, depth + 1)?;
                }
                self.output.push(b'e');
                Ok(())
            },
            Value::Dict(entries) => {
                self.check_depth(depth)?;
                self.push_dict(entries, depth)
            },
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), Error> {
        if depth >= self.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    /// `BigInt`'s decimal rendering is already the canonical form: minimal
    /// digits, `-` only on negative values, and no `-0` (the sign of a zero
    /// magnitude is unrepresentable).
    fn push_integer(&mut self, int: &BigInt) {
        self.output.push(b'i');
        self.output.extend_from_slice(int.to_string().as_bytes());
        self.output.push(b'e');
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes.len().to_string().as_bytes());
        self.output.push(b':');
        self.output.extend_from_slice(bytes);
    }

    /// Emit dictionary entries in ascending raw key order, whatever order
    /// they were supplied in. Only the emission order is permuted; entries
    /// themselves are left untouched. Two equal keys have no canonical
    /// representation and are refused.
    fn push_dict(&mut self, entries: &[(Vec<u8>, Value)], depth: usize) -> Result<(), Error> {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| entries[a].0.cmp(&entries[b].0));

        for pair in order.windows(2) {
            if entries[pair[0]].0 == entries[pair[1]].0 {
                return Err(Error::DuplicateKey {
                    key: entries[pair[0]].0.clone(),
                });
            }
        }

        self.output.push(b'd');
        for &index in &order {
            let (key, value) = &entries[index];
            self.push_bytes(key);
            self.push_value(value, depth + 1)?;
        }
        self.output.push(b'e');
        Ok(())
    }
}
